//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-wide dashboard store behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Enum inputs use their wire ids (`DIGI_FLORA`, `INCOME`, ...).
//! - Failures are reported in envelopes, never as panics.

use founder_core::model::crm::TaskPriority;
use founder_core::model::finance::{AssetType, TransactionType};
use founder_core::model::study::{MockExam, ScheduleField, ScheduleItemType};
use founder_core::service::{
    AssetForm, ClientForm, DebtForm, ErrorLogForm, MockResultForm, ScheduleForm, TaskForm,
    TransactionForm,
};
use founder_core::{
    core_version as core_version_inner, dashboard_summary as dashboard_summary_inner, format_inr,
    init_logging as init_logging_inner, metrics, ping as ping_inner, BrandId, Collection,
    FormResult, MutationOutcome, RecordId, Store,
};
use log::{error, warn};
use std::sync::{Mutex, OnceLock};

static STORE: OnceLock<Mutex<Store>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for entry and command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created or affected record id.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, record_id: Option<String>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Headline figures for the command center.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub net_worth: f64,
    pub net_worth_label: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_operating_cash: f64,
    pub receivables: f64,
    pub projected_net_position: f64,
    pub projected_net_position_label: String,
    pub pipeline_value: f64,
    pub total_crm_value: f64,
    /// Wire id of the highest-revenue brand, `None` without revenue data.
    pub top_revenue_brand: Option<String>,
    pub readiness_percent: u32,
    pub open_tasks: u32,
    /// Empty on success, otherwise the failure reason.
    pub message: String,
}

impl DashboardSnapshot {
    fn unavailable(message: String) -> Self {
        Self {
            net_worth: 0.0,
            net_worth_label: format_inr(0.0),
            total_income: 0.0,
            total_expense: 0.0,
            net_operating_cash: 0.0,
            receivables: 0.0,
            projected_net_position: 0.0,
            projected_net_position_label: format_inr(0.0),
            pipeline_value: 0.0,
            total_crm_value: 0.0,
            top_revenue_brand: None,
            readiness_percent: 0,
            open_tasks: 0,
            message,
        }
    }
}

/// Backup export envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupResponse {
    pub ok: bool,
    /// Pretty JSON snapshot on success.
    pub json: Option<String>,
    pub message: String,
}

/// Computes the dashboard headline figures from the current store.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; `message` is non-empty when the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_summary() -> DashboardSnapshot {
    match with_store(|store| dashboard_summary_inner(store.state())) {
        Ok(summary) => DashboardSnapshot {
            net_worth: summary.net_worth,
            net_worth_label: format_inr(summary.net_worth),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            net_operating_cash: summary.net_operating_cash,
            receivables: summary.receivables,
            projected_net_position: summary.projected_net_position,
            projected_net_position_label: format_inr(summary.projected_net_position),
            pipeline_value: summary.pipeline_value,
            total_crm_value: summary.total_crm_value,
            top_revenue_brand: summary
                .top_revenue_brand
                .map(|brand| brand.as_str().to_string()),
            readiness_percent: summary.readiness_percent,
            open_tasks: u32::try_from(summary.open_tasks).unwrap_or(u32::MAX),
            message: String::new(),
        },
        Err(err) => DashboardSnapshot::unavailable(err),
    }
}

/// Overall syllabus readiness, `0..=100`. Returns 0 when the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn readiness_percent() -> u32 {
    with_store(|store| metrics::study::readiness_percent(store.syllabus())).unwrap_or(0)
}

/// Records an income or expense entry.
///
/// # FFI contract
/// - `kind`: `INCOME|EXPENSE`; `brand_id`: brand wire id.
/// - Blank `category` and `date` take defaults.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_transaction(
    amount: String,
    description: String,
    kind: String,
    brand_id: String,
    category: String,
    date: String,
) -> EntryActionResponse {
    let form = match (parse_transaction_type(&kind), parse_brand(&brand_id)) {
        (Ok(kind), Ok(brand_id)) => TransactionForm {
            amount,
            description,
            kind,
            brand_id,
            category,
            date,
        },
        (Err(err), _) | (_, Err(err)) => return EntryActionResponse::failure(err),
    };
    submit_with_store("entry_add_transaction", "Transaction recorded.", |store| {
        form.submit(store)
    })
}

/// Adds a new lead to the CRM.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_client(
    name: String,
    company: String,
    email: String,
    phone: String,
    brand_id: String,
    project_value: String,
    notes: String,
) -> EntryActionResponse {
    let brand_id = match parse_brand(&brand_id) {
        Ok(brand_id) => brand_id,
        Err(err) => return EntryActionResponse::failure(err),
    };
    let form = ClientForm {
        name,
        company,
        email,
        phone,
        brand_id,
        project_value,
        notes,
    };
    submit_with_store("entry_add_client", "Client added.", |store| form.submit(store))
}

/// Adds an open task.
///
/// # FFI contract
/// - Blank `priority` means `MEDIUM`; blank `due_date` means today.
/// - Blank `client_name` and `procedure` are stored as absent.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_task(
    title: String,
    brand_id: String,
    priority: String,
    due_date: String,
    client_name: String,
    procedure: String,
) -> EntryActionResponse {
    let form = match task_form(title, &brand_id, &priority, due_date, client_name, procedure) {
        Ok(form) => form,
        Err(err) => return EntryActionResponse::failure(err),
    };
    submit_with_store("entry_add_task", "Task added.", |store| form.submit(store))
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_asset(name: String, kind: String, value: String) -> EntryActionResponse {
    let kind = match AssetType::parse(&kind) {
        Some(kind) => kind,
        None => return EntryActionResponse::failure(format!("unknown asset type `{kind}`")),
    };
    let form = AssetForm { name, kind, value };
    submit_with_store("entry_add_asset", "Asset added.", |store| form.submit(store))
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_debt(
    creditor: String,
    amount: String,
    due_date: String,
    interest_rate: String,
) -> EntryActionResponse {
    let form = DebtForm {
        creditor,
        amount,
        due_date,
        interest_rate,
    };
    submit_with_store("entry_add_debt", "Debt added.", |store| form.submit(store))
}

/// Inserts a schedule block; the day stays ordered by time.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_schedule_item(time: String, activity: String, kind: String) -> EntryActionResponse {
    let kind = match ScheduleItemType::parse(&kind) {
        Some(kind) => kind,
        None => return EntryActionResponse::failure(format!("unknown schedule type `{kind}`")),
    };
    let form = ScheduleForm {
        time,
        activity,
        kind,
    };
    submit_with_store("entry_add_schedule_item", "Schedule updated.", |store| {
        form.submit(store)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_error_log(
    subject: String,
    topic: String,
    mistake: String,
    correction: String,
) -> EntryActionResponse {
    let form = ErrorLogForm {
        subject,
        topic,
        mistake,
        correction,
    };
    submit_with_store("entry_add_error_log", "Mistake logged.", |store| {
        form.submit(store)
    })
}

/// Logs a mock test attempt. Blank `total_marks` means 80; blank `date` means today.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_mock_result(
    exam_type: String,
    subject: String,
    score: String,
    total_marks: String,
    date: String,
) -> EntryActionResponse {
    let exam_type = match MockExam::parse(&exam_type) {
        Some(exam_type) => exam_type,
        None => return EntryActionResponse::failure(format!("unknown exam type `{exam_type}`")),
    };
    let form = MockResultForm {
        exam_type,
        subject,
        score,
        total_marks,
        date,
    };
    submit_with_store("entry_add_mock_result", "Mock result saved.", |store| {
        form.submit(store)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: String) -> EntryActionResponse {
    store_action("toggle_task", |store| {
        outcome_response(store.toggle_task(&id), "Task toggled.", &id)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_habit(id: String) -> EntryActionResponse {
    store_action("toggle_habit", |store| {
        outcome_response(store.toggle_habit(&id), "Habit toggled.", &id)
    })
}

/// Replaces one field of a schedule block.
///
/// # FFI contract
/// - `field`: `time|activity|type|completed`.
/// - `type` takes a schedule wire id; `completed` takes `true|false`.
/// - The day is not re-sorted after a time change.
#[flutter_rust_bridge::frb(sync)]
pub fn update_schedule_item(id: String, field: String, value: String) -> EntryActionResponse {
    store_action("update_schedule_item", |store| {
        update_schedule_in(store, &id, &field, &value)
    })
}

/// Checks a schedule block off, or back on.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_schedule_item(id: String) -> EntryActionResponse {
    store_action("toggle_schedule_item", |store| {
        outcome_response(store.toggle_schedule_item(&id), "Schedule item toggled.", &id)
    })
}

/// Moves a chapter to its next mastery level, wrapping after mastered.
#[flutter_rust_bridge::frb(sync)]
pub fn advance_chapter(subject_id: String, chapter_id: String) -> EntryActionResponse {
    store_action("advance_chapter", |store| {
        outcome_response(
            store.advance_chapter_mastery(&subject_id, &chapter_id),
            "Chapter mastery advanced.",
            &chapter_id,
        )
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn rename_brand(brand_id: String, name: String) -> EntryActionResponse {
    let brand_id = match parse_brand(&brand_id) {
        Ok(brand_id) => brand_id,
        Err(err) => return EntryActionResponse::failure(err),
    };
    store_action("rename_brand", |store| rename_brand_in(store, brand_id, &name))
}

/// Deletes one record from a deletable collection.
///
/// # FFI contract
/// - `collection`: `transactions|clients|tasks|assets|debts|schedule|error_log|mock_results`.
/// - Absent ids fail with a not-found message and leave the store unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_record(collection: String, id: String) -> EntryActionResponse {
    let collection = match Collection::parse(&collection) {
        Some(collection) => collection,
        None => return EntryActionResponse::failure(format!("unknown collection `{collection}`")),
    };
    store_action("delete_record", |store| delete_in(store, collection, &id))
}

/// Exports the full store as pretty JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn export_backup() -> BackupResponse {
    match with_store(|store| store.export_json()) {
        Ok(Ok(json)) => BackupResponse {
            ok: true,
            json: Some(json),
            message: "Backup exported.".to_string(),
        },
        Ok(Err(err)) => BackupResponse {
            ok: false,
            json: None,
            message: format!("export_backup failed: {err}"),
        },
        Err(err) => BackupResponse {
            ok: false,
            json: None,
            message: format!("export_backup failed: {err}"),
        },
    }
}

/// Replaces every collection with the demo fixtures.
#[flutter_rust_bridge::frb(sync)]
pub fn factory_reset() -> EntryActionResponse {
    store_action("factory_reset", |store| match store.reset_to_seed() {
        Ok(()) => EntryActionResponse::success("Store reset to demo data.", None),
        Err(err) => EntryActionResponse::failure(format!("factory_reset failed: {err}")),
    })
}

fn rename_brand_in(store: &mut Store, brand_id: BrandId, name: &str) -> EntryActionResponse {
    let name = name.trim();
    if name.is_empty() {
        return EntryActionResponse::failure("brand name is required");
    }
    outcome_response(
        store.update_brand(brand_id, name),
        "Brand renamed.",
        brand_id.as_str(),
    )
}

fn update_schedule_in(
    store: &mut Store,
    id: &str,
    field: &str,
    value: &str,
) -> EntryActionResponse {
    match parse_schedule_field(field, value) {
        Ok(field) => outcome_response(store.update_schedule(id, field), "Schedule updated.", id),
        Err(err) => EntryActionResponse::failure(format!("update_schedule_item failed: {err}")),
    }
}

fn delete_in(store: &mut Store, collection: Collection, id: &str) -> EntryActionResponse {
    let outcome = match collection {
        Collection::Transactions => store.delete_transaction(id),
        Collection::Clients => store.delete_client(id),
        Collection::Tasks => store.delete_task(id),
        Collection::Assets => store.delete_asset(id),
        Collection::Debts => store.delete_debt(id),
        Collection::Schedule => store.delete_schedule_item(id),
        Collection::ErrorLog => store.delete_error_log(id),
        Collection::MockResults => store.delete_mock_result(id),
        Collection::Brands | Collection::Syllabus | Collection::Habits => {
            return EntryActionResponse::failure(format!(
                "records in `{}` cannot be deleted",
                collection.as_str()
            ));
        }
    };
    outcome_response(outcome, "Record deleted.", id)
}

fn outcome_response(outcome: MutationOutcome, message: &str, id: &str) -> EntryActionResponse {
    match outcome {
        MutationOutcome::Applied => EntryActionResponse::success(message, Some(id.to_string())),
        MutationOutcome::NotFound => EntryActionResponse::failure(format!("record not found: {id}")),
    }
}

fn submit_with_store(
    op: &'static str,
    message: &'static str,
    submit: impl FnOnce(&mut Store) -> FormResult<RecordId>,
) -> EntryActionResponse {
    store_action(op, |store| match submit(store) {
        Ok(id) => EntryActionResponse::success(message, Some(id)),
        Err(err) => EntryActionResponse::failure(format!("{op} failed: {err}")),
    })
}

fn store_action(
    op: &'static str,
    action: impl FnOnce(&mut Store) -> EntryActionResponse,
) -> EntryActionResponse {
    match with_store(action) {
        Ok(response) => response,
        Err(err) => EntryActionResponse::failure(format!("{op} failed: {err}")),
    }
}

fn with_store<T>(f: impl FnOnce(&mut Store) -> T) -> Result<T, String> {
    let store = STORE.get_or_init(|| Mutex::new(initial_store()));
    let mut guard = store
        .lock()
        .map_err(|_| "store lock poisoned by an earlier failure".to_string())?;
    Ok(f(&mut guard))
}

fn initial_store() -> Store {
    match Store::seeded() {
        Ok(store) => store,
        Err(err) => {
            error!("event=store_init module=ffi status=error error={err}");
            warn!("event=store_init module=ffi status=fallback collections=empty");
            Store::empty()
        }
    }
}

fn parse_brand(value: &str) -> Result<BrandId, String> {
    BrandId::parse(value).ok_or_else(|| format!("unknown brand `{value}`"))
}

fn task_form(
    title: String,
    brand_id: &str,
    priority: &str,
    due_date: String,
    client_name: String,
    procedure: String,
) -> Result<TaskForm, String> {
    let brand_id = parse_brand(brand_id)?;
    let priority = if priority.trim().is_empty() {
        TaskPriority::Medium
    } else {
        TaskPriority::parse(priority)
            .ok_or_else(|| format!("unknown task priority `{priority}`"))?
    };
    Ok(TaskForm {
        title,
        brand_id,
        priority,
        due_date,
        client_name,
        procedure,
    })
}

fn parse_schedule_field(field: &str, value: &str) -> Result<ScheduleField, String> {
    let required = |name: &str| {
        let value = value.trim();
        if value.is_empty() {
            Err(format!("`{name}` is required"))
        } else {
            Ok(value.to_string())
        }
    };
    match field.trim() {
        "time" => required("time").map(ScheduleField::Time),
        "activity" => required("activity").map(ScheduleField::Activity),
        "type" => ScheduleItemType::parse(value)
            .map(ScheduleField::Kind)
            .ok_or_else(|| format!("unknown schedule type `{value}`")),
        "completed" => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(ScheduleField::Completed(true)),
            "false" => Ok(ScheduleField::Completed(false)),
            _ => Err(format!("`completed` must be true or false, got `{value}`")),
        },
        other => Err(format!("unknown schedule field `{other}`")),
    }
}

fn parse_transaction_type(value: &str) -> Result<TransactionType, String> {
    TransactionType::parse(value).ok_or_else(|| format!("unknown transaction type `{value}`"))
}
