//! Entry forms: raw text drafts validated into store inserts.
//!
//! # Responsibility
//! - Hold user-entered text for each add dialog.
//! - Apply required-field guards and defaults, then insert through `Store`.
//!
//! # Invariants
//! - A rejected submit leaves the store untouched.
//! - Blank dates default to today's local date (`YYYY-MM-DD`).
//! - Logs carry form and field names only, never entered values.

use crate::model::brand::BrandId;
use crate::model::crm::{ClientStatus, NewClient, NewTask, TaskPriority};
use crate::model::finance::{
    AssetType, DebtStatus, NewAsset, NewDebt, NewTransaction, TransactionType,
};
use crate::model::study::{
    MockExam, NewErrorLogEntry, NewMockTestResult, NewScheduleItem, ScheduleItemType,
};
use crate::model::RecordId;
use crate::store::ids::IdGenerator;
use crate::store::Store;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_CATEGORY: &str = "General";
const JUST_NOW: &str = "Just now";
const DEFAULT_MOCK_TOTAL_MARKS: f64 = 80.0;

/// Guard failure for a form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Required field is empty after trimming.
    MissingField(&'static str),
    /// Numeric field does not hold a finite number.
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "`{field}` is required"),
            Self::InvalidNumber { field, value } => {
                write!(f, "`{field}` must be a number, got `{value}`")
            }
        }
    }
}

impl Error for FormError {}

impl FormError {
    pub fn field(&self) -> &'static str {
        match *self {
            Self::MissingField(field) | Self::InvalidNumber { field, .. } => field,
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub kind: TransactionType,
    pub brand_id: BrandId,
    pub category: String,
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            kind: TransactionType::Income,
            brand_id: BrandId::Misc,
            category: String::new(),
            date: String::new(),
        }
    }
}

impl TransactionForm {
    pub fn validate(&self) -> FormResult<NewTransaction> {
        let amount = required_number("amount", &self.amount)?;
        let description = required("description", &self.description)?;
        Ok(NewTransaction {
            date: or_today(&self.date),
            amount,
            description,
            kind: self.kind,
            brand_id: self.brand_id,
            category: or_default(&self.category, DEFAULT_CATEGORY),
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("transaction", self.validate())?;
        Ok(accepted("transaction", store.add_transaction(input)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub brand_id: BrandId,
    pub project_value: String,
    pub notes: String,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            brand_id: BrandId::DigiFlora,
            project_value: String::new(),
            notes: String::new(),
        }
    }
}

impl ClientForm {
    /// New clients always enter the pipeline as unpaid leads.
    pub fn validate(&self) -> FormResult<NewClient> {
        let company = required("company", &self.company)?;
        Ok(NewClient {
            name: self.name.trim().to_string(),
            company,
            email: optional(&self.email),
            phone: optional(&self.phone),
            brand_id: self.brand_id,
            status: ClientStatus::Lead,
            project_value: lenient_number(&self.project_value),
            paid_amount: 0.0,
            last_contact: JUST_NOW.to_string(),
            notes: optional(&self.notes),
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("client", self.validate())?;
        Ok(accepted("client", store.add_client(input)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub brand_id: BrandId,
    pub priority: TaskPriority,
    pub due_date: String,
    pub client_name: String,
    pub procedure: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            brand_id: BrandId::DigiFlora,
            priority: TaskPriority::Medium,
            due_date: String::new(),
            client_name: String::new(),
            procedure: String::new(),
        }
    }
}

impl TaskForm {
    pub fn validate(&self) -> FormResult<NewTask> {
        let title = required("title", &self.title)?;
        Ok(NewTask {
            title,
            brand_id: self.brand_id,
            priority: self.priority,
            due_date: or_today(&self.due_date),
            client_name: optional(&self.client_name),
            procedure: optional(&self.procedure),
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("task", self.validate())?;
        Ok(accepted("task", store.add_task(input)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetForm {
    pub name: String,
    pub kind: AssetType,
    pub value: String,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: AssetType::Bank,
            value: String::new(),
        }
    }
}

impl AssetForm {
    pub fn validate(&self) -> FormResult<NewAsset> {
        let name = required("name", &self.name)?;
        let value = required_number("value", &self.value)?;
        Ok(NewAsset {
            name,
            kind: self.kind,
            value,
            last_updated: JUST_NOW.to_string(),
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("asset", self.validate())?;
        Ok(accepted("asset", store.add_asset(input)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtForm {
    pub creditor: String,
    pub amount: String,
    pub due_date: String,
    pub interest_rate: String,
}

impl DebtForm {
    pub fn validate(&self) -> FormResult<NewDebt> {
        let creditor = required("creditor", &self.creditor)?;
        let amount = required_number("amount", &self.amount)?;
        let interest_rate = if self.interest_rate.trim().is_empty() {
            0.0
        } else {
            parse_number("interestRate", &self.interest_rate)?
        };
        Ok(NewDebt {
            creditor,
            amount,
            due_date: self.due_date.trim().to_string(),
            interest_rate,
            status: DebtStatus::Pending,
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("debt", self.validate())?;
        Ok(accepted("debt", store.add_debt(input)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    /// `HH:MM`, 24-hour.
    pub time: String,
    pub activity: String,
    pub kind: ScheduleItemType,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            time: String::new(),
            activity: String::new(),
            kind: ScheduleItemType::Study,
        }
    }
}

impl ScheduleForm {
    pub fn validate(&self) -> FormResult<NewScheduleItem> {
        let time = required("time", &self.time)?;
        let activity = required("activity", &self.activity)?;
        Ok(NewScheduleItem {
            time,
            activity,
            kind: self.kind,
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("schedule", self.validate())?;
        Ok(accepted("schedule", store.add_schedule_item(input)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLogForm {
    pub subject: String,
    pub topic: String,
    pub mistake: String,
    pub correction: String,
}

impl ErrorLogForm {
    pub fn validate(&self) -> FormResult<NewErrorLogEntry> {
        let topic = required("topic", &self.topic)?;
        Ok(NewErrorLogEntry {
            subject: self.subject.trim().to_string(),
            topic,
            mistake: self.mistake.trim().to_string(),
            correction: self.correction.trim().to_string(),
            date: today(),
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("error_log", self.validate())?;
        Ok(accepted("error_log", store.add_error_log(input)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResultForm {
    pub exam_type: MockExam,
    pub subject: String,
    pub score: String,
    /// Blank means the default 80-mark paper.
    pub total_marks: String,
    pub date: String,
}

impl Default for MockResultForm {
    fn default() -> Self {
        Self {
            exam_type: MockExam::Boards,
            subject: String::new(),
            score: String::new(),
            total_marks: String::new(),
            date: String::new(),
        }
    }
}

impl MockResultForm {
    pub fn validate(&self) -> FormResult<NewMockTestResult> {
        let score = required_number("score", &self.score)?;
        let total_marks = if self.total_marks.trim().is_empty() {
            DEFAULT_MOCK_TOTAL_MARKS
        } else {
            parse_number("totalMarks", &self.total_marks)?
        };
        Ok(NewMockTestResult {
            date: or_today(&self.date),
            exam_type: self.exam_type,
            subject: self.subject.trim().to_string(),
            score,
            total_marks,
        })
    }

    pub fn submit<G: IdGenerator>(&self, store: &mut Store<G>) -> FormResult<RecordId> {
        let input = checked("mock_result", self.validate())?;
        Ok(accepted("mock_result", store.add_mock_result(input)))
    }
}

fn checked<T>(form: &'static str, result: FormResult<T>) -> FormResult<T> {
    result.inspect_err(|err| {
        warn!(
            "event=form_submit module=service form={form} status=error field={}",
            err.field()
        );
    })
}

fn accepted(form: &'static str, id: RecordId) -> RecordId {
    debug!("event=form_submit module=service form={form} status=ok id={id}");
    id
}

fn required(field: &'static str, value: &str) -> FormResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn required_number(field: &'static str, value: &str) -> FormResult<f64> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    parse_number(field, value)
}

fn parse_number(field: &'static str, value: &str) -> FormResult<f64> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })
}

/// Blank or unparseable input counts as zero.
fn lenient_number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_default(value: &str, fallback: &str) -> String {
    optional(value).unwrap_or_else(|| fallback.to_string())
}

fn or_today(value: &str) -> String {
    optional(value).unwrap_or_else(today)
}
