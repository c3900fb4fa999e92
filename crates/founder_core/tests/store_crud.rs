use founder_core::model::brand::BrandId;
use founder_core::model::crm::{ClientStatus, NewClient, NewTask, TaskPriority};
use founder_core::model::finance::{
    Asset, AssetType, Debt, DebtStatus, NewAsset, NewDebt, NewTransaction, Transaction,
    TransactionType,
};
use founder_core::model::study::{
    ErrorLogEntry, MasteryLevel, MockExam, NewErrorLogEntry, NewMockTestResult, NewScheduleItem,
    ScheduleField, ScheduleItemType,
};
use founder_core::{MutationOutcome, SequentialIdGenerator, Store, StoreState};

fn seeded_with_sequential_ids() -> Store<SequentialIdGenerator> {
    let state = founder_core::load_seed().unwrap();
    Store::with_id_generator(state, SequentialIdGenerator::new("new-"))
}

fn task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        brand_id: BrandId::CeoHive,
        priority: TaskPriority::High,
        due_date: "2026-10-20".to_string(),
        client_name: None,
        procedure: None,
    }
}

fn schedule_item(time: &str) -> NewScheduleItem {
    NewScheduleItem {
        time: time.to_string(),
        activity: format!("block at {time}"),
        kind: ScheduleItemType::Work,
    }
}

#[test]
fn add_transaction_inserts_at_head_with_fresh_id() {
    let mut store = seeded_with_sequential_ids();
    let before = store.transactions().len();
    let input = NewTransaction {
        date: "2026-10-19".to_string(),
        amount: 1000.0,
        description: "Workshop".to_string(),
        kind: TransactionType::Income,
        brand_id: BrandId::Fundagist,
        category: "Consulting".to_string(),
    };

    let id = store.add_transaction(input.clone());

    assert_eq!(id, "new-1");
    assert_eq!(store.transactions().len(), before + 1);
    assert_eq!(
        store.transactions()[0],
        Transaction {
            id,
            date: input.date,
            amount: input.amount,
            description: input.description,
            kind: input.kind,
            brand_id: input.brand_id,
            category: input.category,
        }
    );
}

#[test]
fn add_asset_inserts_input_at_head() {
    let mut store = seeded_with_sequential_ids();
    let before = store.assets().len();

    let id = store.add_asset(NewAsset {
        name: "Sovereign gold bond".to_string(),
        kind: AssetType::LongTerm,
        value: 52_000.0,
        last_updated: "Just now".to_string(),
    });

    assert_eq!(store.assets().len(), before + 1);
    assert_eq!(
        store.assets()[0],
        Asset {
            id,
            name: "Sovereign gold bond".to_string(),
            kind: AssetType::LongTerm,
            value: 52_000.0,
            last_updated: "Just now".to_string(),
        }
    );
}

#[test]
fn add_debt_inserts_input_at_head() {
    let mut store = seeded_with_sequential_ids();
    let before = store.debts().len();

    let id = store.add_debt(NewDebt {
        creditor: "Axis Bank".to_string(),
        amount: 75_000.0,
        due_date: "2027-01-10".to_string(),
        interest_rate: 11.5,
        status: DebtStatus::Overdue,
    });

    assert_eq!(id, "new-1");
    assert_eq!(store.debts().len(), before + 1);
    assert_eq!(
        store.debts()[0],
        Debt {
            id,
            creditor: "Axis Bank".to_string(),
            amount: 75_000.0,
            due_date: "2027-01-10".to_string(),
            interest_rate: 11.5,
            status: DebtStatus::Overdue,
        }
    );
}

#[test]
fn add_error_log_inserts_input_at_head() {
    let mut store = seeded_with_sequential_ids();
    let before = store.error_log().len();

    let id = store.add_error_log(NewErrorLogEntry {
        subject: "Accountancy".to_string(),
        topic: "Goodwill".to_string(),
        mistake: "Used average profit instead of super profit".to_string(),
        correction: "Subtract normal profit first".to_string(),
        date: "2026-10-18".to_string(),
    });

    assert_eq!(store.error_log().len(), before + 1);
    assert_eq!(
        store.error_log()[0],
        ErrorLogEntry {
            id,
            subject: "Accountancy".to_string(),
            topic: "Goodwill".to_string(),
            mistake: "Used average profit instead of super profit".to_string(),
            correction: "Subtract normal profit first".to_string(),
            date: "2026-10-18".to_string(),
        }
    );
}

#[test]
fn add_task_starts_open() {
    let mut store = Store::empty();
    let id = store.add_task(task("Call supplier"));
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, id);
    assert!(!store.tasks()[0].completed);
}

#[test]
fn generated_ids_skip_existing_ones() {
    let mut store = Store::with_id_generator(StoreState::default(), SequentialIdGenerator::new("t"));
    let first = store.add_task(task("a"));
    let mut other = Store::with_id_generator(store.snapshot(), SequentialIdGenerator::new("t"));
    let second = other.add_task(task("b"));
    assert_eq!(first, "t1");
    assert_eq!(second, "t2");
}

#[test]
fn toggle_task_is_its_own_inverse() {
    let mut store = Store::seeded().unwrap();
    let original = store.tasks()[0].completed;

    assert_eq!(store.toggle_task("1"), MutationOutcome::Applied);
    assert_eq!(store.tasks()[0].completed, !original);
    assert_eq!(store.toggle_task("1"), MutationOutcome::Applied);
    assert_eq!(store.tasks()[0].completed, original);
}

#[test]
fn toggle_habit_flips_only_the_target() {
    let mut store = Store::seeded().unwrap();
    assert!(store.toggle_habit("6").is_applied());
    let completed = store
        .habits()
        .iter()
        .filter(|habit| habit.completed)
        .map(|habit| habit.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(completed, vec!["6"]);
}

#[test]
fn operations_on_absent_ids_are_noops() {
    let mut store = Store::seeded().unwrap();
    let before = store.snapshot();

    assert_eq!(store.delete_transaction("999"), MutationOutcome::NotFound);
    assert_eq!(store.delete_client("999"), MutationOutcome::NotFound);
    assert_eq!(store.toggle_task("999"), MutationOutcome::NotFound);
    assert_eq!(store.toggle_habit("999"), MutationOutcome::NotFound);
    assert_eq!(
        store.update_schedule("999", ScheduleField::Completed(true)),
        MutationOutcome::NotFound
    );
    assert_eq!(
        store.update_chapter_mastery("ACC", "zz", MasteryLevel::Mastered),
        MutationOutcome::NotFound
    );
    assert_eq!(
        store.advance_chapter_mastery("NOPE", "a1"),
        MutationOutcome::NotFound
    );

    assert_eq!(store.snapshot(), before);
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = Store::seeded().unwrap();
    assert!(store.delete_asset("3").is_applied());
    assert_eq!(store.assets().len(), 5);
    assert!(store.assets().iter().all(|asset| asset.id != "3"));

    assert!(store.delete_error_log("1").is_applied());
    assert!(store.delete_mock_result("2").is_applied());
    assert!(store.delete_debt("1").is_applied());
    assert!(store.delete_task("3").is_applied());
    assert_eq!(store.error_log().len(), 1);
    assert_eq!(store.mock_results().len(), 2);
    assert_eq!(store.debts().len(), 1);
    assert_eq!(store.tasks().len(), 5);
}

#[test]
fn schedule_stays_sorted_for_any_insertion_order() {
    let mut store = Store::seeded().unwrap();
    for time in ["23:00", "04:15", "12:00", "10:00", "00:00"] {
        store.add_schedule_item(schedule_item(time));
        let times = store
            .schedule()
            .iter()
            .map(|item| item.time.clone())
            .collect::<Vec<_>>();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }
    assert_eq!(store.schedule().len(), 12);
}

#[test]
fn equal_times_keep_insertion_order() {
    let mut store = Store::empty();
    let first = store.add_schedule_item(schedule_item("09:00"));
    let second = store.add_schedule_item(schedule_item("09:00"));
    let ids = store
        .schedule()
        .iter()
        .map(|item| item.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn update_schedule_replaces_one_field() {
    let mut store = Store::seeded().unwrap();
    assert!(store
        .update_schedule("3", ScheduleField::Activity("Economics revision".to_string()))
        .is_applied());
    assert!(store
        .update_schedule("3", ScheduleField::Completed(true))
        .is_applied());

    let item = store.schedule().iter().find(|item| item.id == "3").unwrap();
    assert_eq!(item.activity, "Economics revision");
    assert!(item.completed);
    assert_eq!(item.time, "10:00");
    assert_eq!(item.kind, ScheduleItemType::Study);
}

#[test]
fn toggle_schedule_item_flips_only_completed() {
    let mut store = Store::seeded().unwrap();
    let before = store.snapshot();

    assert!(store.toggle_schedule_item("3").is_applied());
    let item = store.schedule().iter().find(|item| item.id == "3").unwrap();
    assert!(item.completed);
    assert_eq!(item.time, "10:00");
    assert_eq!(item.activity, before.schedule[2].activity);

    assert!(store.toggle_schedule_item("3").is_applied());
    assert_eq!(store.snapshot(), before);
    assert_eq!(
        store.toggle_schedule_item("missing"),
        MutationOutcome::NotFound
    );
}

#[test]
fn advancing_a_chapter_five_times_restores_it() {
    let mut store = Store::seeded().unwrap();
    let mastery = |store: &Store| {
        store
            .syllabus()
            .iter()
            .find(|subject| subject.id == "ACC")
            .and_then(|subject| subject.chapters.iter().find(|chapter| chapter.id == "a1"))
            .map(|chapter| chapter.mastery)
            .unwrap()
    };

    assert_eq!(mastery(&store), MasteryLevel::Moderate);
    store.advance_chapter_mastery("ACC", "a1");
    assert_eq!(mastery(&store), MasteryLevel::Strong);
    for _ in 0..4 {
        store.advance_chapter_mastery("ACC", "a1");
    }
    assert_eq!(mastery(&store), MasteryLevel::Moderate);

    store.update_chapter_mastery("ACC", "a1", MasteryLevel::Mastered);
    store.advance_chapter_mastery("ACC", "a1");
    assert_eq!(mastery(&store), MasteryLevel::NotStarted);
}

#[test]
fn mock_results_are_appended() {
    let mut store = Store::seeded().unwrap();
    let id = store.add_mock_result(NewMockTestResult {
        date: "2026-10-19".to_string(),
        exam_type: MockExam::Cuet,
        subject: "Economics".to_string(),
        score: 60.0,
        total_marks: 80.0,
    });
    assert_eq!(store.mock_results().last().unwrap().id, id);
    assert_eq!(store.mock_results().len(), 4);
}

#[test]
fn rename_brand_keeps_id_and_color() {
    let mut store = Store::seeded().unwrap();
    assert!(store.update_brand(BrandId::Luximoth, "Luximoth Homes").is_applied());
    let brand = store
        .brands()
        .iter()
        .find(|brand| brand.id == BrandId::Luximoth)
        .unwrap();
    assert_eq!(brand.name, "Luximoth Homes");
    assert_eq!(brand.color, "bg-stone-600");

    let mut empty = Store::empty();
    assert_eq!(
        empty.update_brand(BrandId::Misc, "Personal"),
        MutationOutcome::NotFound
    );
}

#[test]
fn client_add_then_delete_restores_collection() {
    let mut store = Store::seeded().unwrap();
    let before = store.clients().to_vec();
    let id = store.add_client(NewClient {
        name: "Priya".to_string(),
        company: "Bloom Studio".to_string(),
        email: None,
        phone: None,
        brand_id: BrandId::DigiFlora,
        status: ClientStatus::Lead,
        project_value: 75_000.0,
        paid_amount: 0.0,
        last_contact: "Just now".to_string(),
        notes: None,
    });
    assert_eq!(store.clients()[0].id, id);
    assert!(store.delete_client(&id).is_applied());
    assert_eq!(store.clients(), before.as_slice());
}
