//! Self-development mutations: habits, syllabus, schedule, error log, mocks.
//!
//! # Invariants
//! - After `add_schedule_item` the schedule is sorted by `time` ascending
//!   (lexicographic, stable for equal times).
//! - `update_schedule` replaces one field and does not re-sort.
//! - Mock results are a chronological log: new results are appended.
//! - Chapter changes are reported under `<subject_id>/<chapter_id>` because
//!   chapter ids repeat across subjects.

use super::ids::IdGenerator;
use super::observer::{ChangeKind, Collection};
use super::{find_by_id, remove_by_id, MutationOutcome, Store};
use crate::model::study::{
    MasteryLevel, NewErrorLogEntry, NewMockTestResult, NewScheduleItem, ScheduleField,
};
use crate::model::RecordId;

impl<G: IdGenerator> Store<G> {
    pub fn toggle_habit(&mut self, id: &str) -> MutationOutcome {
        let outcome = match find_by_id(&mut self.state.habits, id) {
            Some(habit) => {
                habit.completed = !habit.completed;
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        self.record_outcome(Collection::Habits, ChangeKind::Toggled, id, outcome)
    }

    /// Sets the mastery of one chapter inside one subject.
    pub fn update_chapter_mastery(
        &mut self,
        subject_id: &str,
        chapter_id: &str,
        level: MasteryLevel,
    ) -> MutationOutcome {
        self.modify_chapter(subject_id, chapter_id, |_| level)
    }

    /// Moves one chapter to the next mastery level, wrapping after mastered.
    pub fn advance_chapter_mastery(&mut self, subject_id: &str, chapter_id: &str) -> MutationOutcome {
        self.modify_chapter(subject_id, chapter_id, MasteryLevel::next)
    }

    fn modify_chapter(
        &mut self,
        subject_id: &str,
        chapter_id: &str,
        change: impl FnOnce(MasteryLevel) -> MasteryLevel,
    ) -> MutationOutcome {
        let chapter = find_by_id(&mut self.state.syllabus, subject_id).and_then(|subject| {
            subject
                .chapters
                .iter_mut()
                .find(|chapter| chapter.id == chapter_id)
        });
        let outcome = match chapter {
            Some(chapter) => {
                chapter.mastery = change(chapter.mastery);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        let change_id = format!("{subject_id}/{chapter_id}");
        self.record_outcome(Collection::Syllabus, ChangeKind::Updated, &change_id, outcome)
    }

    /// Replaces one field of a schedule item.
    pub fn update_schedule(&mut self, id: &str, field: ScheduleField) -> MutationOutcome {
        let outcome = match find_by_id(&mut self.state.schedule, id) {
            Some(item) => {
                field.apply(item);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        self.record_outcome(Collection::Schedule, ChangeKind::Updated, id, outcome)
    }

    /// Flips the `completed` flag of one schedule item.
    pub fn toggle_schedule_item(&mut self, id: &str) -> MutationOutcome {
        let outcome = match find_by_id(&mut self.state.schedule, id) {
            Some(item) => {
                item.completed = !item.completed;
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        self.record_outcome(Collection::Schedule, ChangeKind::Toggled, id, outcome)
    }

    /// Inserts a pending schedule item and re-sorts the day by time.
    pub fn add_schedule_item(&mut self, input: NewScheduleItem) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.schedule);
        self.state.schedule.push(input.into_record(id.clone()));
        self.state
            .schedule
            .sort_by(|left, right| left.time.cmp(&right.time));
        self.record_added(Collection::Schedule, &id);
        id
    }

    pub fn delete_schedule_item(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.schedule, id);
        self.record_outcome(Collection::Schedule, ChangeKind::Deleted, id, outcome)
    }

    pub fn add_error_log(&mut self, input: NewErrorLogEntry) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.error_log);
        self.state.error_log.insert(0, input.into_record(id.clone()));
        self.record_added(Collection::ErrorLog, &id);
        id
    }

    pub fn delete_error_log(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.error_log, id);
        self.record_outcome(Collection::ErrorLog, ChangeKind::Deleted, id, outcome)
    }

    /// Appends a mock result; the last entry is the latest attempt.
    pub fn add_mock_result(&mut self, input: NewMockTestResult) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.mock_results);
        self.state.mock_results.push(input.into_record(id.clone()));
        self.record_added(Collection::MockResults, &id);
        id
    }

    pub fn delete_mock_result(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.mock_results, id);
        self.record_outcome(Collection::MockResults, ChangeKind::Deleted, id, outcome)
    }
}
