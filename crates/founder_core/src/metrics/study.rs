//! Syllabus readiness and tracker progress.
//!
//! # Invariants
//! - Readiness weights each chapter by its marks: a chapter contributes
//!   `weightage * mastery / 4` to the earned total.
//! - Readiness is 0 when there is no weightage at all.
//! - Weightage totals accumulate as `u64`, so large restored weights never
//!   overflow.

use crate::format::round_half_up;
use crate::model::study::{
    Chapter, DailyHabit, HabitCategory, MasteryLevel, MockTestResult, SubjectSyllabus,
};
use crate::model::RecordId;

/// Weighted mastery totals for a set of chapters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedMastery {
    pub earned: f64,
    pub total: u64,
}

impl WeightedMastery {
    pub fn of_chapters<'a>(chapters: impl IntoIterator<Item = &'a Chapter>) -> Self {
        chapters
            .into_iter()
            .fold(Self::default(), |acc, chapter| Self {
                earned: acc.earned + chapter_contribution(chapter),
                total: acc.total + u64::from(chapter.weightage),
            })
    }

    /// `100 * earned / total` rounded half up, 0 when total is 0.
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        round_half_up(self.earned / self.total as f64 * 100.0) as u32
    }
}

/// Marks earned by one chapter at its current mastery.
pub fn chapter_contribution(chapter: &Chapter) -> f64 {
    f64::from(chapter.weightage) * chapter.mastery.factor()
}

/// Overall readiness across every subject and chapter.
pub fn readiness_percent(syllabus: &[SubjectSyllabus]) -> u32 {
    WeightedMastery::of_chapters(syllabus.iter().flat_map(|subject| subject.chapters.iter()))
        .percent()
}

/// Per-subject progress card.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectProgress {
    pub subject_id: RecordId,
    pub name: String,
    pub readiness: u32,
    pub mastered_chapters: usize,
    pub total_chapters: usize,
}

pub fn subject_progress(subject: &SubjectSyllabus) -> SubjectProgress {
    SubjectProgress {
        subject_id: subject.id.clone(),
        name: subject.name.clone(),
        readiness: WeightedMastery::of_chapters(&subject.chapters).percent(),
        mastered_chapters: subject
            .chapters
            .iter()
            .filter(|chapter| chapter.mastery == MasteryLevel::Mastered)
            .count(),
        total_chapters: subject.chapters.len(),
    }
}

/// Percentage of the most recently appended mock result.
pub fn latest_mock_percent(results: &[MockTestResult]) -> Option<f64> {
    results.last().and_then(MockTestResult::percent)
}

/// `(completed, total)` habits in one category.
pub fn habit_progress(habits: &[DailyHabit], category: HabitCategory) -> (usize, usize) {
    habits
        .iter()
        .filter(|habit| habit.category == category)
        .fold((0, 0), |(done, total), habit| {
            (done + usize::from(habit.completed), total + 1)
        })
}
