//! Self-development tracker records.
//!
//! # Responsibility
//! - Syllabus subjects and chapters with ordinal mastery.
//! - Daily habits, schedule, error log and mock test results.
//!
//! # Invariants
//! - `MasteryLevel` serializes as its ordinal `0..=4`.
//! - Mastery advances cyclically with period 5.
//! - Schedule `time` is `HH:MM` and ordered lexicographically.

use super::RecordId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Five-point chapter preparedness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MasteryLevel {
    NotStarted = 0,
    /// Studied but confused.
    Weak = 1,
    /// Can solve textbook questions.
    Moderate = 2,
    /// Can solve previous-year papers.
    Strong = 3,
    /// Can teach it.
    Mastered = 4,
}

impl MasteryLevel {
    pub const ALL: [MasteryLevel; 5] = [
        MasteryLevel::NotStarted,
        MasteryLevel::Weak,
        MasteryLevel::Moderate,
        MasteryLevel::Strong,
        MasteryLevel::Mastered,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Next level in the cycle; `Mastered` wraps to `NotStarted`.
    pub fn next(self) -> Self {
        Self::ALL[(usize::from(self.ordinal()) + 1) % Self::ALL.len()]
    }

    /// Share of a chapter's weightage earned at this level (`ordinal / 4`).
    pub fn factor(self) -> f64 {
        f64::from(self.ordinal()) / 4.0
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::Mastered => "Mastered",
        }
    }
}

/// Rejected mastery ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMasteryLevel(pub u8);

impl Display for InvalidMasteryLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "mastery level must be within 0..=4, got {}", self.0)
    }
}

impl Error for InvalidMasteryLevel {}

impl TryFrom<u8> for MasteryLevel {
    type Error = InvalidMasteryLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidMasteryLevel(value))
    }
}

impl From<MasteryLevel> for u8 {
    fn from(value: MasteryLevel) -> Self {
        value.ordinal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyllabusExam {
    Boards,
    Cuet,
    Ielts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: RecordId,
    pub name: String,
    /// Marks carried by the chapter in the exam.
    pub weightage: u32,
    pub mastery: MasteryLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSyllabus {
    pub id: RecordId,
    pub name: String,
    pub exam_type: SyllabusExam,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitCategory {
    #[serde(rename = "75HARD")]
    SeventyFiveHard,
    #[serde(rename = "ACADEMIC")]
    Academic,
    #[serde(rename = "BIOHACK")]
    Biohack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHabit {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
    pub category: HabitCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleItemType {
    Physical,
    Work,
    Study,
    Mind,
}

impl ScheduleItemType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "PHYSICAL" => Some(Self::Physical),
            "WORK" => Some(Self::Work),
            "STUDY" => Some(Self::Study),
            "MIND" => Some(Self::Mind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyScheduleItem {
    pub id: RecordId,
    /// `HH:MM`, 24-hour.
    pub time: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: ScheduleItemType,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleItem {
    pub time: String,
    pub activity: String,
    pub kind: ScheduleItemType,
}

impl NewScheduleItem {
    pub(crate) fn into_record(self, id: RecordId) -> DailyScheduleItem {
        DailyScheduleItem {
            id,
            time: self.time,
            activity: self.activity,
            kind: self.kind,
            completed: false,
        }
    }
}

/// Single-field replacement for a schedule item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleField {
    Time(String),
    Activity(String),
    Kind(ScheduleItemType),
    Completed(bool),
}

impl ScheduleField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Time(_) => "time",
            Self::Activity(_) => "activity",
            Self::Kind(_) => "type",
            Self::Completed(_) => "completed",
        }
    }

    pub(crate) fn apply(self, item: &mut DailyScheduleItem) {
        match self {
            Self::Time(value) => item.time = value,
            Self::Activity(value) => item.activity = value,
            Self::Kind(value) => item.kind = value,
            Self::Completed(value) => item.completed = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    pub id: RecordId,
    pub subject: String,
    pub topic: String,
    /// What went wrong, e.g. a calculation error or conceptual gap.
    pub mistake: String,
    pub correction: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewErrorLogEntry {
    pub subject: String,
    pub topic: String,
    pub mistake: String,
    pub correction: String,
    pub date: String,
}

impl NewErrorLogEntry {
    pub(crate) fn into_record(self, id: RecordId) -> ErrorLogEntry {
        ErrorLogEntry {
            id,
            subject: self.subject,
            topic: self.topic,
            mistake: self.mistake,
            correction: self.correction,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MockExam {
    Boards,
    Cuet,
}

impl MockExam {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "BOARDS" => Some(Self::Boards),
            "CUET" => Some(Self::Cuet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockTestResult {
    pub id: RecordId,
    pub date: String,
    pub exam_type: MockExam,
    pub subject: String,
    pub score: f64,
    pub total_marks: f64,
}

impl MockTestResult {
    /// Score as a percentage of total marks; `None` when total is zero.
    pub fn percent(&self) -> Option<f64> {
        if self.total_marks == 0.0 {
            return None;
        }
        Some(self.score / self.total_marks * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMockTestResult {
    pub date: String,
    pub exam_type: MockExam,
    pub subject: String,
    pub score: f64,
    pub total_marks: f64,
}

impl NewMockTestResult {
    pub(crate) fn into_record(self, id: RecordId) -> MockTestResult {
        MockTestResult {
            id,
            date: self.date,
            exam_type: self.exam_type,
            subject: self.subject,
            score: self.score,
            total_marks: self.total_marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Chapter, HabitCategory, MasteryLevel};

    #[test]
    fn mastery_cycle_wraps_after_mastered() {
        assert_eq!(MasteryLevel::NotStarted.next(), MasteryLevel::Weak);
        assert_eq!(MasteryLevel::Strong.next(), MasteryLevel::Mastered);
        assert_eq!(MasteryLevel::Mastered.next(), MasteryLevel::NotStarted);
    }

    #[test]
    fn mastery_cycle_has_period_five() {
        for start in MasteryLevel::ALL {
            let mut level = start;
            for _ in 0..5 {
                level = level.next();
            }
            assert_eq!(level, start);
        }
    }

    #[test]
    fn mastery_serializes_as_ordinal_and_rejects_out_of_range() {
        let chapter = Chapter {
            id: "a1".to_string(),
            name: "Partnership".to_string(),
            weightage: 10,
            mastery: MasteryLevel::Moderate,
            category: None,
        };
        let json = serde_json::to_value(&chapter).expect("chapter serializes");
        assert_eq!(json["mastery"], 2);

        let bad = serde_json::json!({
            "id": "a1",
            "name": "Partnership",
            "weightage": 10,
            "mastery": 5
        });
        let err = serde_json::from_value::<Chapter>(bad).unwrap_err();
        assert!(err.to_string().contains("0..=4"), "unexpected error: {err}");
    }

    #[test]
    fn habit_category_uses_fixture_labels() {
        let json = serde_json::to_value(HabitCategory::SeventyFiveHard).expect("serializes");
        assert_eq!(json, "75HARD");
    }
}
