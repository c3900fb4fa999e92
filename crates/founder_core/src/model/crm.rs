//! Client pipeline and task records.
//!
//! # Invariants
//! - `projectValue - paidAmount` is the outstanding receivable. It should be
//!   non-negative but overpayment is stored as-is.
//! - Client status changes are unguarded; any status may follow any other.

use super::brand::BrandId;
use super::RecordId;
use serde::{Deserialize, Serialize};

/// CRM pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientStatus {
    Lead,
    Active,
    Completed,
    Lost,
}

impl ClientStatus {
    /// Open stages that still carry unrealized revenue.
    pub fn is_pipeline(self) -> bool {
        matches!(self, Self::Lead | Self::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub brand_id: BrandId,
    pub status: ClientStatus,
    pub project_value: f64,
    pub paid_amount: f64,
    pub last_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Client {
    /// Unpaid part of the project value. Negative when overpaid.
    pub fn outstanding(&self) -> f64 {
        self.project_value - self.paid_amount
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub company: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub brand_id: BrandId,
    pub status: ClientStatus,
    pub project_value: f64,
    pub paid_amount: f64,
    pub last_contact: String,
    pub notes: Option<String>,
}

impl NewClient {
    pub(crate) fn into_record(self, id: RecordId) -> Client {
        Client {
            id,
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            brand_id: self.brand_id,
            status: self.status,
            project_value: self.project_value,
            paid_amount: self.paid_amount,
            last_contact: self.last_contact,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub brand_id: BrandId,
    pub priority: TaskPriority,
    pub completed: bool,
    pub due_date: String,
    /// Associated client, matched by display name only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Advance procedure or working notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
}

/// Task fields supplied by callers; new tasks always start open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub brand_id: BrandId,
    pub priority: TaskPriority,
    pub due_date: String,
    pub client_name: Option<String>,
    pub procedure: Option<String>,
}

impl NewTask {
    pub(crate) fn into_record(self, id: RecordId) -> Task {
        Task {
            id,
            title: self.title,
            brand_id: self.brand_id,
            priority: self.priority,
            completed: false,
            due_date: self.due_date,
            client_name: self.client_name,
            procedure: self.procedure,
        }
    }
}
