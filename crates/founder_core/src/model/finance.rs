//! Money records: transactions, assets and debts.
//!
//! # Invariants
//! - `Transaction::amount` is non-negative; direction comes from `kind`.
//! - Amounts are not validated by the store; callers guard inputs.

use super::brand::BrandId;
use super::RecordId;
use serde::{Deserialize, Serialize};

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// One income or expense entry attributed to a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    /// ISO `YYYY-MM-DD` day.
    pub date: String,
    pub amount: f64,
    pub description: String,
    /// Serialized as `type` to match the fixture schema.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub brand_id: BrandId,
    pub category: String,
}

/// Transaction fields supplied by callers; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    pub description: String,
    pub kind: TransactionType,
    pub brand_id: BrandId,
    pub category: String,
}

impl NewTransaction {
    pub(crate) fn into_record(self, id: RecordId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            description: self.description,
            kind: self.kind,
            brand_id: self.brand_id,
            category: self.category,
        }
    }
}

/// Where an asset's value is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Cash,
    Bank,
    Investment,
    Crypto,
    Physical,
    BankFd,
    Sip,
    LongTerm,
    ShortTerm,
}

impl AssetType {
    pub const ALL: [AssetType; 9] = [
        AssetType::Cash,
        AssetType::Bank,
        AssetType::Investment,
        AssetType::Crypto,
        AssetType::Physical,
        AssetType::BankFd,
        AssetType::Sip,
        AssetType::LongTerm,
        AssetType::ShortTerm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Bank => "BANK",
            Self::Investment => "INVESTMENT",
            Self::Crypto => "CRYPTO",
            Self::Physical => "PHYSICAL",
            Self::BankFd => "BANK_FD",
            Self::Sip => "SIP",
            Self::LongTerm => "LONG_TERM",
            Self::ShortTerm => "SHORT_TERM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value.trim())
    }

    /// Cash-like holdings shown in the "money location" snapshot.
    pub fn is_liquid(self) -> bool {
        matches!(self, Self::Bank | Self::Cash | Self::BankFd)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub value: f64,
    /// Free-form freshness label such as `Today` or `Just now`.
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub kind: AssetType,
    pub value: f64,
    pub last_updated: String,
}

impl NewAsset {
    pub(crate) fn into_record(self, id: RecordId) -> Asset {
        Asset {
            id,
            name: self.name,
            kind: self.kind,
            value: self.value,
            last_updated: self.last_updated,
        }
    }
}

/// Repayment state of a debt. Any state may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: RecordId,
    pub creditor: String,
    pub amount: f64,
    pub due_date: String,
    /// Annual rate in percent.
    pub interest_rate: f64,
    pub status: DebtStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDebt {
    pub creditor: String,
    pub amount: f64,
    pub due_date: String,
    pub interest_rate: f64,
    pub status: DebtStatus,
}

impl NewDebt {
    pub(crate) fn into_record(self, id: RecordId) -> Debt {
        Debt {
            id,
            creditor: self.creditor,
            amount: self.amount,
            due_date: self.due_date,
            interest_rate: self.interest_rate,
            status: self.status,
        }
    }
}
