//! Compiled-in demo fixtures.
//!
//! # Responsibility
//! - Decode the static fixture document into a `StoreState`.
//!
//! # Invariants
//! - The document is embedded at build time; nothing is read from disk.
//! - The decoded brand set contains every `BrandId` exactly once.

use crate::model::brand::BrandId;
use crate::store::StoreState;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIXTURES_JSON: &str = include_str!("fixtures.json");

/// Fixture decode failure.
#[derive(Debug)]
pub enum SeedError {
    Json(serde_json::Error),
    /// Brand list does not cover the fixed brand set exactly once.
    BrandSet(String),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid seed fixtures: {err}"),
            Self::BrandSet(details) => write!(f, "invalid seed brand set: {details}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::BrandSet(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes the embedded fixtures.
///
/// # Errors
/// - `SeedError::Json` when the document does not match the model shape.
/// - `SeedError::BrandSet` when a brand is missing or duplicated.
pub fn load_seed() -> Result<StoreState, SeedError> {
    let state = decode_seed(FIXTURES_JSON).inspect_err(|err| {
        error!("event=seed_load module=seed status=error error={err}");
    })?;
    info!(
        "event=seed_load module=seed status=ok brands={} transactions={} clients={} subjects={}",
        state.brands.len(),
        state.transactions.len(),
        state.clients.len(),
        state.syllabus.len()
    );
    Ok(state)
}

fn decode_seed(document: &str) -> Result<StoreState, SeedError> {
    let state: StoreState = serde_json::from_str(document)?;
    check_brand_set(&state)?;
    Ok(state)
}

fn check_brand_set(state: &StoreState) -> Result<(), SeedError> {
    for id in BrandId::ALL {
        let count = state.brands.iter().filter(|brand| brand.id == id).count();
        if count != 1 {
            return Err(SeedError::BrandSet(format!(
                "brand `{}` appears {count} time(s)",
                id.as_str()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decode_seed, load_seed, SeedError};

    #[test]
    fn embedded_fixtures_decode() {
        let state = load_seed().expect("fixtures should decode");
        assert_eq!(state.brands.len(), 6);
        assert_eq!(state.assets.len(), 6);
        assert_eq!(state.debts.len(), 2);
        assert_eq!(state.clients.len(), 6);
        assert_eq!(state.tasks.len(), 6);
        assert_eq!(state.transactions.len(), 6);
        assert_eq!(state.syllabus.len(), 7);
        assert_eq!(state.habits.len(), 7);
        assert_eq!(state.schedule.len(), 7);
        assert_eq!(state.error_log.len(), 2);
        assert_eq!(state.mock_results.len(), 3);
    }

    #[test]
    fn seeded_schedule_is_sorted_by_time() {
        let state = load_seed().expect("fixtures should decode");
        let times = state
            .schedule
            .iter()
            .map(|item| item.time.as_str())
            .collect::<Vec<_>>();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn missing_brand_is_rejected() {
        let document = r#"{
            "brands": [{ "id": "MISC", "name": "Misc", "color": "bg-slate-500" }],
            "assets": [], "debts": [], "clients": [], "tasks": [], "transactions": [],
            "syllabus": [], "habits": [], "schedule": [], "errorLog": [], "mockResults": []
        }"#;
        let err = decode_seed(document).unwrap_err();
        assert!(matches!(err, SeedError::BrandSet(_)));
        assert!(err.to_string().contains("DIGI_FLORA"));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = decode_seed("{ \"brands\": 3 }").unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }
}
