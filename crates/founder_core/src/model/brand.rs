//! Business brand records.
//!
//! # Invariants
//! - The brand set is fixed at six members identified by `BrandId`.
//! - Only `Brand::name` is user-editable.

use serde::{Deserialize, Serialize};

/// Fixed enumeration of business units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandId {
    DigiFlora,
    CeoHive,
    Fundagist,
    Cadina,
    Luximoth,
    /// Personal spend and anything not tied to a business.
    Misc,
}

impl BrandId {
    /// All brands in display order.
    pub const ALL: [BrandId; 6] = [
        BrandId::DigiFlora,
        BrandId::CeoHive,
        BrandId::Fundagist,
        BrandId::Cadina,
        BrandId::Luximoth,
        BrandId::Misc,
    ];

    /// Stable wire id, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DigiFlora => "DIGI_FLORA",
            Self::CeoHive => "CEO_HIVE",
            Self::Fundagist => "FUNDAGIST",
            Self::Cadina => "CADINA",
            Self::Luximoth => "LUXIMOTH",
            Self::Misc => "MISC",
        }
    }

    /// Parses a wire id; surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|brand| brand.as_str() == value.trim())
    }
}

/// Business unit with an editable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    /// Display tag used by views, e.g. `bg-emerald-500`.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::BrandId;

    #[test]
    fn parse_accepts_every_wire_id() {
        for brand in BrandId::ALL {
            assert_eq!(BrandId::parse(brand.as_str()), Some(brand));
        }
        assert_eq!(BrandId::parse(" MISC "), Some(BrandId::Misc));
        assert_eq!(BrandId::parse("misc"), None);
    }

    #[test]
    fn serialized_form_matches_as_str() {
        let json = serde_json::to_value(BrandId::CeoHive).expect("brand id serializes");
        assert_eq!(json, "CEO_HIVE");
    }
}
