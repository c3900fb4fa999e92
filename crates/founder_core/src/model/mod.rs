//! Domain model for the founder dashboard.
//!
//! # Responsibility
//! - Define the canonical records held by the in-memory store.
//! - Keep field names aligned with the fixture/export JSON shape.
//!
//! # Invariants
//! - Every record except `Brand` is identified by an opaque string `RecordId`.
//! - References between records (brand, client name) are informational only.
//! - Deletion is permanent; there are no tombstones.

pub mod brand;
pub mod crm;
pub mod finance;
pub mod study;

/// Opaque identifier shared by every mutable record.
///
/// Seeded records use short numeric strings, generated ones use UUIDs.
pub type RecordId = String;
