//! Flutter bridge surface over `founder_core`.

pub mod api;
