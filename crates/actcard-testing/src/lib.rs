//! Testing infrastructure for actcard tests.
//!
//! This crate provides utilities for writing deterministic tests:
//! - `builders`: Fluent activity construction and canned channel payloads
//! - `documents`: Remote-data JSON documents placed in temp directories
//!
//! All dates come from the fixed helpers below so resolver output never
//! depends on the wall clock.

pub mod builders;
pub mod documents;

pub use builders::ActivityBuilder;
pub use documents::DocumentDir;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The "current date" every test passes to the resolver.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 10).expect("valid fixed date")
}

/// Canonical timestamp for fixtures. Nine days before `fixed_today`, so a
/// tagged fixture anchored here is overdue, never "N days left".
pub fn date_mock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()
}
