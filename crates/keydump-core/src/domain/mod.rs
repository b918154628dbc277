//! Device-selection domain types.

pub mod identity;
