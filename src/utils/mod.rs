//! Shared validation helpers and limits.

pub mod validation;
