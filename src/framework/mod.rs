//! # Framework Records
//!
//! The single entity served by this crate and the field constraints
//! every stored record must satisfy.
//!
//! Validation runs on create and update payloads before the store is
//! touched. All rules are evaluated; a payload with three problems
//! yields three violations.

mod record;
mod validator;

pub use record::FrameworkRecord;
pub use validator::{validate, Violation, ViolationKind, MAX_NAME_LEN, MAX_VERSION_LEN};
