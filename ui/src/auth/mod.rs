//! Login state machine and credential types
//!
//! The submit control moves `Idle -> Loading -> Settled(Success | Error)`,
//! with `Settled` acting as idle between submissions. All mutation goes
//! through [`LoginState::reduce_in_place`], so the flow is testable without
//! a browser.

pub mod form_validation;
pub mod types;

pub use types::*;
