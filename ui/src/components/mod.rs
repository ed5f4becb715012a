//! User Interface Components
//!
//! Reusable Dioxus components for the login page:
//!
//! - **forms**: the login form itself
//! - **display**: the error banner and the success modal
//! - **inputs**: input fields and the user-type radio group

pub mod display;
pub mod forms;
pub mod inputs;
