//! # santa-list
//!
//! Santa's gift list intake form, without any particular user interface.
//!
//! The form has eight fields: name, surname, gender, age, country,
//! intentions, number of gifts and whether the visitor behaved this year.
//! Saving the form checks the fields in a fixed order and reports either the
//! first broken rule or the accepted entry followed by Santa's verdict.
//!
//! ## Usage
//!
//! ```rust
//! use santa_list::{submit, Behaviour, Gender, Selection, Submission, Verdict};
//!
//! let submission = Submission {
//!     name: "Jonas".into(),
//!     surname: "Smith".into(),
//!     gender: Selection::Selected(Gender::Female),
//!     age: "30".into(),
//!     country: "Norway".into(),
//!     intentions: "Cookies".into(),
//!     gifts: "12".into(),
//!     behaviour: Selection::Selected(Behaviour::No),
//! };
//!
//! let accepted = submit(&submission).unwrap();
//! assert_eq!(accepted.verdict, Verdict::SeatSecured);
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `FormBackend`:
//! - `santa-list-wizard-dialoguer` - CLI prompts via dialoguer
//! - `santa-list-form-ratatui` - TUI form with all fields visible

// Re-export all types from santa-list-types
pub use santa_list_types::*;

pub mod validation;
pub use validation::{has_consecutive_duplicates, parse_count, valid_name};

mod form;
pub use form::FormState;

mod console;
pub use console::{Console, Stdout, Transcript};

mod controller;
pub use controller::{FormBackend, FormController, submit};

// Scripted backend for running the form without user interaction
mod test_backend;
pub use test_backend::{Action, ScriptedBackend, ScriptedBackendError};
