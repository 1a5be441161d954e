//! # santa-list-form-ratatui
//!
//! Ratatui form frontend for santa-list.
//!
//! All eight fields and the Save button are visible at once. Users move
//! between them with Tab/Shift+Tab or the arrow keys, press Enter inside a
//! name or number field to check it, and press Enter on Save to submit the
//! form. Messages appear in a console pane below the form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use santa_list::{FormController, Transcript};
//! use santa_list_form_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut controller = FormController::new(Transcript::new());
//!     controller.run(&RatatuiFormBackend::new())?;
//!     for line in controller.console().lines() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
