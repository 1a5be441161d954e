//! # santa-list-wizard-dialoguer
//!
//! Dialoguer wizard frontend for santa-list.
//!
//! Fields are asked one at a time in a classic CLI wizard style. Pressing
//! Enter on a name or number field checks it straight away; after the last
//! field the form is saved. A rejected save walks the user back to the field
//! that needs fixing, with everything else pre-filled.
//!
//! ## Example
//!
//! ```rust,ignore
//! use santa_list::{FormController, Stdout};
//! use santa_list_wizard_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut controller = FormController::new(Stdout);
//!     controller.run(&DialoguerBackend::new())?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
