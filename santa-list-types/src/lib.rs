//! Core types for the santa-list crate.
//!
//! This crate provides the foundational types for the gift list form:
//! - `FieldId` and `FieldKind` - The eight inputs and how each is edited
//! - `Choice`, `Gender`, `Behaviour` and `Selection` - Single-choice selectors
//! - `Submission` - The snapshot of all fields taken when the form is saved
//! - `Accepted`, `GiftListEntry` and `Verdict` - The outcome of a good submission
//! - `Rejection` and `RejectionKind` - Why a submission was turned away
//! - `FormError` - Failures of the frontends that drive the form

mod field;
pub use field::{FieldId, FieldKind};

mod choice;
pub use choice::{Behaviour, Choice, Gender, PLACEHOLDER, Selection};

mod submission;
pub use submission::{Accepted, GiftListEntry, NAUGHTY_ANSWER, Submission, Verdict};

mod rejection;
pub use rejection::{Rejection, RejectionKind};

mod error;
pub use error::FormError;
