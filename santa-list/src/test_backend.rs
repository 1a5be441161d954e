//! Scripted backend for running the form without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of user actions against a
//! [`FormController`]. This is useful for testing the submission workflow
//! end to end.
//!
//! # Example
//!
//! ```rust
//! use santa_list::{FieldId, FormController, Gender, Behaviour, ScriptedBackend, Transcript};
//!
//! let script = ScriptedBackend::new()
//!     .type_text(FieldId::Name, "Jonas")
//!     .type_text(FieldId::Surname, "Smith")
//!     .choose_gender(Gender::Male)
//!     .type_text(FieldId::Age, "10")
//!     .type_text(FieldId::Gifts, "3")
//!     .choose_behaviour(Behaviour::Yes)
//!     .save();
//!
//! let mut controller = FormController::new(Transcript::new());
//! controller.run(&script).unwrap();
//!
//! assert!(controller.console().contains("gift shortage"));
//! ```

use santa_list_types::{Behaviour, Choice, FieldId, FormError, Gender};

use crate::console::Console;
use crate::controller::{FormBackend, FormController};

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the text of a field.
    Type(FieldId, String),
    /// Pick an entry of a selector (0 is the placeholder).
    Select(FieldId, usize),
    /// Press the submit key inside a field.
    SubmitField(FieldId),
    /// Press Save.
    Save,
}

/// A backend that replays pre-recorded actions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    actions: Vec<Action>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedBackendError {
    #[error("Field '{0}' is a selector and cannot take text")]
    NotText(FieldId),

    #[error("Selector '{field}' has no entry {index}")]
    NoSuchOption { field: FieldId, index: usize },
}

impl From<ScriptedBackendError> for FormError {
    fn from(err: ScriptedBackendError) -> Self {
        FormError::backend(err)
    }
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn type_text(self, field: FieldId, text: impl Into<String>) -> Self {
        self.with_action(Action::Type(field, text.into()))
    }

    pub fn select(self, field: FieldId, index: usize) -> Self {
        self.with_action(Action::Select(field, index))
    }

    pub fn choose_gender(self, gender: Gender) -> Self {
        self.select(FieldId::Gender, option_index(gender))
    }

    pub fn choose_behaviour(self, behaviour: Behaviour) -> Self {
        self.select(FieldId::Behaviour, option_index(behaviour))
    }

    pub fn press_enter(self, field: FieldId) -> Self {
        self.with_action(Action::SubmitField(field))
    }

    pub fn save(self) -> Self {
        self.with_action(Action::Save)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Selector index of an option; the placeholder sits at 0.
fn option_index<T: Choice>(choice: T) -> usize {
    T::OPTIONS
        .iter()
        .position(|option| *option == choice)
        .map_or(0, |pos| pos + 1)
}

impl FormBackend for ScriptedBackend {
    type Error = ScriptedBackendError;

    fn run<C: Console>(&self, controller: &mut FormController<C>) -> Result<(), Self::Error> {
        for action in &self.actions {
            match action {
                Action::Type(field, text) => {
                    if !controller.set_text(*field, text.clone()) {
                        return Err(ScriptedBackendError::NotText(*field));
                    }
                }
                Action::Select(field, index) => {
                    if !controller.select(*field, *index) {
                        return Err(ScriptedBackendError::NoSuchOption {
                            field: *field,
                            index: *index,
                        });
                    }
                }
                // Rejections are reported through the console; the script carries on.
                Action::SubmitField(field) => {
                    let _ = controller.submit_field(*field);
                }
                Action::Save => {
                    let _ = controller.save();
                }
            }
        }

        Ok(())
    }
}
