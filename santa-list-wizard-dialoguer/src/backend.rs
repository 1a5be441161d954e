//! Dialoguer backend implementation for FormBackend trait.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use santa_list::{Console, FieldId, FieldKind, FormBackend, FormController, FormError, FormState};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the form (e.g., pressed Ctrl+C or Escape).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for FormError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => FormError::Cancelled,
            other => FormError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// The wizard returns once a save is accepted.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Ask for the text of a field, offering the current value for editing.
    fn ask_text(&self, field: FieldId, current: &str) -> Result<String, DialoguerError> {
        let mut _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder
            .with_prompt(field.prompt())
            .allow_empty(true)
            .with_initial_text(current);

        match builder.interact_text() {
            Ok(value) => Ok(value),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// Ask for an entry of a selector; the placeholder stays pickable.
    fn ask_choice(
        &self,
        field: FieldId,
        labels: &[&str],
        current: usize,
    ) -> Result<usize, DialoguerError> {
        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder
            .with_prompt(field.prompt())
            .items(labels)
            .default(current);

        match builder.interact() {
            Ok(idx) => Ok(idx),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// Ask a single field and apply the answer.
    ///
    /// Returns the field to continue from when the submit key check fails.
    fn ask_field<C: Console>(
        &self,
        field: FieldId,
        controller: &mut FormController<C>,
    ) -> Result<Option<FieldId>, DialoguerError> {
        if let Some(labels) = FormState::choice_labels(field) {
            let current = controller.state().choice_index(field).unwrap_or(0);
            let idx = self.ask_choice(field, &labels, current)?;
            controller.select(field, idx);
            return Ok(None);
        }

        let value = self.ask_text(field, controller.state().value(field))?;
        controller.set_text(field, value);

        if matches!(field.kind(), FieldKind::Name | FieldKind::Numeric)
            && let Err(rejection) = controller.submit_field(field)
        {
            return Ok(Some(resume_at(rejection.cleared_fields(), field)));
        }
        Ok(None)
    }
}

/// The earliest field that has to be asked again.
fn resume_at(cleared: &[FieldId], fallback: FieldId) -> FieldId {
    cleared
        .iter()
        .copied()
        .min_by_key(|field| position(*field))
        .unwrap_or(fallback)
}

fn position(field: FieldId) -> usize {
    FieldId::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn run<C: Console>(&self, controller: &mut FormController<C>) -> Result<(), Self::Error> {
        let mut next = 0;

        loop {
            while let Some(&field) = FieldId::ALL.get(next) {
                next = match self.ask_field(field, controller)? {
                    Some(resume) => position(resume),
                    None => next + 1,
                };
            }

            match controller.save() {
                Ok(_) => return Ok(()),
                Err(rejection) => {
                    let field = rejection.field().unwrap_or(FieldId::Name);
                    next = position(resume_at(rejection.cleared_fields(), field));
                    tracing::debug!(%field, "walking back after rejected save");
                }
            }
        }
    }
}
