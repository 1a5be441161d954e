//! The submission workflow.

use santa_list_types::{
    Accepted, FieldId, FieldKind, FormError, GiftListEntry, Rejection, Submission, Verdict,
};

use crate::console::Console;
use crate::form::FormState;
use crate::validation::{MIN_GIFTS, parse_count, valid_name};

/// Checks a submission, stopping at the first rule it breaks.
///
/// The rules run in this order:
/// 1. name is a valid name
/// 2. surname is a valid name
/// 3. name and surname differ (ignoring case)
/// 4. age is a non-negative integer
/// 5. gift count is a non-negative integer
/// 6. a gender is selected
/// 7. a behaviour is selected
/// 8. at least [`MIN_GIFTS`] gifts
pub fn submit(submission: &Submission) -> Result<Accepted, Rejection> {
    if !valid_name(&submission.name) {
        return Err(Rejection::InvalidName {
            field: FieldId::Name,
        });
    }
    if !valid_name(&submission.surname) {
        return Err(Rejection::InvalidName {
            field: FieldId::Surname,
        });
    }

    let name = submission.name.trim();
    let surname = submission.surname.trim();
    if name.to_lowercase() == surname.to_lowercase() {
        return Err(Rejection::NamesMatch);
    }

    let age = parse_count(FieldId::Age, &submission.age)?;
    let gifts = parse_count(FieldId::Gifts, &submission.gifts)?;

    let gender = submission
        .gender
        .selected()
        .ok_or(Rejection::GenderMissing)?;
    let behaviour = submission
        .behaviour
        .selected()
        .ok_or(Rejection::BehaviourMissing)?;

    if gifts < MIN_GIFTS {
        return Err(Rejection::GiftShortage { gifts });
    }

    Ok(Accepted {
        verdict: Verdict::for_behaviour_label(submission.behaviour.label()),
        entry: GiftListEntry {
            name: name.to_string(),
            surname: surname.to_string(),
            gender,
            age,
            country: submission.country.clone(),
            intentions: submission.intentions.clone(),
            gifts,
            behaviour,
        },
    })
}

/// Drives the form: holds the field state, runs checks and reports outcomes.
///
/// Every outcome is written to the console. Rejections may clear fields
/// (see [`Rejection::cleared_fields`]); nothing else changes the state.
pub struct FormController<C> {
    state: FormState,
    console: C,
}

impl<C: Console> FormController<C> {
    pub fn new(console: C) -> Self {
        Self::with_state(FormState::new(), console)
    }

    pub fn with_state(state: FormState, console: C) -> Self {
        Self { state, console }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Replaces the text of a field. Returns `false` for selectors.
    pub fn set_text(&mut self, field: FieldId, text: impl Into<String>) -> bool {
        let text = text.into();
        tracing::debug!(%field, len = text.chars().count(), "field edited");
        self.state.set_text(field, text)
    }

    /// Picks an entry of a selector (0 is the placeholder).
    pub fn select(&mut self, field: FieldId, index: usize) -> bool {
        let accepted = self.state.select(field, index);
        tracing::debug!(%field, index, accepted, "selector changed");
        accepted
    }

    /// Handles the submit key pressed inside a field.
    ///
    /// Name fields get the name check and number fields the integer check;
    /// other fields are left alone. A failed check is reported like a
    /// failed save, clearing fields as the rejection requires.
    pub fn submit_field(&mut self, field: FieldId) -> Result<(), Rejection> {
        let value = self.state.value(field);
        let checked = match field.kind() {
            FieldKind::Name if !valid_name(value) => Err(Rejection::InvalidName { field }),
            FieldKind::Numeric => parse_count(field, value).map(drop),
            _ => Ok(()),
        };

        match checked {
            Ok(()) => {
                tracing::debug!(%field, "field accepted");
                Ok(())
            }
            Err(rejection) => {
                self.reject(&rejection);
                Err(rejection)
            }
        }
    }

    /// Saves the form: snapshots the fields, checks them and reports the outcome.
    pub fn save(&mut self) -> Result<Accepted, Rejection> {
        let submission = self.state.snapshot();

        match submit(&submission) {
            Ok(accepted) => {
                tracing::info!(verdict = ?accepted.verdict, gifts = accepted.entry.gifts, "submission accepted");
                for line in accepted.report() {
                    self.console.line(&line);
                }
                Ok(accepted)
            }
            Err(rejection) => {
                self.reject(&rejection);
                Err(rejection)
            }
        }
    }

    /// Runs the form through a frontend until the frontend returns.
    pub fn run<B: FormBackend>(&mut self, backend: &B) -> Result<(), FormError>
    where
        B::Error: Into<FormError>,
    {
        backend.run(self).map_err(Into::into)
    }

    fn reject(&mut self, rejection: &Rejection) {
        tracing::debug!(kind = ?rejection.kind(), field = ?rejection.field(), "submission rejected");
        for &field in rejection.cleared_fields() {
            self.state.clear(field);
            tracing::debug!(%field, "field cleared");
        }
        self.console.line(&rejection.to_string());
    }
}

/// Trait for frontends that let a user fill in and save the form.
///
/// A frontend owns the interaction: it edits fields through the controller,
/// triggers field submits and saves, and returns when the user is done.
pub trait FormBackend {
    /// The error type for this frontend.
    type Error;

    fn run<C: Console>(&self, controller: &mut FormController<C>) -> Result<(), Self::Error>;
}
