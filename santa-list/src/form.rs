//! Editable field state of the form.

use santa_list_types::{Behaviour, Choice, FieldId, Gender, Selection, Submission};

/// The values currently entered in the form.
///
/// Frontends edit this state; saving takes a [`Submission`] snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    current: Submission,
}

impl FormState {
    /// An empty form: blank text fields, selectors at the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text shown in a field. Selectors report their label.
    pub fn value(&self, field: FieldId) -> &str {
        self.current.value(field)
    }

    /// Replaces the text of a field. Returns `false` for selectors.
    pub fn set_text(&mut self, field: FieldId, text: impl Into<String>) -> bool {
        match self.current.text_mut(field) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Empties a text field, or puts a selector back on its placeholder.
    pub fn clear(&mut self, field: FieldId) {
        match field {
            FieldId::Gender => self.current.gender = Selection::Unselected,
            FieldId::Behaviour => self.current.behaviour = Selection::Unselected,
            text => {
                if let Some(slot) = self.current.text_mut(text) {
                    slot.clear();
                }
            }
        }
    }

    /// Entries of a selector, placeholder first; `None` for text fields.
    pub fn choice_labels(field: FieldId) -> Option<Vec<&'static str>> {
        match field {
            FieldId::Gender => Some(Selection::<Gender>::labels()),
            FieldId::Behaviour => Some(Selection::<Behaviour>::labels()),
            _ => None,
        }
    }

    /// Position of the current entry in [`FormState::choice_labels`].
    pub fn choice_index(&self, field: FieldId) -> Option<usize> {
        match field {
            FieldId::Gender => Some(self.current.gender.index()),
            FieldId::Behaviour => Some(self.current.behaviour.index()),
            _ => None,
        }
    }

    /// Picks the entry at `index` of a selector (0 is the placeholder).
    ///
    /// Returns `false` if `field` is not a selector or `index` is out of range.
    pub fn select(&mut self, field: FieldId, index: usize) -> bool {
        match field {
            FieldId::Gender => Self::apply(&mut self.current.gender, index),
            FieldId::Behaviour => Self::apply(&mut self.current.behaviour, index),
            _ => false,
        }
    }

    fn apply<T: Choice>(slot: &mut Selection<T>, index: usize) -> bool {
        match Selection::from_index(index) {
            Some(selection) => {
                *slot = selection;
                true
            }
            None => false,
        }
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.current.gender = Selection::Selected(gender);
    }

    pub fn set_behaviour(&mut self, behaviour: Behaviour) {
        self.current.behaviour = Selection::Selected(behaviour);
    }

    /// A fresh, independent copy of the current values.
    pub fn snapshot(&self) -> Submission {
        self.current.clone()
    }
}

impl From<Submission> for FormState {
    fn from(current: Submission) -> Self {
        Self { current }
    }
}
