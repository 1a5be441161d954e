use crate::{Behaviour, Choice, FieldId, Gender, Selection};

/// Behaviour label that sends an accepted entry to review instead of the table.
///
/// No selectable [`Behaviour`] option carries this label, so
/// [`Verdict::UnderReview`] is never reached through the form.
pub const NAUGHTY_ANSWER: &str = "No";

/// The values of all eight fields, taken when the form is saved.
///
/// Text fields hold exactly what was typed; parsing and checking happens
/// when the submission is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub surname: String,
    pub gender: Selection<Gender>,
    pub age: String,
    pub country: String,
    pub intentions: String,
    pub gifts: String,
    pub behaviour: Selection<Behaviour>,
}

impl Submission {
    /// The text currently shown for a field. Selectors report their label.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Surname => &self.surname,
            FieldId::Gender => self.gender.label(),
            FieldId::Age => &self.age,
            FieldId::Country => &self.country,
            FieldId::Intentions => &self.intentions,
            FieldId::Gifts => &self.gifts,
            FieldId::Behaviour => self.behaviour.label(),
        }
    }

    /// Mutable access to a text field; `None` for selectors.
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Surname => Some(&mut self.surname),
            FieldId::Age => Some(&mut self.age),
            FieldId::Country => Some(&mut self.country),
            FieldId::Intentions => Some(&mut self.intentions),
            FieldId::Gifts => Some(&mut self.gifts),
            FieldId::Gender | FieldId::Behaviour => None,
        }
    }
}

/// A submission that passed every check, with its values parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftListEntry {
    pub name: String,
    pub surname: String,
    pub gender: Gender,
    pub age: u64,
    pub country: String,
    pub intentions: String,
    pub gifts: u64,
    pub behaviour: Behaviour,
}

impl GiftListEntry {
    /// One `"<label> <value>"` line per field, in form order.
    pub fn echo_lines(&self) -> Vec<String> {
        FieldId::ALL
            .iter()
            .map(|&field| format!("{} {}", field.echo_label(), self.value(field)))
            .collect()
    }

    fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Name => self.name.clone(),
            FieldId::Surname => self.surname.clone(),
            FieldId::Gender => self.gender.label().to_string(),
            FieldId::Age => self.age.to_string(),
            FieldId::Country => self.country.clone(),
            FieldId::Intentions => self.intentions.clone(),
            FieldId::Gifts => self.gifts.to_string(),
            FieldId::Behaviour => self.behaviour.label().to_string(),
        }
    }
}

/// What Santa decides about an accepted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    SeatSecured,
    UnderReview,
}

impl Verdict {
    /// Verdict for an entry whose behaviour selector shows `label`.
    pub fn for_behaviour_label(label: &str) -> Self {
        if label == NAUGHTY_ANSWER {
            Self::UnderReview
        } else {
            Self::SeatSecured
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::SeatSecured => {
                "Congratulations!\nYour seat at the Christmas Table is secured!\nGet ready to jingle all the way!!"
            }
            Self::UnderReview => {
                "Looks like Santa has detected some questionable behavior on his radar!\nYour case is under review.\nHang tight and reconsider those life choices!"
            }
        }
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub entry: GiftListEntry,
    pub verdict: Verdict,
}

impl Accepted {
    /// Everything reported for the acceptance: the echoed fields, then the verdict.
    pub fn report(&self) -> Vec<String> {
        let mut lines = self.entry.echo_lines();
        lines.push(self.verdict.message().to_string());
        lines
    }
}
