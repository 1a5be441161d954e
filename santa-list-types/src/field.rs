use std::fmt;

/// One of the eight inputs of the gift list form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Surname,
    Gender,
    Age,
    Country,
    Intentions,
    Gifts,
    Behaviour,
}

/// How a field is edited and which check runs when it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text that must pass the name rules.
    Name,
    /// Text that must parse as a non-negative integer.
    Numeric,
    /// Unvalidated free text.
    FreeText,
    /// Single-choice selector with a placeholder entry.
    Choice,
}

impl FieldId {
    /// All fields, in the order they are shown and echoed.
    pub const ALL: [FieldId; 8] = [
        FieldId::Name,
        FieldId::Surname,
        FieldId::Gender,
        FieldId::Age,
        FieldId::Country,
        FieldId::Intentions,
        FieldId::Gifts,
        FieldId::Behaviour,
    ];

    /// The label shown next to the input.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Country => "Country",
            Self::Intentions => "Intentions",
            Self::Gifts => "How many Gifts do you bring",
            Self::Behaviour => "Did you behave this year?",
        }
    }

    /// The label used when an accepted submission is echoed back.
    pub fn echo_label(self) -> &'static str {
        match self {
            Self::Gifts => "Number of Gifts",
            Self::Behaviour => "Good Behaviour",
            other => other.prompt(),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Surname => FieldKind::Name,
            Self::Age | Self::Gifts => FieldKind::Numeric,
            Self::Country | Self::Intentions => FieldKind::FreeText,
            Self::Gender | Self::Behaviour => FieldKind::Choice,
        }
    }

    /// Whether the field is edited as text (everything but the selectors).
    pub fn is_text(self) -> bool {
        self.kind() != FieldKind::Choice
    }

    /// Short machine name, used as a structured logging value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Country => "country",
            Self::Intentions => "intentions",
            Self::Gifts => "gifts",
            Self::Behaviour => "behaviour",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_the_form() {
        let text: Vec<_> = FieldId::ALL.iter().filter(|f| f.is_text()).collect();
        assert_eq!(text.len(), 6);
        assert_eq!(FieldId::Gender.kind(), FieldKind::Choice);
        assert_eq!(FieldId::Gifts.kind(), FieldKind::Numeric);
        assert_eq!(FieldId::Country.kind(), FieldKind::FreeText);
    }

    #[test]
    fn echo_labels_differ_only_for_gifts_and_behaviour() {
        assert_eq!(FieldId::Name.echo_label(), "Name");
        assert_eq!(FieldId::Gifts.echo_label(), "Number of Gifts");
        assert_eq!(FieldId::Behaviour.echo_label(), "Good Behaviour");
    }
}
