use crate::FieldId;

/// Why a submission (or a single submitted field) was turned away.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid Entry!\nPlease enter a valid one!")]
    InvalidName { field: FieldId },

    #[error("Name and Surname must be different!")]
    NamesMatch,

    #[error("You can not input a negative number!")]
    NegativeNumber { field: FieldId, value: i64 },

    #[error("Invalid entry!\nPlease enter an integer value!")]
    NotAnInteger { field: FieldId },

    #[error("Please enter your Gender!")]
    GenderMissing,

    #[error("Please enter if you behave this year!")]
    BehaviourMissing,

    #[error(
        "Is that all the magic you've got in your sleigh?\nLooks like someone might be on the 'Naughty List' for a gift shortage!"
    )]
    GiftShortage { gifts: u64 },
}

/// Broad class of a [`Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// A name does not follow the name rules.
    Format,
    /// A number field does not hold an integer.
    Parse,
    /// A number is out of the accepted range.
    Range,
    /// A selector was left at its placeholder.
    SelectionOmission,
    /// Fields are individually fine but contradict each other.
    SemanticConflict,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::InvalidName { .. } => RejectionKind::Format,
            Self::NotAnInteger { .. } => RejectionKind::Parse,
            Self::NegativeNumber { .. } | Self::GiftShortage { .. } => RejectionKind::Range,
            Self::GenderMissing | Self::BehaviourMissing => RejectionKind::SelectionOmission,
            Self::NamesMatch => RejectionKind::SemanticConflict,
        }
    }

    /// The field the rejection is about, if it concerns a single one.
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::InvalidName { field }
            | Self::NegativeNumber { field, .. }
            | Self::NotAnInteger { field } => Some(*field),
            Self::GenderMissing => Some(FieldId::Gender),
            Self::BehaviourMissing => Some(FieldId::Behaviour),
            Self::GiftShortage { .. } => Some(FieldId::Gifts),
            Self::NamesMatch => None,
        }
    }

    /// Fields emptied when this rejection is reported.
    ///
    /// A bad name clears both names; a non-integer clears both numbers.
    pub fn cleared_fields(&self) -> &'static [FieldId] {
        match self {
            Self::InvalidName { .. } => &[FieldId::Name, FieldId::Surname],
            Self::NotAnInteger { .. } => &[FieldId::Age, FieldId::Gifts],
            _ => &[],
        }
    }
}
