use std::fmt;

/// Text a selector shows before the user picks anything.
pub const PLACEHOLDER: &str = "Select";

/// A closed set of options offered by a single-choice selector.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// The selectable options, in display order.
    const OPTIONS: &'static [Self];

    /// The text shown for this option.
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Choice for Gender {
    const OPTIONS: &'static [Self] = &[Self::Female, Self::Male];

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// Answer to "Did you behave this year?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Yes,
    No,
}

impl Choice for Behaviour {
    const OPTIONS: &'static [Self] = &[Self::Yes, Self::No];

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Off Course!",
            Self::No => "Maybe Not...",
        }
    }
}

/// Current state of a selector: the placeholder, or one of the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Unselected,
    Selected(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Unselected
    }
}

impl<T: Choice> Selection<T> {
    /// The text the selector currently shows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => PLACEHOLDER,
            Self::Selected(choice) => choice.label(),
        }
    }

    pub fn selected(&self) -> Option<T> {
        match self {
            Self::Unselected => None,
            Self::Selected(choice) => Some(*choice),
        }
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, Self::Unselected)
    }

    /// All entries of the selector, placeholder first.
    pub fn labels() -> Vec<&'static str> {
        std::iter::once(PLACEHOLDER)
            .chain(T::OPTIONS.iter().map(|choice| choice.label()))
            .collect()
    }

    /// Position of this selection in [`Selection::labels`].
    pub fn index(&self) -> usize {
        match self {
            Self::Unselected => 0,
            Self::Selected(choice) => T::OPTIONS
                .iter()
                .position(|option| option == choice)
                .map_or(0, |pos| pos + 1),
        }
    }

    /// Selection at a position in [`Selection::labels`]; `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Unselected),
            n => T::OPTIONS.get(n - 1).copied().map(Self::Selected),
        }
    }
}

impl<T: Choice> From<T> for Selection<T> {
    fn from(choice: T) -> Self {
        Self::Selected(choice)
    }
}
