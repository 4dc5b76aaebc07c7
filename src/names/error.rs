use std::fmt;
use thiserror::Error;

/// One of the fields of a full name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamePart {
    Surname,
    FirstName,
    Patronymic,
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surname => f.write_str("Surname"),
            Self::FirstName => f.write_str("First name"),
            Self::Patronymic => f.write_str("Patronymic"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Surname and first name are required")]
    MissingRequired,

    #[error("{0} must contain at least 2 characters")]
    TooShort(NamePart),

    #[error("{0} contains invalid characters")]
    InvalidCharacters(NamePart),

    #[error("{0} must contain only letters")]
    NotLetters(NamePart),
}
