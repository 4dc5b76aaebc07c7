use lazy_static::lazy_static;
use regex::Regex;

use super::error::{NameError, NamePart};

const MIN_LENGTH: usize = 2;

lazy_static! {
    static ref NAME_CHARS: Regex = Regex::new(r"^[A-Za-zА-Яа-яЁё\s-]+$").unwrap();
    static ref LETTERS_ONLY: Regex = Regex::new(r"^[A-Za-zА-Яа-яЁё]+$").unwrap();
}

/// Validate already-normalized name parts.
///
/// Each rule is applied to every present part (surname, first name,
/// patronymic) before the next rule runs: minimum length, then the
/// Latin/Cyrillic character set, then letters-only once hyphens and
/// spaces are removed.
pub fn validate_names(
    surname: &str,
    first_name: &str,
    patronymic: Option<&str>,
) -> Result<(), NameError> {
    let parts = [
        (NamePart::Surname, Some(surname)),
        (NamePart::FirstName, Some(first_name)),
        (NamePart::Patronymic, patronymic),
    ];
    let present = || {
        parts
            .iter()
            .filter_map(|&(part, value)| value.map(|value| (part, value)))
    };

    for (part, value) in present() {
        if value.chars().count() < MIN_LENGTH {
            return Err(NameError::TooShort(part));
        }
    }

    for (part, value) in present() {
        if !NAME_CHARS.is_match(value) {
            return Err(NameError::InvalidCharacters(part));
        }
    }

    for (part, value) in present() {
        let letters: String = value
            .chars()
            .filter(|&c| c != '-' && !c.is_whitespace())
            .collect();
        if !LETTERS_ONLY.is_match(&letters) {
            return Err(NameError::NotLetters(part));
        }
    }

    Ok(())
}
