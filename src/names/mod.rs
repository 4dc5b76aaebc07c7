//! Personal-name formatting.
//!
//! Normalizes the capitalization of a surname, first name and optional
//! patronymic, validates them, and renders the "Surname F.P." initials
//! form.

mod error;
mod initials;
mod parsing;
mod validation;

pub use error::{NameError, NamePart};
pub use initials::{format_full_name, format_initials, process_name_form};
pub use parsing::normalize_name;
pub use validation::validate_names;
