use tracing::debug;

use super::error::NameError;
use super::parsing::normalize_name;
use super::validation::validate_names;

/// Render "Surname F.P." from name parts, without validating them.
pub fn format_initials(surname: &str, first_name: &str, patronymic: Option<&str>) -> String {
    let initial = |name: &str| {
        name.chars()
            .next()
            .map(|c| format!("{c}."))
            .unwrap_or_default()
    };

    let first_initial = initial(first_name);
    let middle_initial = patronymic.map(initial).unwrap_or_default();

    format!("{surname} {first_initial}{middle_initial}")
        .trim()
        .to_string()
}

/// Normalize, validate and format a full name.
///
/// A blank patronymic is treated as absent.
pub fn format_full_name(
    surname: &str,
    first_name: &str,
    patronymic: Option<&str>,
) -> Result<String, NameError> {
    if surname.trim().is_empty() || first_name.trim().is_empty() {
        return Err(NameError::MissingRequired);
    }

    let surname = normalize_name(surname);
    let first_name = normalize_name(first_name);
    let patronymic = patronymic.map(normalize_name).filter(|p| !p.is_empty());

    validate_names(&surname, &first_name, patronymic.as_deref())?;

    let formatted = format_initials(&surname, &first_name, patronymic.as_deref());
    debug!(%formatted, "formatted name");
    Ok(formatted)
}

/// Form entry point: the formatted name, or `"Error: <reason>"`.
pub fn process_name_form(surname: &str, first_name: &str, patronymic: Option<&str>) -> String {
    match format_full_name(surname, first_name, patronymic) {
        Ok(formatted) => formatted,
        Err(err) => format!("Error: {err}"),
    }
}
