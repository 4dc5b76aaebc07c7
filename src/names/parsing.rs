/// Tidy up a name as typed.
///
/// Surrounding whitespace is dropped, runs of whitespace collapse to a
/// single space, and each word gets an upper-case first letter with the
/// rest lower-cased. Hyphenated parts are one word: "petrov-vodkin"
/// becomes "Petrov-vodkin".
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalization() {
        assert_eq!(normalize_name("ivanov"), "Ivanov");
        assert_eq!(normalize_name("IVANOV"), "Ivanov");
        assert_eq!(normalize_name("иВАНОВ"), "Иванов");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize_name("  anna   maria \t"), "Anna Maria");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_hyphenated_is_one_word() {
        assert_eq!(normalize_name("PETROV-VODKIN"), "Petrov-vodkin");
    }
}
