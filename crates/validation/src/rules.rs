//! Field predicates.

use std::sync::LazyLock;

use regex::Regex;

use crate::Locale;

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_LENGTH: usize = 2;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚàèìòùÀÈÌÒÙäëïöüÄËÏÖÜñÑçÇ '\-]+$")
        .expect("regex pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex pattern is valid"));

static BO_MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[67][0-9]{7}$").expect("regex pattern is valid"));

static BO_LANDLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[234][0-9]{6}$").expect("regex pattern is valid"));

static ES_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+34)?[6789][0-9]{8}$").expect("regex pattern is valid"));

/// Returns true if `name` has at least two characters after trimming and
/// contains only letters (accented Spanish letters included), spaces,
/// hyphens or apostrophes.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= MIN_NAME_LENGTH && NAME_RE.is_match(trimmed)
}

/// Returns true if `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true if `phone` is empty or a well-formed number for `locale`.
///
/// Spaces and hyphens are ignored.
pub fn is_valid_phone(locale: Locale, phone: &str) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    if compact.is_empty() {
        return true;
    }

    match locale {
        Locale::Bolivia => {
            let national = compact
                .strip_prefix(locale.country_prefix())
                .unwrap_or(&compact);
            BO_MOBILE_RE.is_match(national) || BO_LANDLINE_RE.is_match(national)
        }
        Locale::Spain => ES_PHONE_RE.is_match(&compact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Ana García"));
        assert!(is_valid_name("  Jo "));
        assert!(is_valid_name("María-José O'Neill"));
        assert!(is_valid_name("Ñandú Müller"));

        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name(" a "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("ana@garcia"));
    }

    #[test]
    fn test_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ana.garcia@empresa.com"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana.garcia.empresa.com"));
        assert!(!is_valid_email("ana@empresa"));
        assert!(!is_valid_email("ana garcia@empresa.com"));
        assert!(!is_valid_email("@empresa.com"));
        assert!(!is_valid_email("ana@.com"));
    }

    #[test]
    fn test_empty_phone_is_valid_everywhere() {
        assert!(is_valid_phone(Locale::Bolivia, ""));
        assert!(is_valid_phone(Locale::Spain, ""));
        assert!(is_valid_phone(Locale::Spain, " - "));
    }

    #[test]
    fn test_bolivian_phones() {
        assert!(is_valid_phone(Locale::Bolivia, "+59171234567"));
        assert!(is_valid_phone(Locale::Bolivia, "71234567"));
        assert!(is_valid_phone(Locale::Bolivia, "+591 6123-4567"));
        assert!(is_valid_phone(Locale::Bolivia, "2123456"));
        assert!(is_valid_phone(Locale::Bolivia, "+591 4 123456"));

        assert!(!is_valid_phone(Locale::Bolivia, "+59151234567"));
        assert!(!is_valid_phone(Locale::Bolivia, "7123456"));
        assert!(!is_valid_phone(Locale::Bolivia, "+34 600 123 456"));
    }

    #[test]
    fn test_spanish_phones() {
        assert!(is_valid_phone(Locale::Spain, "+34 600 123 456"));
        assert!(is_valid_phone(Locale::Spain, "600123456"));
        assert!(is_valid_phone(Locale::Spain, "912-345-678"));

        assert!(!is_valid_phone(Locale::Spain, "123456"));
        assert!(!is_valid_phone(Locale::Spain, "+34 500 123 456"));
        assert!(!is_valid_phone(Locale::Spain, "+59171234567"));
    }
}
