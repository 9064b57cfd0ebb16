//! Regional rule sets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Selects which regional phone numbering the validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Bolivian numbering: 8-digit mobiles, 7-digit landlines, optional +591.
    Bolivia,
    /// Spanish numbering: 9 digits starting 6-9, optional +34.
    #[default]
    Spain,
}

impl Locale {
    /// Country calling code, including the leading plus.
    pub fn country_prefix(&self) -> &'static str {
        match self {
            Self::Bolivia => "+591",
            Self::Spain => "+34",
        }
    }

    /// Example of a well-formed number, shown in error messages.
    pub fn phone_example(&self) -> &'static str {
        match self {
            Self::Bolivia => "71234567 o +591 71234567",
            Self::Spain => "+34 600 123 456",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Bolivia => "bolivia",
            Self::Spain => "spain",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bolivia" | "bo" | "es-bo" | "es_bo" => Ok(Self::Bolivia),
            "spain" | "es" | "es-es" | "es_es" => Ok(Self::Spain),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("Bolivia".parse::<Locale>(), Ok(Locale::Bolivia));
        assert_eq!("es-ES".parse::<Locale>(), Ok(Locale::Spain));
        assert!("mexico".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Spain);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Locale::Bolivia).unwrap();
        assert_eq!(json, "\"bolivia\"");
        let locale: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(locale, Locale::Bolivia);
    }
}
