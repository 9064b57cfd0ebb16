//! Department definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Icon shown for a profile without a department.
pub const FALLBACK_DEPARTMENT_ICON: &str = "business-outline";

/// A department a profile can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Software development.
    #[serde(rename = "Tecnología", alias = "technology")]
    Technology,
    /// Project and people management.
    #[serde(rename = "Gestión", alias = "management")]
    Management,
    /// Product and UX design.
    #[serde(rename = "Diseño", alias = "design")]
    Design,
    /// Operations and platform.
    #[serde(rename = "Infraestructura", alias = "infrastructure")]
    Infrastructure,
    /// Quality assurance.
    #[serde(rename = "Calidad", alias = "quality")]
    Quality,
}

impl Department {
    /// Returns every department, in the order they are offered in forms.
    pub fn all() -> [Department; 5] {
        [
            Self::Technology,
            Self::Management,
            Self::Design,
            Self::Infrastructure,
            Self::Quality,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Tecnología",
            Self::Management => "Gestión",
            Self::Design => "Diseño",
            Self::Infrastructure => "Infraestructura",
            Self::Quality => "Calidad",
        }
    }

    /// Returns the English identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Management => "management",
            Self::Design => "design",
            Self::Infrastructure => "infrastructure",
            Self::Quality => "quality",
        }
    }

    /// Returns the icon name used when rendering this department.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Technology => "code-slash-outline",
            Self::Management => "people-outline",
            Self::Design => "color-palette-outline",
            Self::Infrastructure => "server-outline",
            Self::Quality => "shield-checkmark-outline",
        }
    }

    /// Icon for an optional department.
    pub fn icon_for(department: Option<Department>) -> &'static str {
        department
            .map(|d| d.icon())
            .unwrap_or(FALLBACK_DEPARTMENT_ICON)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a string names no known department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDepartment(pub String);

impl fmt::Display for UnknownDepartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown department: {}", self.0)
    }
}

impl std::error::Error for UnknownDepartment {}

impl FromStr for Department {
    type Err = UnknownDepartment;

    /// Accepts either the display label or the English identifier,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|d| d.label().to_lowercase() == needle || d.identifier() == needle)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_identifier() {
        assert_eq!("Tecnología".parse::<Department>(), Ok(Department::Technology));
        assert_eq!("  gestión ".parse::<Department>(), Ok(Department::Management));
        assert_eq!("quality".parse::<Department>(), Ok(Department::Quality));
        assert!("Marketing".parse::<Department>().is_err());
    }

    #[test]
    fn test_icons() {
        assert_eq!(Department::Design.icon(), "color-palette-outline");
        assert_eq!(Department::icon_for(None), FALLBACK_DEPARTMENT_ICON);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Department::Infrastructure).unwrap();
        assert_eq!(json, "\"Infraestructura\"");

        let parsed: Department = serde_json::from_str("\"design\"").unwrap();
        assert_eq!(parsed, Department::Design);
    }
}
