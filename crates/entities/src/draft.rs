//! Profile form record.

use serde::{Deserialize, Serialize};

use crate::{Department, Profile};

/// The values a profile form holds before they are validated.
///
/// Text fields keep whatever the user typed; the validation crate decides
/// whether the draft becomes a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Job title.
    #[serde(default)]
    pub role: String,
    /// Selected department.
    #[serde(default)]
    pub department: Option<Department>,
    /// Phone number, if entered.
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar URL, if chosen.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Active toggle.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::new(),
            department: None,
            phone: None,
            avatar: None,
            active: default_active(),
        }
    }
}

impl ProfileDraft {
    /// Pre-fills a draft for editing an existing profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
            department: profile.department,
            phone: profile.phone.clone(),
            avatar: Some(profile.avatar.clone()),
            active: profile.status.is_active(),
        }
    }

    /// Phone number with blank input treated as absent.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Avatar URL with blank input treated as absent.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileStatus;

    #[test]
    fn test_from_profile_round_trips_form_fields() {
        let profile = Profile::new(3, "María López", "maria@empresa.com", "Diseñadora UX/UI")
            .with_department(Department::Design)
            .with_status(ProfileStatus::Inactive);
        let draft = ProfileDraft::from_profile(&profile);

        assert_eq!(draft.name, "María López");
        assert_eq!(draft.department, Some(Department::Design));
        assert!(!draft.active);
        assert_eq!(draft.avatar(), Some(profile.avatar.as_str()));
    }

    #[test]
    fn test_blank_optional_fields() {
        let draft = ProfileDraft {
            phone: Some("   ".to_string()),
            avatar: Some(String::new()),
            ..Default::default()
        };

        assert!(draft.active);
        assert_eq!(draft.phone(), None);
        assert_eq!(draft.avatar(), None);
    }
}
