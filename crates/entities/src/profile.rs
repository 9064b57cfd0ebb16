//! Profile entity definitions.

use serde::{Deserialize, Serialize};

use crate::Department;

/// Avatar used when a profile is saved without one.
pub const DEFAULT_AVATAR: &str = "https://ionicframework.com/docs/img/demos/avatar.svg";

/// Avatars offered by the profile form.
pub const AVAILABLE_AVATARS: [&str; 6] = [
    DEFAULT_AVATAR,
    "https://i.pravatar.cc/150?img=1",
    "https://i.pravatar.cc/150?img=2",
    "https://i.pravatar.cc/150?img=3",
    "https://i.pravatar.cc/150?img=4",
    "https://i.pravatar.cc/150?img=5",
];

/// Resolves an avatar picked from [`AVAILABLE_AVATARS`], either by its
/// 1-based position or by its URL.
pub fn avatar_choice(choice: &str) -> Option<&'static str> {
    let choice = choice.trim();
    if let Ok(position) = choice.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| AVAILABLE_AVATARS.get(index))
            .copied();
    }
    AVAILABLE_AVATARS.iter().copied().find(|url| *url == choice)
}

/// Identifier of a profile.
pub type ProfileId = i64;

/// Status of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// Currently working.
    #[default]
    Active,
    /// On leave or no longer working.
    Inactive,
}

impl ProfileStatus {
    /// Maps the form's active toggle to a status.
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Returns true for [`ProfileStatus::Active`].
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A managed employee profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier, fixed at creation.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job title.
    pub role: String,
    /// Current status.
    pub status: ProfileStatus,
    /// Avatar URL.
    pub avatar: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Department, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl Profile {
    /// Creates an active profile with the default avatar.
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: ProfileStatus::Active,
            avatar: DEFAULT_AVATAR.to_string(),
            phone: None,
            department: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ProfileStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Department label, or an empty string when unassigned.
    pub fn department_label(&self) -> &'static str {
        self.department.map(|d| d.label()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation() {
        let profile = Profile::new(7, "Ana García", "ana@empresa.com", "QA Tester")
            .with_department(Department::Quality)
            .with_phone("+34 600 123 456");

        assert_eq!(profile.id, 7);
        assert_eq!(profile.status, ProfileStatus::Active);
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
        assert_eq!(profile.department_label(), "Calidad");
        assert_eq!(profile.phone.as_deref(), Some("+34 600 123 456"));
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let profile = Profile::new(1, "Juan", "juan@empresa.com", "DevOps Engineer")
            .with_status(ProfileStatus::Inactive);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["status"], "inactive");
        assert!(json.get("phone").is_none());
        assert!(json.get("department").is_none());
    }

    #[test]
    fn test_avatar_choice() {
        assert_eq!(avatar_choice("1"), Some(DEFAULT_AVATAR));
        assert_eq!(avatar_choice(" 3 "), Some(AVAILABLE_AVATARS[2]));
        assert_eq!(
            avatar_choice("https://i.pravatar.cc/150?img=5"),
            Some(AVAILABLE_AVATARS[5])
        );
        assert_eq!(avatar_choice("0"), None);
        assert_eq!(avatar_choice("7"), None);
        assert_eq!(avatar_choice("https://example.com/me.png"), None);
    }
}
