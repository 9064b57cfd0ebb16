//! Fixed sample data loaded at start-up and on reset.

use chrono::{DateTime, TimeDelta, Utc};
use entities::{Activity, ActivityKind, Department, Profile, ProfileStatus};

/// Number of profiles in the seed set.
pub const SEED_PROFILE_COUNT: usize = 5;

/// Number of activities in the seed set.
pub const SEED_ACTIVITY_COUNT: usize = 3;

/// The sample profiles.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile::new(
            1,
            "Ana García",
            "ana.garcia@empresa.com",
            "Desarrolladora Senior",
        )
        .with_phone("+34 600 123 456")
        .with_department(Department::Technology),
        Profile::new(
            2,
            "Carlos Rodríguez",
            "carlos.rodriguez@empresa.com",
            "Project Manager",
        )
        .with_phone("+34 600 234 567")
        .with_department(Department::Management),
        Profile::new(3, "María López", "maria.lopez@empresa.com", "Diseñadora UX/UI")
            .with_status(ProfileStatus::Inactive)
            .with_phone("+34 600 345 678")
            .with_department(Department::Design),
        Profile::new(4, "Juan Martínez", "juan.martinez@empresa.com", "DevOps Engineer")
            .with_phone("+34 600 456 789")
            .with_department(Department::Infrastructure),
        Profile::new(5, "Laura Sánchez", "laura.sanchez@empresa.com", "QA Tester")
            .with_phone("+34 600 567 890")
            .with_department(Department::Quality),
    ]
}

/// The sample activities, newest first, timed relative to `now`.
pub fn seed_activities(now: DateTime<Utc>) -> Vec<Activity> {
    vec![
        Activity::at(
            ActivityKind::ProfileAdded,
            "Laura Sánchez se unió al equipo",
            now - TimeDelta::hours(2),
            now,
        ),
        Activity::at(
            ActivityKind::ProfileUpdated,
            "Carlos Rodríguez actualizó su información",
            now - TimeDelta::hours(5),
            now,
        ),
        Activity::at(
            ActivityKind::SignedIn,
            "Ana García accedió al sistema",
            now - TimeDelta::days(1),
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use validation::{Locale, Validator};

    use super::*;

    #[test]
    fn test_seed_profiles_are_valid_and_unique() {
        let profiles = seed_profiles();
        let validator = Validator::new(Locale::Spain);
        let ids: HashSet<_> = profiles.iter().map(|p| p.id).collect();

        assert_eq!(profiles.len(), SEED_PROFILE_COUNT);
        assert_eq!(ids.len(), SEED_PROFILE_COUNT);
        assert!(profiles.iter().all(|p| validator.is_valid_profile(p)));
    }

    #[test]
    fn test_seed_activity_labels() {
        let labels: Vec<_> = seed_activities(Utc::now())
            .into_iter()
            .map(|a| a.time)
            .collect();

        assert_eq!(labels, vec!["Hace 2 horas", "Hace 5 horas", "Hace 1 día"]);
    }
}
