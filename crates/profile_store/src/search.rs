//! Free-text profile search.

use entities::Profile;

/// Returns the profiles whose name, email or role contains `query`,
/// ignoring case, in their original order. A blank query matches every
/// profile.
pub fn filter_profiles<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    if query.trim().is_empty() {
        return profiles.iter().collect();
    }

    let term = query.to_lowercase();
    profiles
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.email.to_lowercase().contains(&term)
                || p.role.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_profiles;

    fn ids(profiles: &[&Profile]) -> Vec<i64> {
        profiles.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let profiles = seed_profiles();

        assert_eq!(ids(&filter_profiles(&profiles, "")), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&filter_profiles(&profiles, "   ")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_matches_name_email_and_role_case_insensitively() {
        let profiles = seed_profiles();

        // "Ana García" by name, "Project Manager" by role.
        assert_eq!(ids(&filter_profiles(&profiles, "ANA")), vec![1, 2]);
        assert_eq!(ids(&filter_profiles(&profiles, "devops")), vec![4]);
        assert_eq!(ids(&filter_profiles(&profiles, "maria.lopez@")), vec![3]);
        assert!(filter_profiles(&profiles, "zzz").is_empty());
    }

    #[test]
    fn test_does_not_match_department() {
        let profiles = seed_profiles();

        assert!(filter_profiles(&profiles, "Infraestructura").is_empty());
    }
}
