//! Aggregate statistics over a profile collection.

use entities::{Department, Profile, ProfileStatus};
use serde::Serialize;

/// Number of profiles in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStat {
    pub department: Department,
    pub count: usize,
}

/// Counts derived from the current profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// All profiles.
    pub total: usize,
    /// Profiles with [`ProfileStatus::Active`].
    pub active: usize,
    /// Profiles with [`ProfileStatus::Inactive`].
    pub inactive: usize,
    /// Number of distinct departments present.
    pub departments: usize,
    /// Per-department counts, in order of first appearance.
    pub department_counts: Vec<DepartmentStat>,
}

impl Statistics {
    /// Computes statistics for `profiles`. Profiles without a department
    /// count toward the totals only.
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let mut stats = Self {
            total: profiles.len(),
            ..Self::default()
        };

        for profile in profiles {
            match profile.status {
                ProfileStatus::Active => stats.active += 1,
                ProfileStatus::Inactive => stats.inactive += 1,
            }

            let Some(department) = profile.department else {
                continue;
            };
            match stats
                .department_counts
                .iter_mut()
                .find(|s| s.department == department)
            {
                Some(stat) => stat.count += 1,
                None => stats.department_counts.push(DepartmentStat {
                    department,
                    count: 1,
                }),
            }
        }

        stats.departments = stats.department_counts.len();
        stats
    }

    /// Count for a single department.
    pub fn count_for(&self, department: Department) -> usize {
        self.department_counts
            .iter()
            .find(|s| s.department == department)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_profiles;

    #[test]
    fn test_seed_statistics() {
        let stats = Statistics::from_profiles(&seed_profiles());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.departments, 5);
        assert_eq!(stats.department_counts[0].department, Department::Technology);
    }

    #[test]
    fn test_first_appearance_order_and_missing_department() {
        let profiles = vec![
            Profile::new(1, "Ana", "a@b.co", "QA").with_department(Department::Quality),
            Profile::new(2, "Bea", "b@b.co", "Dev").with_department(Department::Technology),
            Profile::new(3, "Cris", "c@b.co", "QA").with_department(Department::Quality),
            Profile::new(4, "Dani", "d@b.co", "Intern"),
        ];
        let stats = Statistics::from_profiles(&profiles);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.departments, 2);
        assert_eq!(
            stats.department_counts,
            vec![
                DepartmentStat {
                    department: Department::Quality,
                    count: 2
                },
                DepartmentStat {
                    department: Department::Technology,
                    count: 1
                },
            ]
        );
        assert_eq!(stats.count_for(Department::Design), 0);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(Statistics::from_profiles(&[]), Statistics::default());
    }
}
