//! Job role catalog.

/// Roles offered by the role picker.
pub const AVAILABLE_ROLES: [&str; 8] = [
    "Desarrolladora Senior",
    "Project Manager",
    "Diseñadora UX/UI",
    "DevOps Engineer",
    "QA Tester",
    "Desarrollador Full Stack",
    "Analista de Sistemas",
    "Arquitecto de Software",
];

/// Returns the roles containing `term`, ignoring case. A blank term
/// returns every role.
pub fn filter_roles<'a>(roles: &[&'a str], term: &str) -> Vec<&'a str> {
    if term.trim().is_empty() {
        return roles.to_vec();
    }
    let term = term.to_lowercase();
    roles
        .iter()
        .copied()
        .filter(|role| role.to_lowercase().contains(&term))
        .collect()
}

/// Returns true if a role equal to `term` (ignoring case) already exists.
pub fn role_exists(roles: &[&str], term: &str) -> bool {
    let term = term.to_lowercase();
    roles.iter().any(|role| role.to_lowercase() == term)
}

/// Returns `term` as a new role if it is non-blank and not already listed.
pub fn new_role(roles: &[&str], term: &str) -> Option<String> {
    if term.trim().is_empty() || role_exists(roles, term) {
        None
    } else {
        Some(term.to_string())
    }
}
