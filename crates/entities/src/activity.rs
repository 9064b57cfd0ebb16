//! Activity log entry definitions.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// What kind of change an activity describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A profile was created.
    ProfileAdded,
    /// A profile was edited.
    ProfileUpdated,
    /// A profile was removed.
    ProfileDeleted,
    /// Someone signed in.
    SignedIn,
}

impl ActivityKind {
    /// Icon name used when rendering the entry.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::ProfileAdded => "person-add",
            Self::ProfileUpdated => "create",
            Self::ProfileDeleted => "trash",
            Self::SignedIn => "log-in",
        }
    }

    /// Color name used when rendering the entry.
    pub fn color(&self) -> &'static str {
        match self {
            Self::ProfileAdded => "success",
            Self::ProfileUpdated => "primary",
            Self::ProfileDeleted => "danger",
            Self::SignedIn => "tertiary",
        }
    }

    /// Headline for the entry.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProfileAdded => "Nuevo perfil agregado",
            Self::ProfileUpdated => "Perfil actualizado",
            Self::ProfileDeleted => "Perfil eliminado",
            Self::SignedIn => "Inicio de sesión",
        }
    }
}

/// One entry of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Icon presentation hint.
    pub icon: String,
    /// Color presentation hint.
    pub color: String,
    /// Headline.
    pub title: String,
    /// Human-readable summary of the change.
    pub description: String,
    /// Relative-time label computed when the entry was recorded.
    pub time: String,
    /// When the change happened.
    pub recorded_at: DateTime<Utc>,
}

impl Activity {
    /// Creates an entry for a change that happened just now.
    pub fn new(kind: ActivityKind, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self::at(kind, description, now, now)
    }

    /// Creates an entry for a change that happened at `recorded_at`,
    /// labelled relative to `now`.
    pub fn at(
        kind: ActivityKind,
        description: impl Into<String>,
        recorded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            icon: kind.icon().to_string(),
            color: kind.color().to_string(),
            title: kind.title().to_string(),
            description: description.into(),
            time: relative_time_label(now - recorded_at),
            recorded_at,
        }
    }
}

/// Formats an elapsed duration as a Spanish "time ago" label.
///
/// Anything under a minute (including negative durations from clock skew)
/// reads as "a few seconds ago".
pub fn relative_time_label(elapsed: TimeDelta) -> String {
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Hace unos segundos".to_string()
    } else if hours < 1 {
        plural(minutes, "minuto", "minutos")
    } else if days < 1 {
        plural(hours, "hora", "horas")
    } else {
        plural(days, "día", "días")
    }
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("Hace 1 {one}")
    } else {
        format!("Hace {n} {many}")
    }
}
