//! Command definitions and handlers

use std::{io::Write, path::PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use entities::{
    avatar_choice, filter_roles, new_role, Activity, Department, Profile, ProfileDraft,
    ProfileId, AVAILABLE_AVATARS, AVAILABLE_ROLES,
};
use profile_store::{ProfileStoreError, Statistics, StoreOperation};
use thiserror::Error;
use tracing::{info, warn};
use validation::{Field, ValidationError};

use crate::{
    export::{export_profiles, ExportError},
    preferences::PreferencesError,
    state::AppState,
};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse operations file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown avatar: {0} (see the avatars command)")]
    UnknownAvatar(String),
    #[error("Role already exists or is blank: {0:?}")]
    RoleRejected(String),
    #[error("Operation #{index} failed: {source}")]
    Operation {
        index: usize,
        source: ProfileStoreError,
    },
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List profiles, optionally filtered by name, email or role
    List {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one profile
    Show { id: ProfileId },
    /// Show statistics and recent activity
    Stats,
    /// Create a profile
    Add(ProfileFields),
    /// Edit a profile; omitted fields keep their value
    Edit {
        id: ProfileId,
        #[command(flatten)]
        fields: ProfileFields,
    },
    /// Delete a profile
    Remove { id: ProfileId },
    /// List available roles, optionally filtered
    Roles {
        #[arg(short, long)]
        query: Option<String>,
        /// Check a role to add that is not in the catalog yet
        #[arg(long, conflicts_with = "query")]
        new: Option<String>,
    },
    /// List the avatars a profile can pick
    Avatars,
    /// Check form fields without saving
    Validate(ProfileFields),
    /// Replay a JSON array of store operations
    Apply { file: PathBuf },
    /// Export all profiles as JSON
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or change the dark mode preference
    DarkMode { state: Option<Toggle> },
    /// Reset profiles to the sample data and clear preferences
    ClearCache,
    /// Sign out: same reset as clear-cache
    Logout,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    Active,
    Inactive,
}

/// Profile form fields as command-line options
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    /// Department label or identifier (e.g. "Tecnología" or "technology")
    #[arg(long)]
    pub department: Option<Department>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Avatar position (see `avatars`) or URL
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

impl ProfileFields {
    /// Overlays the given fields onto `draft`
    fn apply_to(self, mut draft: ProfileDraft) -> CommandResult<ProfileDraft> {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(role) = self.role {
            draft.role = role;
        }
        if let Some(department) = self.department {
            draft.department = Some(department);
        }
        if let Some(phone) = self.phone {
            draft.phone = Some(phone);
        }
        if let Some(avatar) = self.avatar {
            let url = avatar_choice(&avatar).ok_or(CommandError::UnknownAvatar(avatar))?;
            draft.avatar = Some(url.to_string());
        }
        if let Some(status) = self.status {
            draft.active = status == StatusArg::Active;
        }
        Ok(draft)
    }
}

/// Runs `command`, writing user-facing output to `out`
pub fn execute(state: &AppState, command: Commands, out: &mut impl Write) -> CommandResult<()> {
    match command {
        Commands::List { query } => {
            let profiles = state.store.search(query.as_deref().unwrap_or(""));
            if profiles.is_empty() {
                writeln!(out, "No se encontraron perfiles")?;
            }
            for profile in &profiles {
                write_profile_row(out, profile)?;
            }
        }
        Commands::Show { id } => {
            let profile = state
                .store
                .get(id)
                .ok_or_else(|| ProfileStoreError::not_found(id))?;
            write_profile_details(out, &profile)?;
        }
        Commands::Stats => {
            write_statistics(out, &state.store.statistics())?;
            writeln!(out)?;
            write_activities(out, &state.store.activities())?;
        }
        Commands::Add(fields) => {
            let draft = fields.apply_to(ProfileDraft::default())?;
            let profile = state
                .validator
                .accept_new(&draft, state.store.next_id()?)
                .inspect_err(|e| report_invalid(&mut *out, e))?;
            let profile = state.store.add(profile)?;
            writeln!(out, "Perfil agregado correctamente")?;
            write_profile_details(out, &profile)?;
        }
        Commands::Edit { id, fields } => {
            let existing = state
                .store
                .get(id)
                .ok_or_else(|| ProfileStoreError::not_found(id))?;
            let draft = fields.apply_to(ProfileDraft::from_profile(&existing))?;
            let profile = state
                .validator
                .accept_update(&draft, &existing)
                .inspect_err(|e| report_invalid(&mut *out, e))?;
            let profile = state.store.update(profile)?;
            writeln!(out, "Perfil actualizado correctamente")?;
            write_profile_details(out, &profile)?;
        }
        Commands::Remove { id } => {
            let removed = state.store.remove(id)?;
            writeln!(out, "Perfil eliminado: {}", removed.name)?;
        }
        Commands::Roles { new: Some(term), .. } => {
            let role =
                new_role(&AVAILABLE_ROLES, &term).ok_or(CommandError::RoleRejected(term))?;
            writeln!(out, "Nuevo cargo disponible: {role}")?;
        }
        Commands::Roles { query, new: None } => {
            for role in filter_roles(&AVAILABLE_ROLES, query.as_deref().unwrap_or("")) {
                writeln!(out, "{role}")?;
            }
        }
        Commands::Avatars => {
            for (position, url) in AVAILABLE_AVATARS.iter().enumerate() {
                writeln!(out, "{:>2}  {url}", position + 1)?;
            }
        }
        Commands::Validate(fields) => {
            let draft = fields.apply_to(ProfileDraft::default())?;
            let phone = draft.phone().unwrap_or("");
            let department = draft.department.map(|d| d.label()).unwrap_or("");
            for (field, value) in [
                (Field::Name, draft.name.as_str()),
                (Field::Email, draft.email.as_str()),
                (Field::Role, draft.role.as_str()),
                (Field::Department, department),
                (Field::Phone, phone),
            ] {
                let message = state.validator.field_error(field, value);
                let verdict = if message.is_empty() { "ok" } else { message.as_str() };
                writeln!(out, "{field:<10} {verdict}")?;
            }
            if !state.validator.is_valid_draft(&draft) {
                return Err(ValidationError::InvalidFields(state.validator.errors(&draft)).into());
            }
        }
        Commands::Apply { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let operations: Vec<StoreOperation> = serde_json::from_str(&contents)?;
            info!(count = operations.len(), file = %file.display(), "Applying operations");

            for (index, operation) in operations.into_iter().enumerate() {
                let change = state
                    .store
                    .apply(operation, &state.validator)
                    .map_err(|source| CommandError::Operation { index, source })?;
                writeln!(out, "#{index}: {change:?}")?;
            }
            writeln!(out)?;
            write_statistics(out, &state.store.statistics())?;
        }
        Commands::Export { output } => {
            let path = export_profiles(&state.store, &state.config.export_dir, output.as_deref())?;
            writeln!(out, "Datos exportados correctamente: {}", path.display())?;
        }
        Commands::DarkMode { state: toggle } => {
            let preferences = match toggle {
                Some(toggle) => state.preferences.set_dark_mode(toggle == Toggle::On)?,
                None => state.preferences.load()?,
            };
            let label = if preferences.dark_mode {
                "activado"
            } else {
                "desactivado"
            };
            writeln!(out, "Modo oscuro: {label}")?;
        }
        Commands::ClearCache => {
            reset_session(state)?;
            writeln!(out, "Caché limpiado correctamente")?;
        }
        Commands::Logout => {
            reset_session(state)?;
            writeln!(out, "Sesión cerrada exitosamente")?;
        }
    }
    Ok(())
}

fn reset_session(state: &AppState) -> CommandResult<()> {
    state.store.reset();
    state.preferences.clear()?;
    Ok(())
}

fn report_invalid(out: &mut impl Write, error: &ValidationError) {
    warn!(%error, "Profile form rejected");
    for field_error in error.field_errors() {
        // Best effort: the error itself is still returned to the caller.
        let _ = writeln!(out, "{:<10} {}", field_error.field, field_error.message);
    }
}

fn write_profile_row(out: &mut impl Write, profile: &Profile) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>14}  {:<8}  {} <{}> | {} | {}",
        profile.id,
        status_label(profile),
        profile.name,
        profile.email,
        profile.role,
        profile.department_label()
    )
}

fn write_profile_details(out: &mut impl Write, profile: &Profile) -> std::io::Result<()> {
    writeln!(out, "ID:           {}", profile.id)?;
    writeln!(out, "Nombre:       {}", profile.name)?;
    writeln!(out, "Email:        {}", profile.email)?;
    writeln!(out, "Cargo:        {}", profile.role)?;
    writeln!(out, "Departamento: {}", profile.department_label())?;
    writeln!(out, "Teléfono:     {}", profile.phone.as_deref().unwrap_or("-"))?;
    writeln!(out, "Estado:       {}", status_label(profile))?;
    writeln!(out, "Avatar:       {}", profile.avatar)
}

fn write_statistics(out: &mut impl Write, stats: &Statistics) -> std::io::Result<()> {
    writeln!(out, "Total:         {}", stats.total)?;
    writeln!(out, "Activos:       {}", stats.active)?;
    writeln!(out, "Inactivos:     {}", stats.inactive)?;
    writeln!(out, "Departamentos: {}", stats.departments)?;
    for stat in &stats.department_counts {
        writeln!(out, "  {:<16} {}", stat.department.label(), stat.count)?;
    }
    Ok(())
}

fn write_activities(out: &mut impl Write, activities: &[Activity]) -> std::io::Result<()> {
    writeln!(out, "Actividad reciente:")?;
    for activity in activities {
        writeln!(
            out,
            "  [{}] {}: {} ({})",
            activity.time, activity.title, activity.description, activity.icon
        )?;
    }
    Ok(())
}

fn status_label(profile: &Profile) -> &'static str {
    if profile.status.is_active() {
        "activo"
    } else {
        "inactivo"
    }
}
