use crate::account::StaticDirectory;
use crate::calendar::DisplayedMonth;
use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "UNWIND_";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happens to typed credentials and wizard answers on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPolicy {
    /// Keep everything, so signing back in resumes where the user left off.
    #[default]
    Preserve,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub session_policy: SessionPolicy,
    /// Answer given by the account directory for unknown users.
    pub new_users_by_default: bool,
    pub returning_emails: Vec<String>,
    /// Practiced days highlighted on the progress calendar.
    pub active_days: Vec<u32>,
    /// Month the progress calendar opens on; the current month when unset.
    pub start_month: Option<DisplayedMonth>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            session_policy: SessionPolicy::default(),
            new_users_by_default: true,
            returning_emails: Vec::new(),
            active_days: vec![18, 19, 20, 21, 26, 28],
            start_month: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the user config file, writing defaults first when there is
    /// no file yet.
    pub fn new() -> Result<Self, SettingsError> {
        Self::load_or_init(&Self::config_path())
    }

    /// Like [`Settings::new`] for an explicit path. An existing file is never
    /// rewritten here; if it or an `UNWIND_*` variable fails to parse, the
    /// defaults are used in memory only.
    pub fn load_or_init(path: &Path) -> Result<Self, SettingsError> {
        Self::load_or_init_with(path, ENV_PREFIX)
    }

    fn load_or_init_with(path: &Path, env_prefix: &str) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!(path = %path.display(), "writing default settings");
            Settings::default().save_to(path)?;
        }
        match Self::extract(path, env_prefix) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "using default settings for this run");
                Ok(Settings::default())
            }
        }
    }

    /// Defaults, then `path`, then `UNWIND_*` environment variables.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        Self::extract(path, ENV_PREFIX)
    }

    fn extract(path: &Path, env_prefix: &str) -> Result<Self, SettingsError> {
        let settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(env_prefix))
            .extract()
            .map_err(Box::new)?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, toml_string).map_err(write_err)
    }

    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Directory for the log file.
    pub fn log_dir() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn active_day_set(&self) -> BTreeSet<u32> {
        self.active_days.iter().copied().collect()
    }

    pub fn initial_month(&self) -> DisplayedMonth {
        self.start_month.unwrap_or_else(DisplayedMonth::today)
    }

    pub fn account_directory(&self) -> StaticDirectory {
        StaticDirectory::new(self.new_users_by_default, &self.returning_emails)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "unwindyoga", "unwind")
}
