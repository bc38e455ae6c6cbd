//! Configuration constants and profile loading for the playground client
//!
//! Profiles are stored in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! server = http://localhost:8000
//! page = https://jsonnet.dev/
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::PathBuf;

/// Default profile file path
pub const DEFAULT_PROFILE_PATH: &str = "~/.jsonnet-playground/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "PLAYGROUND_PROFILE_PATH";

/// Environment variable holding the log level for the binary
pub const LOG_LEVEL_ENV_VAR: &str = "PLAYGROUND_LOG_LEVEL";

/// Backend address used when no profile says otherwise
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

const SERVER_KEY: &str = "server";
const PAGE_KEY: &str = "page";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection settings for one named profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundProfile {
    server: String,
    page: Option<String>,
}

impl PlaygroundProfile {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            page: None,
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Base URL of the execution and snippet-store backend
    pub fn server(&self) -> &str {
        self.server.trim_end_matches('/')
    }

    /// Public page URL that shareable links are built on
    pub fn page(&self) -> &str {
        self.page.as_deref().unwrap_or(&self.server)
    }
}

impl Default for PlaygroundProfile {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}

/// Reads profiles out of an INI file
pub struct IniProfileStore {
    path: PathBuf,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path).into_owned()),
        }
    }

    /// Look up a profile by name. A missing file or section yields `None`.
    pub fn get_profile(&self, name: &str) -> Result<Option<PlaygroundProfile>> {
        if !self.path.exists() {
            tracing::debug!("Profile file {:?} does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("failed to read profile file {}", self.path.display()))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let mut profile = match section.get(SERVER_KEY) {
            Some(server) if !server.trim().is_empty() => PlaygroundProfile::new(server.trim()),
            _ => PlaygroundProfile::default(),
        };
        if let Some(page) = section.get(PAGE_KEY).filter(|p| !p.trim().is_empty()) {
            profile = profile.with_page(page.trim());
        }

        Ok(Some(profile))
    }
}
