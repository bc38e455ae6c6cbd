//! # Application Controller
//!
//! Drives one command-line invocation: picks the editor handle and page
//! location for the requested command, mounts it on a session controller,
//! triggers run or share, waits for the session to settle and renders it.

use anyhow::Result;

use crate::cmd_args::{CommandLineArgs, SessionCommand};
use crate::config::{self, IniProfileStore, PlaygroundProfile};
use crate::playground::controllers::SessionController;
use crate::playground::deep_link::Location;
use crate::playground::editor::{FileBuffer, MemoryBuffer};
use crate::playground::services::Services;
use crate::playground::views::SessionView;

/// The application controller wiring a session to a view
pub struct AppController<V: SessionView> {
    session: SessionController,
    view: V,
    command: SessionCommand,
}

impl<V: SessionView> AppController<V> {
    /// Create a controller talking to the backend of the configured profile
    pub fn new(cmd_args: &CommandLineArgs, view: V) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        let profile = Self::load_profile(profile_name, &profile_path)?;
        let services = Services::from_profile(&profile)?;

        Ok(Self::with_services(cmd_args.command().clone(), &profile, services, view))
    }

    /// Create a controller with injected services (dependency injection)
    pub fn with_services(
        command: SessionCommand,
        profile: &PlaygroundProfile,
        services: Services,
        view: V,
    ) -> Self {
        let location = match &command {
            SessionCommand::Open { link, .. } => Location::new(link.as_str()),
            SessionCommand::Run { .. } | SessionCommand::Share { .. } => {
                Location::new(profile.page())
            }
        };

        Self {
            session: SessionController::new(services, location),
            view,
            command,
        }
    }

    /// Load profile from INI file or return the default profile if not found
    fn load_profile(profile_name: &str, profile_path: &str) -> Result<PlaygroundProfile> {
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

        let profile = match IniProfileStore::new(profile_path).get_profile(profile_name)? {
            Some(p) => {
                tracing::debug!("Profile loaded successfully, server: {}", p.server());
                p
            }
            None => {
                tracing::debug!("Profile '{}' not found, using default profile", profile_name);
                PlaygroundProfile::default()
            }
        };

        Ok(profile)
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Execute the command and render the settled session.
    ///
    /// Returns `false` when the session ends up showing an error.
    pub async fn run(&mut self) -> Result<bool> {
        match self.command.clone() {
            SessionCommand::Run { file } => {
                self.session.mount(Box::new(FileBuffer::new(file))).await?;
                self.session.run()?;
            }
            SessionCommand::Share { file } => {
                self.session.mount(Box::new(FileBuffer::new(file))).await?;
                self.session.share()?;
            }
            SessionCommand::Open { into: Some(file), .. } => {
                self.session.mount(Box::new(FileBuffer::new(file))).await?;
            }
            SessionCommand::Open { link, into: None } => {
                let buffer = MemoryBuffer::new("");
                self.session.mount(Box::new(buffer.clone())).await?;
                if let Some(identifier) = self.session.location().deep_link() {
                    let contents = buffer.contents();
                    if !contents.is_empty() {
                        self.view.render_loaded(&identifier, &contents)?;
                    }
                } else {
                    tracing::warn!("Link {link} carries no snippet identifier");
                }
            }
        }

        self.session.settle().await;

        let snapshot = self.session.snapshot();
        self.view.render(&snapshot)?;
        Ok(snapshot.error.is_empty())
    }
}
