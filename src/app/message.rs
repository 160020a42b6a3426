// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::contact;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::scene::SceneModel;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    About(about::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// The decorative scene finished building off the update loop.
    SceneBuilt { generation: u64, model: SceneModel },
    /// Result from the resume export Save As dialog.
    ResumeExportDialogResult(Option<PathBuf>),
    /// Periodic tick for scene animation and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
