// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains all specialized message handlers for different parts
//! of the application. `App::update` dispatches here; every handler receives
//! the same [`UpdateContext`] of mutable borrows into the app state.

use super::{config, persisted_state, Message, Section};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::ui::about::{self, Event as AboutEvent, Profile};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::footer;
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::hero;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::scene::{DeferredScene, SceneModel};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub section: &'a mut Section,
    pub catalog: &'a Catalog,
    pub profile: &'a Profile,
    pub gallery: &'a mut gallery::State,
    pub about: &'a mut about::State,
    pub contact: &'a mut contact::State,
    pub scene: &'a mut DeferredScene,
    pub scene_enabled: bool,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub app_state: &'a mut persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Switches the visible section, driving the scene gate along with it.
///
/// Entering Home arms the deferred build; leaving Home retires the scene so
/// an in-flight build cannot land on a section that no longer shows it.
pub fn switch_section(ctx: &mut UpdateContext<'_>, target: Section) -> Task<Message> {
    if *ctx.section == target {
        return Task::none();
    }

    let leaving_home = *ctx.section == Section::Home;
    *ctx.section = target;

    if leaving_home {
        ctx.scene.retire();
    }

    if target == Section::Home {
        schedule_scene_build(ctx)
    } else {
        Task::none()
    }
}

/// Arms the deferred scene gate and spawns the build task if it was dormant.
pub fn schedule_scene_build(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.scene_enabled {
        return Task::none();
    }

    match ctx.scene.request_build() {
        Some(generation) => Task::perform(async move { SceneModel::build() }, move |model| {
            Message::SceneBuilt { generation, model }
        }),
        None => Task::none(),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::NavigateTo(section) => switch_section(ctx, section),
        NavbarEvent::ThemeToggled => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            persist_theme_mode(ctx);
            Task::none()
        }
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match message {
        hero::Message::ViewWorkPressed => switch_section(ctx, Section::Portfolio),
        hero::Message::GetInTouchPressed => switch_section(ctx, Section::Contact),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(ctx.gallery, ctx.catalog, message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::CaseStudyRequested(id) => {
            // No case study pages exist; record the interest
            if let Some(project) = ctx.catalog.get(id) {
                log::info!("case study requested: {}", project.title());
            }
            Task::none()
        }
    }
}

pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: about::Message,
) -> Task<Message> {
    match about::update(ctx.about, message) {
        AboutEvent::None => Task::none(),
        AboutEvent::ExportResumeRequested => open_resume_export_dialog(ctx),
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(ctx.contact, message) {
        ContactEvent::None => Task::none(),
        ContactEvent::SubmissionStarted(generation) => Task::perform(
            tokio::time::sleep(contact::SUBMIT_LATENCY),
            move |()| Message::Contact(contact::Message::SubmissionCompleted(generation)),
        ),
        ContactEvent::SubmissionFinished { generation, draft } => {
            // The simulated transport's only observable effect
            log::info!(
                "contact form submitted: name={:?} email={:?} subject={:?} message={:?}",
                draft.name,
                draft.email,
                draft.subject,
                draft.message
            );
            Task::perform(
                tokio::time::sleep(contact::SUBMITTED_LINGER),
                move |()| Message::Contact(contact::Message::SubmittedCleared(generation)),
            )
        }
    }
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match message {
        footer::Message::SectionPressed(section) => switch_section(ctx, section),
    }
}

/// Opens the Save As dialog for the resume export.
fn open_resume_export_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Export Resume")
        .add_filter("Markdown", &["md"])
        .set_file_name("resume.md");

    // Set initial directory from app state
    if let Some(dir) = ctx.app_state.last_export_directory.as_ref() {
        dialog = dialog.set_directory(dir);
    }

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ResumeExportDialogResult,
    )
}

/// Writes the rendered resume to the chosen path and remembers the directory.
pub fn handle_resume_export_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    match write_resume(ctx.profile, &path) {
        Ok(()) => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-export-success",
                ));

            // Remember the export directory for next time
            ctx.app_state.set_last_export_directory_from_file(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications
                    .push(notifications::Notification::warning(&key));
            }
        }
        Err(err) => {
            log::warn!("resume export to {} failed: {err}", path.display());
            ctx.notifications.push(notifications::Notification::error(
                "notification-export-error",
            ));
        }
    }

    Task::none()
}

/// Renders the resume and writes it to `path`.
fn write_resume(profile: &Profile, path: &std::path::Path) -> Result<()> {
    std::fs::write(path, profile.resume_markdown())
        .map_err(|err| Error::Export(err.to_string()))
}

/// Saves the toggled theme mode to `settings.toml`.
fn persist_theme_mode(ctx: &mut UpdateContext<'_>) {
    let (mut config, _) = config::load();
    config.general.theme_mode = *ctx.theme_mode;
    if config::save(&config).is_err() {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}
