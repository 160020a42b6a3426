// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the domains (catalog, profile,
//! localization) and translates messages into side effects like config
//! persistence, timer scheduling, or the deferred scene build. This file
//! intentionally keeps policy decisions (window sizing, persistence format,
//! theme resolution) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::catalog::{self, Catalog};
use crate::i18n::I18n;
use crate::ui::about::{self, Profile};
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::scene::DeferredScene;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    section: Section,
    catalog: Catalog,
    profile: Profile,
    gallery: gallery::State,
    about: about::State,
    contact: contact::State,
    scene: DeferredScene,
    theme_mode: ThemeMode,
    /// Whether the decorative scene may be mounted at all.
    scene_enabled: bool,
    /// Halves animation speed when set.
    reduced_motion: bool,
    /// Whether the navbar overflow menu is open.
    menu_open: bool,
    /// Previous tick instant, for animation deltas.
    last_tick: Option<Instant>,
    /// Persisted application state (last export directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("scene_ready", &self.scene.is_ready())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            section: Section::Home,
            catalog: catalog::builtin(),
            profile: Profile::builtin(),
            gallery: gallery::State::new(),
            about: about::State::new(),
            contact: contact::State::new(),
            scene: DeferredScene::new(),
            theme_mode: ThemeMode::System,
            scene_enabled: true,
            reduced_motion: false,
            menu_open: false,
            last_tick: None,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and arms the
    /// deferred scene build for the landing section.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.scene_enabled = config.scene_enabled();
        app.reduced_motion = config.reduced_motion();

        // Load application state (last export directory, etc.)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // The landing section is visible immediately, so arm the scene gate
        // now; the meshes are still built off the update loop.
        let task = {
            let mut ctx = app.update_context();
            update::schedule_scene_build(&mut ctx)
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let section = self.i18n.tr(self.section.label_key());
        format!("{section} - {app_name}")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let scene_animating = self.section == Section::Home && self.scene.is_ready();
        subscription::create_tick_subscription(
            scene_animating,
            self.notifications.has_notifications(),
        )
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            section: &mut self.section,
            catalog: &self.catalog,
            profile: &self.profile,
            gallery: &mut self.gallery,
            about: &mut self.about,
            contact: &mut self.contact,
            scene: &mut self.scene,
            scene_enabled: self.scene_enabled,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                let mut ctx = self.update_context();
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => {
                let mut ctx = self.update_context();
                update::handle_hero_message(&mut ctx, hero_message)
            }
            Message::Gallery(gallery_message) => {
                let mut ctx = self.update_context();
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::About(about_message) => {
                let mut ctx = self.update_context();
                update::handle_about_message(&mut ctx, about_message)
            }
            Message::Contact(contact_message) => {
                let mut ctx = self.update_context();
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Footer(footer_message) => {
                let mut ctx = self.update_context();
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SceneBuilt { generation, model } => {
                self.scene.on_built(generation, model);
                Task::none()
            }
            Message::ResumeExportDialogResult(path) => {
                let mut ctx = self.update_context();
                update::handle_resume_export_result(&mut ctx, path)
            }
            Message::Tick(now) => {
                let delta_secs = self
                    .last_tick
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_tick = Some(now);

                let motion_factor = if self.reduced_motion { 0.5 } else { 1.0 };
                self.scene.tick(delta_secs * motion_factor);

                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            section: self.section,
            catalog: &self.catalog,
            profile: &self.profile,
            gallery: &self.gallery,
            about: &self.about,
            contact: &self.contact,
            scene: &self.scene,
            menu_open: self.menu_open,
            dark_mode: self.theme_mode.is_dark(),
            notifications: &self.notifications,
        })
    }
}
