// SPDX-License-Identifier: MPL-2.0
//! Cross-module integration tests: configuration, localization, and the
//! catalog-driven filter surface.

use iced_folio::app::config::{self, Config};
use iced_folio::catalog::{self, Category, CategoryFilter};
use iced_folio::i18n::I18n;
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn theme_mode_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
}

#[test]
fn every_ui_locale_resolves_core_keys() {
    let core_keys = [
        "window-title",
        "nav-home",
        "gallery-title",
        "about-title",
        "contact-title",
        "contact-field-required",
        "notification-export-success",
    ];

    let mut i18n = I18n::default();
    let locales: Vec<_> = i18n.available_locales.clone();
    assert!(!locales.is_empty(), "at least one locale must be embedded");

    for locale in locales {
        i18n.set_locale(locale.clone());
        for key in core_keys {
            let value = i18n.tr(key);
            assert!(
                !value.starts_with("MISSING:"),
                "key {key} missing for locale {locale}"
            );
        }
    }
}

#[test]
fn filter_surface_is_closed_over_the_catalog() {
    let catalog = catalog::builtin();

    // The "All" filter reproduces the catalog exactly, in order
    let all = catalog::visible_projects(catalog.projects(), &CategoryFilter::All);
    assert_eq!(all.len(), catalog.len());
    for (visible, project) in all.iter().zip(catalog.projects()) {
        assert_eq!(visible.id(), project.id());
    }

    // Every derived category filter produces a non-empty, homogeneous subset
    for category in catalog.categories().iter() {
        let filter = CategoryFilter::Only(category.clone());
        let visible = catalog::visible_projects(catalog.projects(), &filter);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category() == category));
    }

    // A category outside the derived set matches nothing but does not fail
    let stray = CategoryFilter::Only(Category::new("Sculpture"));
    assert!(catalog::visible_projects(catalog.projects(), &stray).is_empty());
}
