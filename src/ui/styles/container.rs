// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for cards and section panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Elevated card surface with a border and a soft shadow.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed backdrop behind the project detail overlay.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Pill-shaped chip for tags and category badges.
pub fn chip(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(palette_ext.primary.weak.color.into()),
        text_color: Some(palette_ext.primary.strong.color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top navigation bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_background_follows_theme() {
        let light = panel(&Theme::Light);
        let dark = panel(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn modal_backdrop_is_translucent_black() {
        let style = modal_backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a < 1.0);
                assert_eq!(color.r, 0.0);
            }
            other => panic!("expected a color background, got {:?}", other),
        }
    }
}
