// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows one link per section, the theme switch, and a compact
//! overflow menu that mirrors the links for narrow windows.

use crate::app::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_section: Section,
    pub menu_open: bool,
    /// Whether the effective theme is currently dark (drives the switch label).
    pub dark_mode: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SectionPressed(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    NavigateTo(Section),
    ThemeToggled,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SectionPressed(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ThemeToggled
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Overflow menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the brand mark, section links, and theme switch.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("app-brand")).size(typography::TITLE_MD);

    let mut links = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    for section in Section::ALL {
        let label = Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY);
        let link = if section == ctx.active_section {
            button(label).style(styles::button::selected)
        } else {
            button(label).style(styles::button::text_link)
        };
        links = links.push(link.on_press(Message::SectionPressed(section)));
    }

    let theme_label = if ctx.dark_mode {
        ctx.i18n.tr("theme-switch-to-light")
    } else {
        ctx.i18n.tr("theme-switch-to-dark")
    };
    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .style(styles::button::unselected);

    let menu_button = button(Text::new("\u{2630}").size(typography::BODY_LG))
        .on_press(Message::ToggleMenu)
        .style(styles::button::text_link)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(theme_button)
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Build the overflow menu mirroring the section links.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        menu_column = menu_column.push(build_menu_item(
            ctx.i18n.tr(section.label_key()),
            Message::SectionPressed(section),
        ));
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active_section: Section::Home,
            menu_open: false,
            dark_mode: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active_section: Section::Portfolio,
            menu_open: true,
            dark_mode: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn section_press_closes_menu_and_emits_event() {
        let mut menu_open = true;

        let event = update(Message::SectionPressed(Section::Contact), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::NavigateTo(Section::Contact)));
    }

    #[test]
    fn theme_toggle_closes_menu_and_emits_event() {
        let mut menu_open = true;

        let event = update(Message::ToggleTheme, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::ThemeToggled));
    }
}
