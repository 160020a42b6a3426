// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current section
//! based on application state.

use super::{Message, Section};
use crate::catalog::Catalog;
use crate::i18n::I18n;
use crate::ui::about::{self, Profile, ViewContext as AboutViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::scene::DeferredScene;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub section: Section,
    pub catalog: &'a Catalog,
    pub profile: &'a Profile,
    pub gallery: &'a gallery::State,
    pub about: &'a about::State,
    pub contact: &'a contact::State,
    pub scene: &'a DeferredScene,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_section: ctx.section,
        menu_open: ctx.menu_open,
        dark_mode: ctx.dark_mode,
    })
    .map(Message::Navbar);

    let section_view: Element<'_, Message> = match ctx.section {
        Section::Home => view_home(&ctx),
        Section::Portfolio => view_portfolio(&ctx),
        Section::About => view_about(&ctx),
        Section::Contact => view_contact(&ctx),
    };

    let footer_view = footer::view(FooterViewContext {
        i18n: ctx.i18n,
        owner_name: &ctx.profile.name,
    })
    .map(Message::Footer);

    let page = Column::new()
        .push(navbar_view)
        .push(scrollable(
            Column::new().push(section_view).push(footer_view),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill);

    // Toasts float above everything
    if ctx.notifications.has_notifications() {
        let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        Stack::new().push(base).push(overlay).into()
    } else {
        base.into()
    }
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    hero::view(HeroViewContext {
        i18n: ctx.i18n,
        profile: ctx.profile,
        scene: ctx.scene,
    })
    .map(Message::Hero)
}

fn view_portfolio<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    gallery::view(
        ctx.gallery,
        GalleryViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
        },
    )
    .map(Message::Gallery)
}

fn view_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    about::view(
        ctx.about,
        AboutViewContext {
            i18n: ctx.i18n,
            profile: ctx.profile,
        },
    )
    .map(Message::About)
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    contact::view(
        ctx.contact,
        ContactViewContext {
            i18n: ctx.i18n,
            location: &ctx.profile.location,
            email: &ctx.profile.email,
        },
    )
    .map(Message::Contact)
}
