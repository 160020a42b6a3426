// SPDX-License-Identifier: MPL-2.0
//! Landing (hero) section.
//!
//! Shows the introduction, the two calls to action, and the decorative
//! wireframe scene behind its deferred-mount gate. Until the scene is built,
//! a placeholder with the exact same bounds keeps the layout stable.

use crate::i18n::I18n;
use crate::ui::about::Profile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scene::{canvas::SceneCanvas, DeferredScene};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the hero section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub scene: &'a DeferredScene,
}

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    ViewWorkPressed,
    GetInTouchPressed,
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let badge = Container::new(Text::new(ctx.profile.tagline.as_str()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip);

    let intro = Column::new()
        .spacing(spacing::MD)
        .push(badge)
        .push(Text::new(ctx.profile.name.as_str()).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("hero-pitch")).size(typography::BODY_LG))
        .push(build_actions(&ctx));

    let row = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(intro)
        .push(build_scene(&ctx));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

fn build_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let view_work = button(Text::new(ctx.i18n.tr("hero-view-work")))
        .on_press(Message::ViewWorkPressed)
        .style(styles::button::primary);

    let get_in_touch = button(Text::new(ctx.i18n.tr("hero-get-in-touch")))
        .on_press(Message::GetInTouchPressed)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::SM)
        .push(view_work)
        .push(get_in_touch)
        .into()
}

/// The decorative scene, or its placeholder while the build is deferred.
///
/// Both branches occupy identical bounds so the swap causes no layout shift.
fn build_scene<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.scene.is_ready() {
        SceneCanvas::new(ctx.scene).into_element()
    } else {
        Container::new(iced::widget::Space::new())
            .width(Length::Fixed(sizing::SCENE_WIDTH))
            .height(Length::Fixed(sizing::SCENE_HEIGHT))
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;
    use crate::ui::scene::SceneModel;

    #[test]
    fn hero_view_renders_with_placeholder() {
        let i18n = I18n::default();
        let profile = Profile::builtin();
        let scene = DeferredScene::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
            scene: &scene,
        });
    }

    #[test]
    fn hero_view_renders_with_ready_scene() {
        let i18n = I18n::default();
        let profile = Profile::builtin();
        let mut scene = DeferredScene::new();
        let generation = scene.request_build().expect("build scheduled");
        scene.on_built(generation, SceneModel::build());

        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
            scene: &scene,
        });
    }
}
