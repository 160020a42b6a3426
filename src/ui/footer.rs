// SPDX-License-Identifier: MPL-2.0
//! Footer with quick links and the copyright line.

use crate::app::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub owner_name: &'a str,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    SectionPressed(Section),
}

/// Render the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let blurb = Text::new(ctx.i18n.tr("footer-blurb")).size(typography::BODY_SM);

    let mut links = Row::new().spacing(spacing::SM);
    for section in Section::ALL {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY_SM))
                .on_press(Message::SectionPressed(section))
                .style(styles::button::text_link),
        );
    }

    let year = chrono::Local::now().year();
    let copyright = Text::new(format!(
        "© {} {}. {}",
        year,
        ctx.owner_name,
        ctx.i18n.tr("footer-rights")
    ))
    .size(typography::CAPTION);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(blurb)
            .push(links)
            .push(copyright),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            owner_name: "Rahul Tiwari",
        });
    }
}
