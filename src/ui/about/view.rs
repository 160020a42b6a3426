// SPDX-License-Identifier: MPL-2.0
//! View rendering for the about section.

use super::profile::Profile;
use super::{AboutTab, Message, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, progress_bar, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
}

/// Render the about section.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);
    let approach_card = build_approach_card(&ctx);
    let tab_panel = build_tab_panel(state, &ctx);

    let columns = Row::new()
        .spacing(spacing::LG)
        .push(approach_card)
        .push(tab_panel);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(header)
            .push(columns),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badge = Container::new(Text::new(ctx.i18n.tr("about-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("about-subtitle")).size(typography::BODY_LG))
        .into()
}

/// Left column: approach text, headline stats, and the resume export button.
fn build_approach_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let stats = Row::new()
        .spacing(spacing::MD)
        .push(build_stat(
            format!("{}+", ctx.profile.years_experience),
            ctx.i18n.tr("about-stat-years"),
        ))
        .push(build_stat(
            format!("{}+", ctx.profile.projects_completed),
            ctx.i18n.tr("about-stat-projects"),
        ));

    let export_button = button(Text::new(ctx.i18n.tr("about-download-resume")))
        .on_press(Message::ExportResume)
        .style(styles::button::primary)
        .width(Length::Fill);

    let card = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("about-approach-title")).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr("about-approach-body")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("about-approach-body-2")).size(typography::BODY))
        .push(stats)
        .push(export_button);

    Container::new(card)
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(styles::container::card)
        .into()
}

fn build_stat<'a>(value: String, label: String) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(value).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::BODY_SM))
        .into()
}

/// Right column: the tab strip and the active tab's content.
///
/// Only the active tab's content is constructed; inactive panels cost
/// nothing.
fn build_tab_panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::SM);
    for tab in AboutTab::ALL {
        let label = Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY);
        let styled = if tab == state.active_tab() {
            button(label).style(styles::button::selected)
        } else {
            button(label).style(styles::button::unselected)
        };
        strip = strip.push(styled.on_press(Message::TabSelected(tab)));
    }

    let content = match state.active_tab() {
        AboutTab::Skills => build_skills(ctx),
        AboutTab::Experience => build_experience(ctx),
        AboutTab::Education => build_education(ctx),
    };

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(strip)
            .push(content),
    )
    .padding(spacing::LG)
    .width(Length::FillPortion(1))
    .style(styles::container::card)
    .into()
}

fn build_skills<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);
    for skill in &ctx.profile.skills {
        let label_row = Row::new()
            .push(Text::new(skill.name.as_str()).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(Text::new(format!("{}%", skill.level.value())).size(typography::BODY_SM));

        column = column
            .push(label_row)
            .push(progress_bar(0.0..=1.0, skill.level.fraction()));
    }
    column.into()
}

fn build_experience<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);
    for exp in &ctx.profile.experiences {
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(exp.title.as_str()).size(typography::TITLE_SM))
                .push(Text::new(exp.company.as_str()).size(typography::BODY))
                .push(Text::new(exp.period.as_str()).size(typography::BODY_SM))
                .push(Text::new(exp.description.as_str()).size(typography::BODY)),
        );
    }
    column.into()
}

fn build_education<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);
    for edu in &ctx.profile.education {
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(edu.degree.as_str()).size(typography::TITLE_SM))
                .push(Text::new(edu.school.as_str()).size(typography::BODY))
                .push(Text::new(edu.period.as_str()).size(typography::BODY_SM)),
        );
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn about_view_renders_every_tab() {
        let i18n = I18n::default();
        let profile = Profile::builtin();
        let mut state = State::new();

        for tab in AboutTab::ALL {
            state.activate(tab);
            let _element = view(
                &state,
                ViewContext {
                    i18n: &i18n,
                    profile: &profile,
                },
            );
        }
    }
}
