// SPDX-License-Identifier: MPL-2.0
//! View rendering for the project gallery.

use super::{Message, State};
use crate::catalog::{visible_projects, Catalog, CategoryFilter, Project};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, rule::horizontal as horizontal_rule, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};

/// Number of cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
}

/// Render the gallery section.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);
    let filter_row = build_filter_row(state, &ctx);
    let grid = build_grid(state, &ctx);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(header)
        .push(filter_row)
        .push(grid);

    let base = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL);

    // The detail view floats above the grid when a project is selected
    if let Some(project) = state.selection().and_then(|id| ctx.catalog.get(id)) {
        Stack::new()
            .push(base)
            .push(build_detail_overlay(project, &ctx))
            .into()
    } else {
        base.into()
    }
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badge = Container::new(Text::new(ctx.i18n.tr("gallery-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip);

    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("gallery-subtitle")).size(typography::BODY_LG);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(title)
        .push(subtitle)
        .into()
}

/// One pill button per category, plus the leading "All" pill.
fn build_filter_row<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    let all_active = !state.filter().is_active();
    row = row.push(filter_pill(
        ctx.i18n.tr("gallery-filter-all"),
        all_active,
        Message::ShowAll,
    ));

    for category in ctx.catalog.categories().iter() {
        let active = state.filter() == &CategoryFilter::Only(category.clone());
        row = row.push(filter_pill(
            category.name().to_string(),
            active,
            Message::FilterSelected(category.clone()),
        ));
    }

    row.into()
}

fn filter_pill<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let styled = if active {
        button(Text::new(label).size(typography::BODY)).style(styles::button::selected)
    } else {
        button(Text::new(label).size(typography::BODY)).style(styles::button::unselected)
    };

    styled
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

/// Card grid for the currently visible projects, in catalog order.
fn build_grid<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible = visible_projects(ctx.catalog.projects(), state.filter());

    if visible.is_empty() {
        return Container::new(
            Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG),
        )
        .padding(spacing::XL)
        .into();
    }

    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    for chunk in visible.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
        for &project in chunk {
            row = row.push(build_card(project));
        }
        // Pad the last row so cards keep their width
        for _ in chunk.len()..GRID_COLUMNS {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn build_card(project: &Project) -> Element<'_, Message> {
    let category_chip = Container::new(
        Text::new(project.category().name()).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::chip);

    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in project.tags() {
        tags = tags.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([2.0, spacing::XXS])
                .style(styles::container::chip),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(category_chip)
        .push(Text::new(project.title()).size(typography::TITLE_MD))
        .push(Text::new(project.summary()).size(typography::BODY))
        .push(tags);

    let card = Container::new(body)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(styles::container::card);

    button(card)
        .on_press(Message::ProjectPressed(project.id()))
        .style(styles::button::text_link)
        .width(Length::FillPortion(1))
        .into()
}

/// Centered detail panel over a dimmed backdrop.
fn build_detail_overlay<'a>(project: &'a Project, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in project.tags() {
        tags = tags.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::chip),
        );
    }

    let close_button = button(Text::new(ctx.i18n.tr("gallery-close-button")))
        .on_press(Message::CloseDetail)
        .style(styles::button::text_link);

    let case_study_button = button(Text::new(ctx.i18n.tr("gallery-case-study-button")))
        .on_press(Message::CaseStudyPressed(project.id()))
        .style(styles::button::primary);

    let footer = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(close_button)
        .push(case_study_button);

    let panel = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(project.title()).size(typography::TITLE_MD))
        .push(Text::new(project.category().name()).size(typography::BODY_SM))
        .push(tags)
        .push(horizontal_rule(1))
        .push(Text::new(ctx.i18n.tr("gallery-detail-overview")).size(typography::TITLE_SM))
        .push(Text::new(project.detail()).size(typography::BODY))
        .push(footer);

    let dialog = Container::new(panel)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.75)
        .style(styles::container::panel);

    Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::modal_backdrop)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::catalog::ProjectId;
    use crate::i18n::I18n;

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let catalog = catalog::builtin();
        let state = State::new();
        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                catalog: &catalog,
            },
        );
    }

    #[test]
    fn gallery_view_renders_with_detail_open() {
        let i18n = I18n::default();
        let catalog = catalog::builtin();
        let mut state = State::new();
        state.open(&catalog, ProjectId::new(1));

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                catalog: &catalog,
            },
        );
    }

    #[test]
    fn gallery_view_renders_empty_grid() {
        let i18n = I18n::default();
        let catalog = catalog::builtin();
        let mut state = State::new();
        state.set_filter(CategoryFilter::Only(crate::catalog::Category::new(
            "Sculpture",
        )));

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                catalog: &catalog,
            },
        );
    }
}
