// SPDX-License-Identifier: MPL-2.0
//! View rendering for the contact form.

use super::{Field, Message, State, Status};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Contact lines shown next to the form (location, availability, email).
    pub location: &'a str,
    pub email: &'a str,
}

/// Render the contact section.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);

    let body: Element<'_, Message> = match state.status() {
        Status::Submitted => build_success_panel(&ctx),
        Status::Idle | Status::Submitting => build_form(state, &ctx),
    };

    let aside = build_aside(&ctx);

    let card = Container::new(body)
        .padding(spacing::LG)
        .width(Length::FillPortion(3))
        .style(styles::container::card);

    let columns = Row::new()
        .spacing(spacing::LG)
        .push(card)
        .push(aside);

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
    let badge = Container::new(Text::new(ctx.i18n.tr("contact-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("contact-subtitle")).size(typography::BODY_LG))
        .into()
}

fn build_form<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submitting = state.status() == Status::Submitting;

    let mut column = Column::new().spacing(spacing::SM);
    for field in Field::ALL {
        column = column.push(build_field(state, ctx, field, submitting));
    }

    let submit_label = if submitting {
        ctx.i18n.tr("contact-submit-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };

    let submit_button = if submitting {
        // Submission in flight: no on_press, so the button renders disabled
        button(Text::new(submit_label)).style(styles::button::disabled())
    } else {
        button(Text::new(submit_label))
            .on_press(Message::SubmitPressed)
            .style(styles::button::primary)
    };

    column.push(submit_button.width(Length::Fill)).into()
}

fn build_field<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    field: Field,
    submitting: bool,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(field.label_key())).size(typography::BODY_SM);

    let placeholder = ctx.i18n.tr(field.placeholder_key());
    let mut input = text_input(&placeholder, state.draft().get(field));
    if !submitting {
        input = input.on_input(move |value| Message::FieldEdited(field, value));
    }

    let mut column = Column::new().spacing(spacing::XXS).push(label).push(input);

    // Inline feedback from the last rejected submit
    if state.is_missing(field) {
        column = column.push(
            Text::new(ctx.i18n.tr("contact-field-required"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

fn build_success_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("contact-success-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("contact-success-body")).size(typography::BODY))
        .into()
}

fn build_aside<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("contact-location-title")).size(typography::TITLE_SM))
        .push(Text::new(ctx.location).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("contact-availability")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("contact-hours")).size(typography::BODY))
        .push(Text::new(ctx.email).size(typography::BODY));

    Container::new(card)
        .padding(spacing::LG)
        .width(Length::FillPortion(2))
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    fn ctx(i18n: &I18n) -> ViewContext<'_> {
        ViewContext {
            i18n,
            location: "San Francisco, California",
            email: "rahul.tiwari@example.com",
        }
    }

    #[test]
    fn contact_view_renders_idle_form() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(&state, ctx(&i18n));
    }

    #[test]
    fn contact_view_renders_validation_errors() {
        let i18n = I18n::default();
        let mut state = State::new();
        assert!(state.submit().is_none());
        let _element = view(&state, ctx(&i18n));
    }

    #[test]
    fn contact_view_renders_success_panel() {
        let i18n = I18n::default();
        let mut state = State::new();
        for field in Field::ALL {
            state.edit(field, "x".to_string());
        }
        let generation = state.submit().expect("submit accepted");
        state.complete_submission(generation).expect("completes");

        let _element = view(&state, ctx(&i18n));
    }
}
