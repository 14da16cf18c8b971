// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the filter bar and gallery, layering the detail overlay on top
//! when it is open.

use super::Message;
use crate::daterange;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::modal;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub date_range: &'a daterange::State,
    pub gallery: &'a gallery::State,
    pub modal: &'a modal::State,
}

/// Renders the full window: filter bar, gallery, and (when open) the detail
/// overlay stacked above both.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Column::new()
        .push(filter_bar(ctx.date_range))
        .push(ctx.gallery.view().map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.modal.view() {
        Some(overlay) => Stack::new()
            .push(base)
            .push(overlay.map(Message::Modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}

/// The date inputs and the "Get images" action control.
fn filter_bar(date_range: &daterange::State) -> Element<'_, Message> {
    let start_input = text_input("YYYY-MM-DD", date_range.start_input())
        .on_input(|value| Message::DateRange(daterange::Message::StartEdited(value)))
        .on_submit(Message::DateRange(daterange::Message::StartCommitted))
        .size(typography::BODY)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::DATE_INPUT_WIDTH));

    let end_input = text_input("YYYY-MM-DD", date_range.end_input())
        .on_input(|value| Message::DateRange(daterange::Message::EndEdited(value)))
        .on_submit(Message::DateRange(daterange::Message::EndCommitted))
        .size(typography::BODY)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::DATE_INPUT_WIDTH));

    let fetch_button = button(text("Get images").size(typography::BODY))
        .on_press(Message::GetImagesPressed)
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text("From").size(typography::BODY))
        .push(start_input)
        .push(text("to").size(typography::BODY))
        .push(end_input)
        .push(fetch_button);

    Container::new(bar)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
