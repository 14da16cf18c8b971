// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for a gallery card: a flat surface that lifts slightly on hover so
/// keyboard focus and pointer hover read the same way.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let base = palette_ext.background.weak.color;
    let hovered = palette_ext.background.strong.color;

    let (background, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (hovered, shadow::MD),
        _ => (base, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow,
        snap: true,
    }
}

/// Style for the overlay close control: quiet until hovered.
pub fn overlay_close(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ERROR_500,
        _ => palette_ext.background.base.text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
