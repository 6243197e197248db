use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::constants::{LETTER_BORDER_RADIUS, OPEN_BUTTON_BORDER_RADIUS};
use crate::theme::ScenePalette;

/// The white letter card. `alpha` scales the whole card's opacity so the
/// opened letter can fade in.
pub fn letter_card_style(
    palette: ScenePalette,
    alpha: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: palette.letter_background.a * alpha,
            ..palette.letter_background
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette.letter_text
        }),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: LETTER_BORDER_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.2 * alpha,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 15.0,
        },
        ..Default::default()
    }
}

/// The blush "Open Letter" pill button.
pub fn open_button_style(
    palette: ScenePalette,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(if hovered {
                Color {
                    a: 1.0,
                    ..palette.blush
                }
            } else {
                Color {
                    a: 0.9,
                    ..palette.blush
                }
            })),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: OPEN_BUTTON_BORDER_RADIUS.into(),
            },
            text_color: palette.letter_text,
            ..Default::default()
        }
    }
}
