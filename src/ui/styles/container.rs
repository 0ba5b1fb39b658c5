// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Card surface used for the upload, results, examples and about sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(with_alpha(base, opacity::SURFACE))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Inset block inside a card (bullet lists, prediction breakdown).
pub fn inset(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(with_alpha(base, opacity::OVERLAY_MEDIUM))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tinted block using an accent color (success, warning, brand).
pub fn accent(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(color, 0.1))),
        border: Border {
            color: with_alpha(color, 0.3),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(color),
        ..Default::default()
    }
}

/// Drop zone frame; highlighted while a file hovers over the window.
pub fn drop_zone(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let (border_color, fill) = if hovering {
            (palette::PRIMARY_400, with_alpha(palette::PRIMARY_500, 0.1))
        } else {
            (palette.background.strong.color, Color::TRANSPARENT)
        };
        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Frame around the uploaded image preview.
pub fn preview_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.strong.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Veil drawn over the preview while a scan is running.
pub fn scanning_veil(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(with_alpha(base, opacity::OVERLAY_MEDIUM))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header and footer bars.
pub fn bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette.background.weak.color,
            opacity::OVERLAY_MEDIUM,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Round initials badge used for team members.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(palette::PRIMARY_500, 0.2))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::PRIMARY_400),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_tints_with_given_color() {
        let style = accent(palette::WARNING_500)(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::WARNING_500));
        assert_eq!(style.border.color.r, palette::WARNING_500.r);
    }

    #[test]
    fn drop_zone_highlights_while_hovering() {
        let idle = drop_zone(false)(&Theme::Dark);
        let hovering = drop_zone(true)(&Theme::Dark);
        assert_ne!(idle.border.color, hovering.border.color);
        assert_eq!(hovering.border.color, palette::PRIMARY_400);
    }
}
