//! Colours, fonts and styles for the Ask widget
//! The widget itself is always dark; only the page behind it follows the theme

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Font, Gradient, Shadow, Theme, Vector, color, gradient};

// ============================================================================
// Palette
// ============================================================================

/// Work Sans when installed, otherwise the system sans-serif
pub const FONT: Font = Font::with_name("Work Sans");

pub const SURFACE: Color = color!(0x3a3a3a);
pub const SURFACE_HOVER: Color = color!(0x4a4a4a);
pub const RING_START: Color = color!(0xb8ffe3);
pub const RING_END: Color = color!(0xc081ff);
pub const TEXT_PRIMARY: Color = Color::WHITE;

const WHITE_5: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.05);
const WHITE_10: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.10);
const WHITE_40: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.40);
const WHITE_70: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.70);
const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

// Page gradient stops
mod dark {
    use super::*;
    pub const PAGE_TOP: Color = color!(0x000000);
    pub const PAGE_BOTTOM: Color = color!(0x666666);
}

mod light {
    use super::*;
    pub const PAGE_TOP: Color = color!(0xffffff);
    pub const PAGE_BOTTOM: Color = color!(0xb3b3b3);
}

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Scale a colour's alpha by `opacity`
pub fn faded(color: Color, opacity: f32) -> Color {
    color.scale_alpha(opacity.clamp(0.0, 1.0))
}

fn ring_gradient(angle: f32, alpha: f32) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(angle)
            .add_stop(0.0, faded(RING_START, alpha))
            .add_stop(1.0, faded(RING_END, alpha)),
    ))
}

// ============================================================================
// Container styles
// ============================================================================

/// Vertical page gradient behind the widget
pub fn page(theme: &Theme) -> container::Style {
    let (top, bottom) = if is_dark(theme) {
        (dark::PAGE_TOP, dark::PAGE_BOTTOM)
    } else {
        (light::PAGE_TOP, light::PAGE_BOTTOM)
    };
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(std::f32::consts::PI)
                .add_stop(0.0, top)
                .add_stop(1.0, bottom),
        ))),
        ..Default::default()
    }
}

/// Outer 1px ring. Layered widgets get a diagonal gradient, flat ones a plain border colour.
pub fn ring(radius: f32, gradient: bool) -> container::Style {
    container::Style {
        background: Some(if gradient {
            ring_gradient(std::f32::consts::FRAC_PI_4 * 3.0, 1.0)
        } else {
            Background::Color(WHITE_10)
        }),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

/// Dark surface inside the ring
pub fn surface(radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: radius.into(),
            width: 1.0,
            color: WHITE_5,
        },
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// 1px horizontal gradient ring around the input and the More button
pub fn pill_ring(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ring_gradient(std::f32::consts::FRAC_PI_2, 0.6)),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn pill_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed divider between suggestion rows
pub fn divider_dash(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(WHITE_40, opacity))),
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Invisible button used for the collapsed pill and the microphone
pub fn bare_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: TEXT_PRIMARY,
        ..Default::default()
    }
}

/// Suggestion and mirrored rows: background fades in with the hover progress
pub fn row_button(hover: f32, opacity: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(faded(WHITE_5, hover * opacity))),
        text_color: faded(TEXT_PRIMARY, opacity),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The More button brightens its surface and text on hover
pub fn more_button(hover: f32, opacity: f32) -> button::Style {
    let mix = |a: Color, b: Color| {
        Color::from_rgba(
            a.r + (b.r - a.r) * hover,
            a.g + (b.g - a.g) * hover,
            a.b + (b.b - a.b) * hover,
            a.a + (b.a - a.a) * hover,
        )
    };
    button::Style {
        background: Some(Background::Color(faded(mix(SURFACE, SURFACE_HOVER), opacity))),
        text_color: faded(mix(WHITE_70, TEXT_PRIMARY), opacity),
        border: Border {
            radius: 999.0.into(),
            width: 1.0,
            color: faded(WHITE_10, opacity),
        },
        ..Default::default()
    }
}

// ============================================================================
// Input
// ============================================================================

/// Transparent input; the typed text and caret use the ring's first colour.
/// The placeholder is drawn separately as gradient text.
pub fn search_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: WHITE_70,
        placeholder: Color::TRANSPARENT,
        value: RING_START,
        selection: faded(RING_END, 0.4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_alpha() {
        let c = faded(WHITE_40, 0.5);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert_eq!(faded(Color::WHITE, 3.0).a, 1.0);
    }

    #[test]
    fn page_follows_theme_brightness() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }
}
