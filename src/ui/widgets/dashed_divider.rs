//! Horizontal dashed rule built from short filled containers

use iced::widget::{Row, Space, container};
use iced::{Element, Length};

/// Number of dashes that fit in `width`
pub fn dash_count(width: f32, dash: f32, gap: f32) -> usize {
    if width <= 0.0 || dash <= 0.0 {
        return 0;
    }
    ((width + gap) / (dash + gap)).floor() as usize
}

pub fn dashed_divider<'a, Message: 'a>(
    width: f32,
    dash: f32,
    gap: f32,
    style: impl Fn(&iced::Theme) -> container::Style + Clone + 'a,
) -> Element<'a, Message> {
    let dashes = (0..dash_count(width, dash, gap)).map(|_| -> Element<'a, Message> {
        container(Space::new())
            .width(Length::Fixed(dash))
            .height(Length::Fixed(1.0))
            .style(style.clone())
            .into()
    });
    Row::with_children(dashes).spacing(gap).into()
}
