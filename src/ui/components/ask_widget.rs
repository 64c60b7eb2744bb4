//! The Ask widget: animated container holding the pill or the panel
//!
//! Layout mirrors the geometry springs: an outer gradient ring, a clipped
//! dark surface inside it, and whichever views are visible or still fading.

use iced::widget::{Space, column, container, stack, text};
use iced::{Element, Fill, Length, Padding};

use crate::app::{Message, UiState};
use crate::features::Variant;
use crate::ui::animation::geometry::{EXPANDED, RING_WIDTH};
use crate::ui::components::{collapsed_pill, search_input, suggestion_list};
use crate::ui::theme;

pub const TITLE: &str = "Ask New York Times\nAnything!";
const TITLE_HEIGHT: f32 = 56.0;
const PANEL_PADDING: f32 = 24.0;
const PANEL_PADDING_TOP: f32 = 40.0;
const GAP: f32 = 16.0;

/// Expanded panel laid out at full size; the surface clips it while resizing
fn panel<'a>(ui: &UiState, opacity: f32) -> Element<'a, Message> {
    let now = ui.now;
    let ask = &ui.ask;
    let inner_width = EXPANDED.width - 2.0 * PANEL_PADDING;
    let title_opacity = opacity * ui.title_fade.opacity(now);

    let title = text(TITLE)
        .size(20)
        .font(theme::FONT)
        .line_height(1.4)
        .color(theme::faded(theme::TEXT_PRIMARY, title_opacity));

    // Title and mirrored rows share the slot above the field
    let header = stack![
        container(title).height(TITLE_HEIGHT),
        search_input::mirrored_rows(&ask.mirrored(), &ui.mirrored_rows, &ui.hover, opacity, now),
    ]
    .width(Fill)
    .height(TITLE_HEIGHT + GAP);

    let suggestions = suggestion_list::rows(
        ask.suggestions().visible(),
        &ui.rows,
        &ui.hover,
        inner_width,
        opacity,
        now,
    );

    let content = column![
        header,
        search_input::field(ask.query(), &ui.hover, opacity),
        Space::new().height(GAP),
        container(suggestions).height(Fill),
        Space::new().height(GAP),
        suggestion_list::more_button(&ui.hover, opacity),
    ];

    container(content)
        .width(Length::Fixed(EXPANDED.width))
        .height(Length::Fixed(EXPANDED.height))
        .padding(
            Padding::new(PANEL_PADDING)
                .top(PANEL_PADDING_TOP)
                .bottom(PANEL_PADDING),
        )
        .into()
}

pub fn view<'a>(ui: &UiState, variant: Variant) -> Element<'a, Message> {
    let now = ui.now;
    let geometry = &ui.geometry;
    let size = geometry.size();
    let outer = geometry.outer_size();
    let outer_radius = geometry.outer_radius();
    let inner_radius = geometry.inner_radius();

    let mut layers: Vec<Element<'a, Message>> = Vec::new();
    if ui.pill_fade.is_drawn(now) {
        layers.push(collapsed_pill::view(ui.pill_fade.opacity(now)));
    }
    if ui.panel_fade.is_drawn(now) {
        layers.push(panel(ui, ui.panel_fade.opacity(now)));
    }

    let surface = container(iced::widget::Stack::with_children(layers))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .clip(true)
        .style(move |_theme| theme::surface(inner_radius));

    let gradient = variant.has_gradient_ring();
    container(surface)
        .width(Length::Fixed(outer.width))
        .height(Length::Fixed(outer.height))
        .padding(RING_WIDTH)
        .style(move |_theme| theme::ring(outer_radius, gradient))
        .into()
}
