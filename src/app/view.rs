// src/app/view.rs
//! Application view rendering

use iced::widget::container;
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::ask_widget;
use crate::ui::theme;

impl App {
    /// The widget centred on the page gradient
    pub fn view(&self) -> Element<'_, Message> {
        let widget = ask_widget::view(&self.ui, self.core.settings.widget.variant);

        container(widget)
            .center(Fill)
            .style(theme::page)
            .into()
    }
}
