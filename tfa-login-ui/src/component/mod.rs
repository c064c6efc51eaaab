pub mod button;
pub mod form;
pub mod notification;
pub mod otp;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// White rounded panel holding a page's content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(32)
        .max_width(440)
        .width(Length::Fill)
        .style(theme::container::card)
}
