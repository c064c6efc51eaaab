use iced::{widget::Space, Alignment, Length};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Info,
}

/// Transient banner displayed on top of the page.
pub fn toast<'a, T: 'a + Clone>(kind: Kind, message: &'a str, on_close: T) -> Container<'a, T> {
    let style = match kind {
        Kind::Success => theme::notification::success,
        Kind::Error => theme::notification::error,
        Kind::Info => theme::notification::info,
    };
    Container::new(
        Row::new()
            .push(text::p1_medium(message))
            .push(Space::with_width(Length::Fill))
            .push(button::transparent(None, "✕").on_press(on_close))
            .align_y(Alignment::Center)
            .spacing(10),
    )
    .padding(12)
    .max_width(440)
    .width(Length::Fill)
    .style(style)
}
