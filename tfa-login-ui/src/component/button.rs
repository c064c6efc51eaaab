use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, row},
    Font, Length,
};

use super::text::text;
use crate::{
    font::{MEDIUM, REGULAR},
    theme,
    widget::*,
};

/// Height of the full width form buttons
pub const HEIGHT: f32 = 44.0;

type StyleFn = fn(&theme::Theme, iced::widget::button::Status) -> iced::widget::button::Style;

/// Button with its label centered, optionally preceded by an icon.
fn centered<'a, T: 'a>(
    icon: Option<Text<'a>>,
    label: &'static str,
    font: Font,
    style: StyleFn,
) -> Button<'a, T> {
    let label = text(label)
        .font(font)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);
    let content: Element<'a, T> = match icon {
        Some(icon) => row![icon, label]
            .spacing(10)
            .align_y(Vertical::Center)
            .into(),
        None => label.into(),
    };
    Button::new(
        container(content)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .padding(5),
    )
    .height(HEIGHT)
    .style(style)
}

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, label: &'static str) -> Button<'a, T> {
    centered(icon, label, MEDIUM, theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Text<'a>>, label: &'static str) -> Button<'a, T> {
    centered(icon, label, REGULAR, theme::button::secondary)
}

/// Borderless button shrinking to its content
pub fn transparent<'a, T: 'a>(icon: Option<Text<'a>>, label: &'static str) -> Button<'a, T> {
    let content: Element<'a, T> = match icon {
        Some(icon) => row![icon, text(label)]
            .spacing(10)
            .align_y(Vertical::Center)
            .into(),
        None => text(label).into(),
    };
    Button::new(container(content).padding(5)).style(theme::button::transparent)
}
