use iced::widget::text::{Catalog, Style, StyleFn};
use iced::Color;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(inherited)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Keeps the color of the parent widget
fn inherited(_theme: &Theme) -> Style {
    Style { color: None }
}

fn colored(color: Color) -> Style {
    Style { color: Some(color) }
}

pub fn secondary(theme: &Theme) -> Style {
    colored(theme.colors.text.secondary)
}

pub fn success(theme: &Theme) -> Style {
    colored(theme.colors.text.success)
}

pub fn error(theme: &Theme) -> Style {
    colored(theme.colors.text.error)
}
