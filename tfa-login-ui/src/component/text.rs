use std::fmt::Display;

use iced::{advanced::text::Shaping, Font};

use crate::{font, widget::Text};

pub const H2_SIZE: u16 = 24;
pub const H4_SIZE: u16 = 18;
pub const P1_SIZE: u16 = 16;
pub const P2_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;
/// Digits of the code segments
pub const SEGMENT_SIZE: u16 = 20;

fn styled<'a>(content: impl Display, font: Font, size: u16) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size)
}

/// Page title
pub fn h2<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::EXTRA_BOLD, H2_SIZE)
}

pub fn h4_bold<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::BOLD, H4_SIZE)
}

pub fn p1_medium<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::MEDIUM, P1_SIZE)
}

pub fn p1_regular<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, P1_SIZE)
}

pub fn p2_regular<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, P2_SIZE)
}

pub fn caption<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, CAPTION_SIZE)
}

/// Digit of a code segment
pub fn digit<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::BOLD, SEGMENT_SIZE)
}

pub fn text<'a>(content: impl Display) -> Text<'a> {
    p1_regular(content)
}
