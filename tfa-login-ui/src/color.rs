use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const GREY_50: Color = Color::from_rgb(
    0xF9 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFB as f32 / 255.0,
);
pub const GREY_100: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const GREY_300: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_400: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_500: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x72 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const GREY_800: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);
pub const GREY_900: Color = Color::from_rgb(
    0x11 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const BLUE_400: Color = Color::from_rgb(
    0x60 as f32 / 255.0,
    0xA5 as f32 / 255.0,
    0xFA as f32 / 255.0,
);
pub const BLUE_500: Color = Color::from_rgb(
    0x3B as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const BLUE_600: Color = Color::from_rgb(
    0x25 as f32 / 255.0,
    0x63 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const BLUE_700: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x4E as f32 / 255.0,
    0xD8 as f32 / 255.0,
);
pub const BLUE_800: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x40 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const RED_50: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF2 as f32 / 255.0,
    0xF2 as f32 / 255.0,
);
pub const RED_500: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const GREEN_50: Color = Color::from_rgb(
    0xF0 as f32 / 255.0,
    0xFD as f32 / 255.0,
    0xF4 as f32 / 255.0,
);
pub const GREEN_600: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
pub const BLUE_50: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0xF6 as f32 / 255.0,
    0xFF as f32 / 255.0,
);
/// Background of disabled controls, black at 4%
pub const DISABLED_BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.04);
/// Text of disabled controls, black at 25%
pub const DISABLED_TEXT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);
pub const DISABLED_BORDER: Color = Color::from_rgb(
    0xD9 as f32 / 255.0,
    0xD9 as f32 / 255.0,
    0xD9 as f32 / 255.0,
);
