use iced::{alignment::Horizontal, Length};

use crate::{component::text, theme, widget::*};

const SEGMENT_WIDTH: f32 = 52.0;
const SEGMENT_HEIGHT: f32 = 60.0;

/// Row of digit segments.
///
/// Segments are not text inputs: keystrokes are routed by the caller to the
/// focused segment, pressing a segment produces `on_focus(index)`.
pub fn segments<'a, T, F>(
    digits: &[Option<char>],
    focused: Option<usize>,
    invalid: bool,
    on_focus: F,
) -> Row<'a, T>
where
    T: 'a + Clone,
    F: Fn(usize) -> T,
{
    digits
        .iter()
        .enumerate()
        .fold(Row::new().spacing(12), |row, (index, digit)| {
            let label = digit.map(String::from).unwrap_or_default();
            row.push(
                Button::new(
                    Container::new(text::digit(label))
                        .align_x(Horizontal::Center)
                        .center_y(Length::Fill)
                        .width(Length::Fill),
                )
                .width(SEGMENT_WIDTH)
                .height(SEGMENT_HEIGHT)
                .style(theme::button::segment(focused == Some(index), invalid))
                .on_press(on_focus(index)),
            )
        })
}
