pub mod credentials;
pub mod verification;

pub use credentials::credentials_view;
pub use verification::verification_view;

use iced::{
    widget::{row, Space},
    Alignment, Length,
};
use tfa_login_ui::{
    component::{card, notification, text},
    theme,
    widget::*,
};

use crate::state::{Msg, State};

pub const BRAND: &str = "Company";

/// Centered card under the brand header, with the current notification on top.
pub fn layout<'a>(state: &'a State, content: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    let brand = row![
        Space::with_width(Length::Fill),
        text::h4_bold(BRAND),
        Space::with_width(Length::Fill),
    ];

    let toast = state
        .toast
        .as_ref()
        .map(|toast| notification::toast(toast.kind, &toast.message, Msg::ToastDismiss));

    Container::new(
        Column::new()
            .push_maybe(toast)
            .push(brand)
            .push(card(content))
            .spacing(20)
            .max_width(440)
            .align_x(Alignment::Center),
    )
    .padding(40)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(theme::container::background)
    .into()
}
