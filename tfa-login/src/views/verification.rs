use iced::{alignment::Horizontal, Length};
use tfa_login_ui::{
    component::{button, otp, text},
    theme,
    widget::*,
};

use crate::{
    state::{Msg, State},
    views::layout,
};

pub fn verification_view(state: &State) -> Element<'_, Msg> {
    let verification = &state.views.verification;

    let btn_back = button::transparent(Some(text::p1_regular("←")), "Back")
        .on_press(Msg::NavigateBack);

    let segments = Container::new(otp::segments(
        verification.otp.digits(),
        Some(verification.otp.focused()),
        verification.invalid,
        Msg::OtpFocus,
    ))
    .align_x(Horizontal::Center)
    .width(Length::Fill);

    let invalid = verification
        .invalid
        .then(|| text::p2_regular("Invalid code, please try again").style(theme::text::error));

    let btn_new_code = verification.show_new_code().then(|| {
        button::secondary(None, "Get new code")
            .width(Length::Fill)
            .on_press_maybe((!verification.processing).then_some(Msg::VerificationRequestNewCode))
    });

    // The code is only submittable once complete.
    let btn_continue = verification.has_code().then(|| {
        button::primary(
            None,
            if verification.processing {
                "Verifying…"
            } else {
                "Continue"
            },
        )
        .width(Length::Fill)
        .on_press_maybe(
            verification
                .can_continue()
                .then_some(Msg::VerificationSubmit),
        )
    });

    let signed_in = state.session.as_ref().map(|session| {
        text::p1_medium(format!("Signed in as {}", session.email)).style(theme::text::success)
    });

    let content = Column::new()
        .push(btn_back)
        .push(text::h2("Two-Factor Authentication"))
        .push(
            text::p1_regular("Enter the 6-digit code from the Google Authenticator app")
                .style(theme::text::secondary),
        )
        .push(segments)
        .push_maybe(invalid)
        .push_maybe(btn_new_code)
        .push_maybe(btn_continue)
        .push_maybe(signed_in)
        .spacing(20);

    layout(state, content)
}
