use iced::Length;
use tfa_login_ui::{
    component::{button, form, text},
    widget::*,
};

use crate::{
    state::{views::credentials::EMAIL_INPUT_ID, Msg, State},
    views::layout,
};

pub fn credentials_view(state: &State) -> Element<'_, Msg> {
    let credentials = &state.views.credentials;
    let on_submit = credentials.can_submit().then_some(Msg::CredentialsSubmit);

    let email = if !credentials.processing {
        form::Form::new_trimmed(
            "Email Address",
            &credentials.email,
            Msg::CredentialsUpdateEmail,
        )
        .on_submit_maybe(on_submit.clone())
    } else {
        form::Form::new_disabled("Email Address", &credentials.email)
    }
    .id(EMAIL_INPUT_ID)
    .size(16)
    .padding(10);
    let email = if credentials.show_email_warning() {
        email
    } else {
        email.hide_warning()
    };

    let password = if !credentials.processing {
        form::Form::new(
            "Password",
            &credentials.password,
            Msg::CredentialsUpdatePassword,
        )
        .on_submit_maybe(on_submit.clone())
    } else {
        form::Form::new_disabled("Password", &credentials.password)
    }
    .secure(true)
    .hide_warning()
    .size(16)
    .padding(10);

    let btn = button::primary(
        None,
        if credentials.processing {
            "Signing in…"
        } else {
            "Log in"
        },
    )
    .width(Length::Fill)
    .on_press_maybe(on_submit);

    let content = Column::new()
        .push(text::h2("Sign in to your account to continue"))
        .push(email)
        .push(password)
        .push(btn)
        .spacing(20);

    layout(state, content)
}
