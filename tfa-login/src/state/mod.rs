use std::sync::Arc;

use iced::{
    keyboard::{self, key::Named, Key, Modifiers},
    task, Subscription,
};
use tfa_login_api::TokenResponse;
use tfa_login_ui::{component::notification::Kind, widget::Element};

use crate::{
    client::AuthService,
    views::{credentials_view, verification_view},
};
pub use message::Msg;
use views::{
    otp::{Keystroke, OtpKey},
    Phase,
};

pub mod message;
pub mod update;
pub mod views;

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: Kind,
    pub message: String,
}

/// Outcome of a successful verification, kept in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("email", &self.email)
            .finish()
    }
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        Self {
            token: response.token,
            email: response.user.email,
        }
    }
}

/// Main application state
pub struct State {
    pub views: views::ViewsState,
    pub backend: Arc<dyn AuthService>,
    pub toast: Option<Toast>,
    pub session: Option<Session>,
    /// Aborts the pending new code timer when dropped
    new_code_timer: Option<task::Handle>,
    next_toast_id: u64,
}

impl State {
    pub fn new(backend: Arc<dyn AuthService>) -> Self {
        Self {
            views: views::ViewsState::new(),
            backend,
            toast: None,
            session: None,
            new_code_timer: None,
            next_toast_id: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.views.current
    }

    pub fn view(&self) -> Element<'_, Msg> {
        match self.views.current {
            Phase::Credentials => credentials_view(self),
            Phase::Verification => verification_view(self),
        }
    }

    /// Keystrokes are routed to the code segments while they are displayed.
    pub fn subscription(&self) -> Subscription<Msg> {
        match self.views.current {
            Phase::Verification => keyboard::on_key_press(verification_key),
            Phase::Credentials => Subscription::none(),
        }
    }
}

fn verification_key(key: Key, modifiers: Modifiers) -> Option<Msg> {
    match key.as_ref() {
        Key::Named(Named::Backspace) => Some(Msg::OtpKeystroke(Keystroke::Key(OtpKey::Backspace))),
        Key::Named(Named::ArrowLeft) => Some(Msg::OtpKeystroke(Keystroke::Key(OtpKey::ArrowLeft))),
        Key::Named(Named::ArrowRight) => {
            Some(Msg::OtpKeystroke(Keystroke::Key(OtpKey::ArrowRight)))
        }
        Key::Named(Named::Enter) => Some(Msg::VerificationSubmit),
        Key::Character("v") if modifiers.command() => Some(Msg::OtpPaste),
        Key::Character(c) if !modifiers.command() && !modifiers.alt() => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Msg::OtpKeystroke(Keystroke::Char(c))),
                _ => None,
            }
        }
        _ => None,
    }
}
