use std::time::Duration;

use iced::{clipboard, widget::text_input, Task};
use tfa_login_api::TokenResponse;
use tfa_login_ui::component::notification::Kind;
use tracing::{debug, info, warn};

use super::{
    message::Msg,
    views::{
        credentials::EMAIL_INPUT_ID,
        otp::{Keystroke, Outcome},
        Phase,
    },
    Session, State, Toast,
};
use crate::client::AuthError;

/// Delay before a new code can be requested
pub const NEW_CODE_DELAY: Duration = Duration::from_secs(10);
/// Lifetime of a notification
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub const SIGNED_IN_MESSAGE: &str = "Signed in successfully";
pub const NEW_CODE_MESSAGE: &str = "A new code has been requested";

async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await
}

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        match message {
            // Credentials
            Msg::CredentialsUpdateEmail(email) => self.views.credentials.on_update_email(email),
            Msg::CredentialsUpdatePassword(password) => self.views.credentials.on_update_password(password),
            Msg::CredentialsSubmit => return self.on_credentials_submit(),
            Msg::CredentialsResult(res) => return self.on_credentials_result(res),

            // Verification
            Msg::OtpKeystroke(keystroke) => self.on_otp_keystroke(keystroke),
            Msg::OtpPaste => return self.on_otp_paste(),
            Msg::OtpPasted(text) => return self.on_otp_pasted(text),
            Msg::OtpFocus(index) => self.on_otp_focus(index),
            Msg::VerificationSubmit => return self.on_verification_submit(),
            Msg::VerificationResult(res) => return self.on_verification_result(res),
            Msg::VerificationNewCodeTimer(epoch) => self.on_new_code_timer(epoch),
            Msg::VerificationRequestNewCode => return self.on_request_new_code(),
            Msg::VerificationNewCodeResult(res) => return self.on_new_code_result(res),
            Msg::NavigateBack => return self.on_navigate_back(),

            // Notifications
            Msg::ToastExpired(id) => self.on_toast_expired(id),
            Msg::ToastDismiss => self.toast = None,
        }
        Task::none()
    }

    fn show_toast(&mut self, kind: Kind, message: impl Into<String>) -> Task<Msg> {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(Toast {
            id,
            kind,
            message: message.into(),
        });
        Task::perform(sleep(TOAST_DURATION), move |_| Msg::ToastExpired(id))
    }

    fn on_toast_expired(&mut self, id: u64) {
        // A newer toast keeps its own lifetime.
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }

    fn arm_new_code_timer(&mut self, epoch: u64) -> Task<Msg> {
        let (task, handle) = Task::perform(sleep(NEW_CODE_DELAY), move |_| {
            Msg::VerificationNewCodeTimer(epoch)
        })
        .abortable();
        // Replacing the handle aborts the previous timer.
        self.new_code_timer = Some(handle.abort_on_drop());
        task
    }

    fn on_credentials_submit(&mut self) -> Task<Msg> {
        if self.views.current != Phase::Credentials || !self.views.credentials.can_submit() {
            debug!("Ignoring credentials submission");
            return Task::none();
        }
        self.views.credentials.processing = true;
        let request = self.views.credentials.request();
        let backend = self.backend.clone();
        info!("Signing in as {}", request.email);
        Task::perform(
            async move { backend.login(&request.email, &request.password).await },
            Msg::CredentialsResult,
        )
    }

    fn on_credentials_result(&mut self, res: Result<(), AuthError>) -> Task<Msg> {
        self.views.credentials.processing = false;
        match res {
            Ok(()) => {
                info!("Credentials accepted, waiting for the verification code");
                self.views.current = Phase::Verification;
                let epoch = self.views.verification.enter();
                self.arm_new_code_timer(epoch)
            }
            Err(e) => {
                warn!("Sign in failed: {}", e);
                self.show_toast(Kind::Error, e.user_message())
            }
        }
    }

    fn on_otp_keystroke(&mut self, keystroke: Keystroke) {
        if self.views.current != Phase::Verification {
            return;
        }
        let verification = &mut self.views.verification;
        match verification.otp.keystroke(keystroke) {
            Outcome::Edited(edit) => verification.on_edit(edit),
            Outcome::Moved(index) => debug!("Code segment {} focused", index),
            Outcome::Ignored => {}
        }
    }

    fn on_otp_paste(&mut self) -> Task<Msg> {
        if self.views.current != Phase::Verification {
            return Task::none();
        }
        clipboard::read().map(Msg::OtpPasted)
    }

    fn on_otp_pasted(&mut self, text: Option<String>) -> Task<Msg> {
        if self.views.current != Phase::Verification {
            return Task::none();
        }
        let Some(text) = text else {
            debug!("Clipboard is empty");
            return Task::none();
        };
        let verification = &mut self.views.verification;
        match verification.otp.handle_paste(&text) {
            Some(edit) => {
                verification.on_edit(edit);
                // The focus lands once the pasted digits are rendered.
                match edit.focus {
                    Some(index) => Task::done(Msg::OtpFocus(index)),
                    None => Task::none(),
                }
            }
            None => Task::none(),
        }
    }

    fn on_otp_focus(&mut self, index: usize) {
        if !self.views.verification.otp.focus(index) {
            warn!("Out of range code segment {}", index);
        }
    }

    fn on_verification_submit(&mut self) -> Task<Msg> {
        let verification = &mut self.views.verification;
        if self.views.current != Phase::Verification || !verification.can_continue() {
            debug!("Ignoring code submission");
            return Task::none();
        }
        verification.processing = true;
        let code = verification.code;
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.verify_code(code).await },
            Msg::VerificationResult,
        )
    }

    fn on_verification_result(&mut self, res: Result<TokenResponse, AuthError>) -> Task<Msg> {
        self.views.verification.processing = false;
        match res {
            Ok(response) => {
                let session = Session::from(response);
                info!("Signed in as {}", session.email);
                self.session = Some(session);
                self.show_toast(Kind::Success, SIGNED_IN_MESSAGE)
            }
            Err(e) if e.is_transport() => {
                warn!("Code verification failed: {}", e);
                self.show_toast(Kind::Error, e.user_message())
            }
            Err(e) => {
                warn!("Code rejected: {}", e);
                self.views.verification.invalid = true;
                Task::none()
            }
        }
    }

    fn on_new_code_timer(&mut self, epoch: u64) {
        if self.views.current != Phase::Verification
            || !self.views.verification.on_new_code_timer(epoch)
        {
            debug!("Stale new code timer {}", epoch);
            return;
        }
        self.new_code_timer = None;
    }

    /// Send the retained credentials again so a new code is issued.
    fn on_request_new_code(&mut self) -> Task<Msg> {
        let verification = &mut self.views.verification;
        if self.views.current != Phase::Verification
            || !verification.show_new_code()
            || verification.processing
        {
            debug!("Ignoring new code request");
            return Task::none();
        }
        verification.processing = true;
        verification.otp.clear();
        let epoch = verification.rearm();
        let request = self.views.credentials.request();
        let backend = self.backend.clone();
        info!("Requesting a new code for {}", request.email);
        Task::batch([
            Task::perform(
                async move { backend.login(&request.email, &request.password).await },
                Msg::VerificationNewCodeResult,
            ),
            self.arm_new_code_timer(epoch),
        ])
    }

    fn on_new_code_result(&mut self, res: Result<(), AuthError>) -> Task<Msg> {
        self.views.verification.processing = false;
        match res {
            Ok(()) => self.show_toast(Kind::Info, NEW_CODE_MESSAGE),
            Err(e) => {
                warn!("New code request failed: {}", e);
                self.show_toast(Kind::Error, e.user_message())
            }
        }
    }

    fn on_navigate_back(&mut self) -> Task<Msg> {
        if self.views.current != Phase::Verification {
            return Task::none();
        }
        self.views.verification.leave();
        self.new_code_timer = None;
        self.views.current = Phase::Credentials;
        self.views.credentials.revalidate();
        text_input::focus(text_input::Id::new(EMAIL_INPUT_ID))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tfa_login_api::mock;

    use super::*;
    use crate::client::{Endpoint, MockService, GENERIC_ERROR_MESSAGE};
    use crate::state::views::otp::OtpKey;

    fn state() -> State {
        State::new(Arc::new(MockService::with_delay(Duration::ZERO)))
    }

    fn fill_credentials(state: &mut State, email: &str, password: &str) {
        let _ = state.update(Msg::CredentialsUpdateEmail(email.to_string()));
        let _ = state.update(Msg::CredentialsUpdatePassword(password.to_string()));
    }

    fn type_code(state: &mut State, code: &str) {
        for c in code.chars() {
            let _ = state.update(Msg::OtpKeystroke(Keystroke::Char(c)));
        }
    }

    /// Credentials accepted, verification page shown
    fn verification_state() -> State {
        let mut state = state();
        fill_credentials(&mut state, mock::VALID_EMAIL, mock::VALID_PASSWORD);
        let _ = state.update(Msg::CredentialsSubmit);
        let _ = state.update(Msg::CredentialsResult(Ok(())));
        state
    }

    #[test]
    fn submit_is_deduplicated() {
        let mut state = state();
        fill_credentials(&mut state, mock::VALID_EMAIL, mock::VALID_PASSWORD);

        let _ = state.update(Msg::CredentialsSubmit);
        assert!(state.views.credentials.processing);
        assert!(!state.views.credentials.can_submit());
        // A second submission while in flight changes nothing.
        let _ = state.update(Msg::CredentialsSubmit);
        assert!(state.views.credentials.processing);
    }

    #[test]
    fn invalid_credentials_are_not_submitted() {
        let mut state = state();
        fill_credentials(&mut state, "test@", mock::VALID_PASSWORD);
        let _ = state.update(Msg::CredentialsSubmit);
        assert!(!state.views.credentials.processing);

        fill_credentials(&mut state, mock::VALID_EMAIL, "short");
        let _ = state.update(Msg::CredentialsSubmit);
        assert!(!state.views.credentials.processing);
    }

    #[test]
    fn login_success_enters_verification() {
        let state = verification_state();
        assert_eq!(state.phase(), Phase::Verification);
        assert!(!state.views.credentials.processing);
        assert!(state.new_code_timer.is_some());
        assert!(!state.views.verification.can_request_new_code);
        assert!(state.toast.is_none());
    }

    #[test]
    fn login_failure_shows_server_message() {
        let mut state = state();
        fill_credentials(&mut state, mock::RATE_LIMIT_EMAIL, mock::VALID_PASSWORD);
        let _ = state.update(Msg::CredentialsSubmit);
        let _ = state.update(Msg::CredentialsResult(Err(AuthError::RateLimited(
            mock::RATE_LIMIT_MESSAGE.to_string(),
        ))));

        assert_eq!(state.phase(), Phase::Credentials);
        assert!(!state.views.credentials.processing);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, Kind::Error);
        assert_eq!(toast.message, mock::RATE_LIMIT_MESSAGE);

        let _ = state.update(Msg::CredentialsResult(Err(AuthError::Transport(
            "connection refused".to_string(),
        ))));
        assert_eq!(state.toast.as_ref().unwrap().message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn toast_expiry_is_keyed() {
        let mut state = state();
        let _ = state.update(Msg::CredentialsResult(Err(AuthError::ServerError(
            "first".to_string(),
        ))));
        let first = state.toast.as_ref().unwrap().id;
        let _ = state.update(Msg::CredentialsResult(Err(AuthError::ServerError(
            "second".to_string(),
        ))));

        let _ = state.update(Msg::ToastExpired(first));
        assert_eq!(state.toast.as_ref().unwrap().message, "second");

        let second = state.toast.as_ref().unwrap().id;
        let _ = state.update(Msg::ToastExpired(second));
        assert!(state.toast.is_none());

        let _ = state.update(Msg::CredentialsResult(Err(AuthError::ServerError(
            "third".to_string(),
        ))));
        let _ = state.update(Msg::ToastDismiss);
        assert!(state.toast.is_none());
    }

    #[test]
    fn typed_code_shows_continue() {
        let mut state = verification_state();
        type_code(&mut state, "12345");
        assert!(!state.views.verification.has_code());

        type_code(&mut state, "6");
        assert_eq!(state.views.verification.code, 123456);
        assert!(state.views.verification.can_continue());

        let _ = state.update(Msg::VerificationSubmit);
        assert!(state.views.verification.processing);
        // Enter while in flight is ignored.
        let _ = state.update(Msg::VerificationSubmit);
        assert!(state.views.verification.processing);
    }

    #[test]
    fn invalid_code_then_edit() {
        let mut state = verification_state();
        type_code(&mut state, "111111");
        let _ = state.update(Msg::VerificationSubmit);
        let _ = state.update(Msg::VerificationResult(Err(AuthError::InvalidCode(
            mock::INVALID_CODE_MESSAGE.to_string(),
        ))));
        assert!(state.views.verification.invalid);
        assert!(!state.views.verification.processing);
        assert!(state.toast.is_none());

        let _ = state.update(Msg::OtpKeystroke(Keystroke::Key(OtpKey::Backspace)));
        assert!(!state.views.verification.invalid);
    }

    #[test]
    fn rejected_code_without_message() {
        let mut state = verification_state();
        type_code(&mut state, "111111");
        let _ = state.update(Msg::VerificationSubmit);
        let _ = state.update(Msg::VerificationResult(Err(AuthError::from_status(
            Endpoint::Tfa,
            401,
            String::new(),
        ))));
        assert!(state.views.verification.invalid);
        assert!(state.toast.is_none());
    }

    #[test]
    fn leading_zero_code_cannot_be_submitted() {
        let mut state = verification_state();
        type_code(&mut state, "012345");
        assert_eq!(state.views.verification.code, 12345);
        assert!(!state.views.verification.can_continue());

        let _ = state.update(Msg::VerificationSubmit);
        assert!(!state.views.verification.processing);
    }

    #[test]
    fn transport_failure_on_verify() {
        let mut state = verification_state();
        type_code(&mut state, "123456");
        let _ = state.update(Msg::VerificationSubmit);
        let _ = state.update(Msg::VerificationResult(Err(AuthError::Transport(
            "timeout".to_string(),
        ))));
        assert!(!state.views.verification.invalid);
        assert_eq!(state.toast.as_ref().unwrap().kind, Kind::Error);
        assert_eq!(state.toast.as_ref().unwrap().message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn verification_success_keeps_session() {
        let mut state = verification_state();
        type_code(&mut state, "123456");
        let _ = state.update(Msg::VerificationSubmit);
        let _ = state.update(Msg::VerificationResult(Ok(TokenResponse {
            token: mock::MOCK_TOKEN.to_string(),
            user: tfa_login_api::User {
                email: mock::VALID_EMAIL.to_string(),
            },
        })));

        let session = state.session.as_ref().unwrap();
        assert_eq!(session.token, mock::MOCK_TOKEN);
        assert_eq!(session.email, mock::VALID_EMAIL);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, Kind::Success);
        assert_eq!(toast.message, SIGNED_IN_MESSAGE);
    }

    #[test]
    fn paste_defers_focus() {
        let mut state = verification_state();
        let _ = state.update(Msg::OtpPasted(Some("12a3!4".to_string())));
        assert_eq!(state.views.verification.otp.focused(), 0);
        assert!(!state.views.verification.has_code());

        let _ = state.update(Msg::OtpFocus(4));
        assert_eq!(state.views.verification.otp.focused(), 4);

        let _ = state.update(Msg::OtpPasted(Some("123456".to_string())));
        assert_eq!(state.views.verification.code, 123456);

        let _ = state.update(Msg::OtpPasted(None));
        assert_eq!(state.views.verification.code, 123456);
    }

    #[test]
    fn back_cancels_new_code_timer() {
        let mut state = verification_state();
        let first = state.views.verification.epoch();

        let _ = state.update(Msg::NavigateBack);
        assert_eq!(state.phase(), Phase::Credentials);
        assert!(state.new_code_timer.is_none());
        // Credentials are retained and still valid.
        assert!(state.views.credentials.can_submit());

        // The old timer firing late has no effect.
        let _ = state.update(Msg::VerificationNewCodeTimer(first));
        assert!(!state.views.verification.can_request_new_code);

        let _ = state.update(Msg::CredentialsSubmit);
        let _ = state.update(Msg::CredentialsResult(Ok(())));
        let _ = state.update(Msg::VerificationNewCodeTimer(first));
        assert!(!state.views.verification.can_request_new_code);

        let current = state.views.verification.epoch();
        let _ = state.update(Msg::VerificationNewCodeTimer(current));
        assert!(state.views.verification.show_new_code());
    }

    #[test]
    fn request_new_code() {
        let mut state = verification_state();
        let epoch = state.views.verification.epoch();
        // Not available before the timer fired.
        let _ = state.update(Msg::VerificationRequestNewCode);
        assert!(!state.views.verification.processing);

        let _ = state.update(Msg::VerificationNewCodeTimer(epoch));
        let _ = state.update(Msg::VerificationRequestNewCode);
        assert!(state.views.verification.processing);
        assert!(!state.views.verification.can_request_new_code);
        assert_ne!(state.views.verification.epoch(), epoch);
        assert!(state.views.verification.otp.value().is_none());

        let _ = state.update(Msg::VerificationNewCodeResult(Ok(())));
        assert!(!state.views.verification.processing);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, Kind::Info);
        assert_eq!(toast.message, NEW_CODE_MESSAGE);
    }

    #[test]
    fn keystrokes_ignored_on_credentials() {
        let mut state = state();
        type_code(&mut state, "123456");
        assert_eq!(state.views.verification.code, 0);
        assert!(state.views.verification.otp.value().is_none());
    }

    #[tokio::test]
    async fn full_flow_against_mock() {
        let mut state = state();
        fill_credentials(&mut state, mock::VALID_EMAIL, mock::VALID_PASSWORD);
        let _ = state.update(Msg::CredentialsSubmit);
        let res = state
            .backend
            .login(mock::VALID_EMAIL, mock::VALID_PASSWORD)
            .await;
        let _ = state.update(Msg::CredentialsResult(res));
        assert_eq!(state.phase(), Phase::Verification);

        type_code(&mut state, "123456");
        let _ = state.update(Msg::VerificationSubmit);
        let res = state.backend.verify_code(state.views.verification.code).await;
        let _ = state.update(Msg::VerificationResult(res));
        assert_eq!(
            state.session.as_ref().map(|s| s.email.as_str()),
            Some(mock::VALID_EMAIL)
        );
    }

    #[tokio::test]
    async fn failed_login_against_mock() {
        let mut state = state();
        fill_credentials(&mut state, mock::FAIL_EMAIL, "anything");
        let _ = state.update(Msg::CredentialsSubmit);
        let res = state.backend.login(mock::FAIL_EMAIL, "anything").await;
        let _ = state.update(Msg::CredentialsResult(res));

        assert_eq!(state.phase(), Phase::Credentials);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, Kind::Error);
        assert_eq!(toast.message, mock::INVALID_CREDENTIALS_MESSAGE);
    }
}
