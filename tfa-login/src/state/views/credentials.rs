use email_address::EmailAddress;
use tfa_login_api::LoginRequest;
use tfa_login_ui::component::form;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const EMAIL_WARNING: &str = "Email must be in a valid format";
pub const EMAIL_INPUT_ID: &str = "credentials_email";

/// Email and password entry
#[derive(Debug, Clone)]
pub struct CredentialsState {
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    /// Whether the email field was the last one edited
    pub email_focused: bool,
    pub processing: bool,
}

impl Default for CredentialsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::parse_with_options(
        email,
        email_address::Options::default()
            .with_required_tld()
            .without_display_text(),
    )
    .is_ok()
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

impl CredentialsState {
    pub fn new() -> Self {
        Self {
            email: form::Value {
                value: String::new(),
                warning: None,
                valid: false,
            },
            password: form::Value {
                value: String::new(),
                warning: None,
                valid: false,
            },
            email_focused: false,
            processing: false,
        }
    }

    pub fn on_update_email(&mut self, email: String) {
        self.email.valid = is_valid_email(&email);
        self.email.warning = (!self.email.valid).then_some(EMAIL_WARNING);
        self.email.value = email;
        self.email_focused = true;
    }

    pub fn on_update_password(&mut self, password: String) {
        self.password.valid = is_valid_password(&password);
        self.password.value = password;
        self.email_focused = false;
    }

    /// Recompute validity from the retained values, when the page is shown
    /// again after leaving the verification step.
    pub fn revalidate(&mut self) {
        self.email.valid = is_valid_email(&self.email.value);
        self.email.warning = (!self.email.valid).then_some(EMAIL_WARNING);
        self.password.valid = is_valid_password(&self.password.value);
    }

    pub fn can_submit(&self) -> bool {
        self.email.valid && self.password.valid && !self.processing
    }

    /// The warning is only shown for a non-empty malformed email, while the
    /// email field is the active one.
    pub fn show_email_warning(&self) -> bool {
        !self.email.valid && !self.email.value.is_empty() && self.email_focused
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("test@test.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("test"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@test.com"));
        assert!(!is_valid_email("test@test"));
        assert!(!is_valid_email("Test <test@test.com>"));
    }

    #[test]
    fn password_length() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("a much longer passphrase"));
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut state = CredentialsState::new();
        assert!(!state.can_submit());

        state.on_update_email("test@test.com".to_string());
        assert!(!state.can_submit());

        state.on_update_password("1234567".to_string());
        assert!(!state.can_submit());

        state.on_update_password("12345678".to_string());
        assert!(state.can_submit());

        state.processing = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn email_warning_visibility() {
        let mut state = CredentialsState::new();
        assert!(!state.show_email_warning());

        state.on_update_email("test@".to_string());
        assert!(state.show_email_warning());
        assert_eq!(state.email.warning, Some(EMAIL_WARNING));

        // Moving to the password field hides it.
        state.on_update_password("x".to_string());
        assert!(!state.show_email_warning());

        // Empty email never warns.
        state.on_update_email(String::new());
        assert!(!state.show_email_warning());

        state.on_update_email("test@test.com".to_string());
        assert!(!state.show_email_warning());
        assert_eq!(state.email.warning, None);
    }

    #[test]
    fn revalidate_keeps_values() {
        let mut state = CredentialsState::new();
        state.email.value = "test@test.com".to_string();
        state.password.value = "12345678".to_string();
        assert!(!state.can_submit());

        state.revalidate();
        assert!(state.can_submit());
        assert_eq!(
            state.request(),
            LoginRequest {
                email: "test@test.com".to_string(),
                password: "12345678".to_string(),
            }
        );
    }
}
