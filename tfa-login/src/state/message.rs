use tfa_login_api::TokenResponse;

use super::views::otp::Keystroke;
use crate::client::AuthError;

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Credentials
    CredentialsUpdateEmail(String),
    CredentialsUpdatePassword(String),
    CredentialsSubmit,
    CredentialsResult(Result<(), AuthError>),

    // Verification
    OtpKeystroke(Keystroke),
    OtpPaste,
    OtpPasted(Option<String>),
    OtpFocus(usize),
    VerificationSubmit,
    VerificationResult(Result<TokenResponse, AuthError>),
    VerificationNewCodeTimer(u64),
    VerificationRequestNewCode,
    VerificationNewCodeResult(Result<(), AuthError>),
    NavigateBack,

    // Notifications
    ToastExpired(u64),
    ToastDismiss,
}
