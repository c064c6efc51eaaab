pub mod credentials;
pub mod otp;
pub mod verification;

pub use credentials::CredentialsState;
pub use verification::VerificationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Credentials,
    Verification,
}

/// View-specific states
#[derive(Debug, Clone)]
pub struct ViewsState {
    pub current: Phase,
    pub credentials: CredentialsState,
    pub verification: VerificationState,
}

impl ViewsState {
    pub fn new() -> Self {
        Self {
            current: Phase::Credentials,
            credentials: CredentialsState::new(),
            verification: VerificationState::new(),
        }
    }
}

impl Default for ViewsState {
    fn default() -> Self {
        Self::new()
    }
}
