use tfa_login_api::CODE_LENGTH;

use super::otp::{Edit, OtpInput};

/// One-time code entry
#[derive(Debug, Clone, Default)]
pub struct VerificationState {
    pub otp: OtpInput,
    /// Last completed code, 0 while none was entered
    pub code: u32,
    pub invalid: bool,
    pub processing: bool,
    pub can_request_new_code: bool,
    /// Bumped on every entry and exit, a new code timer only counts if it
    /// carries the current value.
    epoch: u64,
}

impl VerificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the page, the segments start from the retained code.
    ///
    /// Returns the epoch the new code timer must be armed with.
    pub fn enter(&mut self) -> u64 {
        self.otp = OtpInput::new(self.code);
        self.can_request_new_code = false;
        self.epoch += 1;
        self.epoch
    }

    /// Leave the page, pending timers become stale.
    pub fn leave(&mut self) {
        self.can_request_new_code = false;
        self.epoch += 1;
    }

    /// Start a new wait for the new code affordance.
    pub fn rearm(&mut self) -> u64 {
        self.can_request_new_code = false;
        self.epoch += 1;
        self.epoch
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns false if the timer is stale.
    pub fn on_new_code_timer(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.can_request_new_code = true;
        true
    }

    /// Any segment edit drops the invalid marker.
    pub fn on_input_changed(&mut self) {
        self.invalid = false;
    }

    pub fn on_code_changed(&mut self, code: u32) {
        self.code = code;
    }

    pub fn on_edit(&mut self, edit: Edit) {
        self.on_input_changed();
        if let Some(code) = edit.completed {
            self.on_code_changed(code);
        }
    }

    /// A code only counts once its decimal form has all six digits, a code
    /// starting with 0 does not.
    pub fn has_code(&self) -> bool {
        self.code.to_string().len() == CODE_LENGTH
    }

    pub fn can_continue(&self) -> bool {
        self.has_code() && !self.processing
    }

    pub fn show_new_code(&self) -> bool {
        self.can_request_new_code && !self.has_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::views::otp::{Keystroke, Outcome};

    #[test]
    fn stale_timer_is_ignored() {
        let mut state = VerificationState::new();
        let first = state.enter();
        state.leave();
        assert!(!state.on_new_code_timer(first));
        assert!(!state.can_request_new_code);

        let second = state.enter();
        assert_ne!(first, second);
        assert!(!state.on_new_code_timer(first));
        assert!(state.on_new_code_timer(second));
        assert!(state.show_new_code());
    }

    #[test]
    fn rearm_hides_the_affordance() {
        let mut state = VerificationState::new();
        let epoch = state.enter();
        state.on_new_code_timer(epoch);
        let next = state.rearm();
        assert!(!state.can_request_new_code);
        assert!(!state.on_new_code_timer(epoch));
        assert!(state.on_new_code_timer(next));
    }

    #[test]
    fn edit_clears_invalid_before_completion() {
        let mut state = VerificationState::new();
        state.enter();
        state.invalid = true;

        state.on_edit(Edit {
            focus: Some(1),
            completed: None,
        });
        assert!(!state.invalid);
        assert!(!state.can_continue());

        state.invalid = true;
        state.on_edit(Edit {
            focus: None,
            completed: Some(111111),
        });
        assert!(!state.invalid);
        assert_eq!(state.code, 111111);
        assert!(state.can_continue());
        assert!(!state.show_new_code());
    }

    #[test]
    fn reentry_restores_segments() {
        let mut state = VerificationState::new();
        state.enter();
        for c in "123456".chars() {
            if let Outcome::Edited(edit) = state.otp.keystroke(Keystroke::Char(c)) {
                state.on_edit(edit);
            }
        }
        assert_eq!(state.code, 123456);

        state.leave();
        state.enter();
        assert_eq!(state.otp.value(), Some(123456));
        assert_eq!(state.otp.focused(), 0);
    }

    #[test]
    fn leading_zero_code_is_incomplete() {
        let mut state = VerificationState::new();
        let epoch = state.enter();
        state.on_new_code_timer(epoch);

        state.on_code_changed(12345);
        assert!(!state.has_code());
        assert!(!state.can_continue());
        assert!(state.show_new_code());

        state.on_code_changed(100000);
        assert!(state.can_continue());
        assert!(!state.show_new_code());
    }

    #[test]
    fn processing_blocks_continue() {
        let mut state = VerificationState::new();
        state.on_code_changed(123456);
        assert!(state.can_continue());
        state.processing = true;
        assert!(!state.can_continue());
    }
}
