//! Six segment one-time-code entry.
//!
//! Each segment holds at most one ASCII digit. The widget owns the focus
//! position: typing into a segment advances it, Backspace on an empty segment
//! moves it back, arrows move it within bounds. Once every segment holds a
//! digit the assembled integer is reported through [`Edit::completed`].

use tfa_login_api::CODE_LENGTH;

pub const LAST_INDEX: usize = CODE_LENGTH - 1;

/// Navigation keys handled by the widget itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKey {
    Backspace,
    ArrowLeft,
    ArrowRight,
}

/// A keystroke aimed at the focused segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Key(OtpKey),
}

/// Result of an accepted change of the segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edit {
    /// Segment that should receive the focus.
    pub focus: Option<usize>,
    /// Assembled code, set when all the segments are filled.
    pub completed: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Edited(Edit),
    Moved(usize),
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpInput {
    digits: [Option<char>; CODE_LENGTH],
    focused: usize,
}

impl Default for OtpInput {
    fn default() -> Self {
        Self::new(0)
    }
}

impl OtpInput {
    /// Decompose `value` into zero-padded digits, `0` gives empty segments.
    pub fn new(value: u32) -> Self {
        let mut digits = [None; CODE_LENGTH];
        if value != 0 {
            // A value wider than the widget keeps its first digits.
            for (slot, c) in digits.iter_mut().zip(format!("{:06}", value).chars()) {
                *slot = Some(c);
            }
        }
        Self {
            digits,
            focused: 0,
        }
    }

    pub fn digits(&self) -> &[Option<char>; CODE_LENGTH] {
        &self.digits
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// The assembled code if every segment holds a digit.
    pub fn value(&self) -> Option<u32> {
        self.digits.iter().try_fold(0u32, |acc, digit| {
            digit
                .and_then(|c| c.to_digit(10))
                .map(|d| acc * 10 + d)
        })
    }

    /// New content of segment `index`.
    ///
    /// Anything but an empty string or a single ASCII digit is rejected and
    /// leaves the widget untouched.
    pub fn handle_change(&mut self, index: usize, value: &str) -> Option<Edit> {
        if index >= CODE_LENGTH {
            return None;
        }
        let mut chars = value.chars();
        let digit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => return None,
        };
        self.digits[index] = digit;

        let focus = (digit.is_some() && index < LAST_INDEX).then_some(index + 1);
        self.focused = focus.unwrap_or(index);
        Some(Edit {
            focus,
            completed: self.value(),
        })
    }

    /// Focus movement for navigation keys, returns the newly focused segment.
    pub fn handle_key(&mut self, key: OtpKey) -> Option<usize> {
        let target = match key {
            OtpKey::Backspace if self.digits[self.focused].is_none() => self.focused.checked_sub(1),
            OtpKey::Backspace => None,
            OtpKey::ArrowLeft => self.focused.checked_sub(1),
            OtpKey::ArrowRight => (self.focused < LAST_INDEX).then_some(self.focused + 1),
        }?;
        self.focused = target;
        Some(target)
    }

    /// Route a keystroke to the focused segment.
    ///
    /// A typed character is appended to the segment content, so typing over a
    /// filled segment yields two characters and is rejected. Backspace on a
    /// filled segment empties it.
    pub fn keystroke(&mut self, keystroke: Keystroke) -> Outcome {
        let index = self.focused;
        match keystroke {
            Keystroke::Char(c) => {
                let value: String = self.digits[index].into_iter().chain(Some(c)).collect();
                self.handle_change(index, &value)
                    .map_or(Outcome::Ignored, Outcome::Edited)
            }
            Keystroke::Key(OtpKey::Backspace) if self.digits[index].is_some() => self
                .handle_change(index, "")
                .map_or(Outcome::Ignored, Outcome::Edited),
            Keystroke::Key(key) => self
                .handle_key(key)
                .map_or(Outcome::Ignored, Outcome::Moved),
        }
    }

    /// Fill the segments from pasted text.
    ///
    /// Non-digits are dropped and the rest truncated to the widget width.
    /// Segments are overwritten from the first one, those past the pasted
    /// digits are emptied. The returned focus targets the first empty segment
    /// or the last one, it must be applied once the new digits are rendered.
    pub fn handle_paste(&mut self, text: &str) -> Option<Edit> {
        let pasted: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
        if pasted.is_empty() {
            return None;
        }

        let mut digits = [None; CODE_LENGTH];
        for (slot, c) in digits.iter_mut().zip(pasted) {
            *slot = Some(c);
        }
        self.digits = digits;

        let focus = self
            .digits
            .iter()
            .position(Option::is_none)
            .unwrap_or(LAST_INDEX);
        Some(Edit {
            focus: Some(focus),
            completed: self.value(),
        })
    }

    /// Empty every segment and focus the first one.
    pub fn clear(&mut self) {
        *self = Self::new(0);
    }

    /// Move the focus to `index`, out of range indexes are ignored.
    pub fn focus(&mut self, index: usize) -> bool {
        if index < CODE_LENGTH {
            self.focused = index;
            true
        } else {
            false
        }
    }
}
