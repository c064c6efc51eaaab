use iced::{widget::text_input, Length};

use crate::{component::text, theme, widget::*};

/// Content of an input with its validation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: String::new(),
            warning: None,
            valid: true,
        }
    }
}

/// Labelled text input showing the warning of an invalid value under it.
pub struct Form<'a, Message> {
    label: &'a str,
    input: TextInput<'a, Message>,
    warning: Option<&'static str>,
    show_warning: bool,
}

impl<'a, Message> Form<'a, Message>
where
    Message: 'a + Clone,
{
    fn with_input(label: &'a str, value: &Value<String>, input: TextInput<'a, Message>) -> Self {
        Self {
            label,
            input,
            warning: value.warning,
            show_warning: !value.valid,
        }
    }

    /// Creates a new [`Form`], `on_change` gets the raw input.
    pub fn new<F>(label: &'a str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        let input = TextInput::new(label, &value.value).on_input(on_change);
        Self::with_input(label, value, input)
    }

    /// Creates a new [`Form`] whose input cannot be edited.
    pub fn new_disabled(label: &'a str, value: &Value<String>) -> Self {
        Self::with_input(label, value, TextInput::new(label, &value.value))
    }

    /// Creates a new [`Form`] that trims the input before `on_change`.
    pub fn new_trimmed<F>(label: &'a str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        let input = TextInput::new(label, &value.value)
            .on_input(move |s| on_change(s.trim().to_string()));
        Self::with_input(label, value, input)
    }

    /// Sets the id of the input, used to focus it.
    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(text_input::Id::new(id));
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the message produced when Enter is pressed, if any
    pub fn on_submit_maybe(mut self, msg: Option<Message>) -> Self {
        if let Some(msg) = msg {
            self.input = self.input.on_submit(msg);
        }
        self
    }

    /// Renders an invalid value as a valid one.
    pub fn hide_warning(mut self) -> Self {
        self.show_warning = false;
        self
    }

    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let (input, warning) = if form.show_warning {
            (
                form.input.style(theme::text_input::invalid),
                form.warning
                    .map(|warning| text::caption(warning).style(theme::text::error)),
            )
        } else {
            (form.input, None)
        };

        Column::new()
            .push(text::p2_regular(form.label).style(theme::text::secondary))
            .push(input)
            .push_maybe(warning)
            .width(Length::Fill)
            .spacing(5)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Msg {
        Changed(String),
    }

    #[test]
    fn warning_follows_validity() {
        let value = Value {
            value: "test@".to_string(),
            warning: Some("Invalid"),
            valid: false,
        };
        let form = Form::new("Email", &value, Msg::Changed);
        assert!(form.show_warning);
        assert_eq!(form.warning, Some("Invalid"));
        assert!(!form.hide_warning().show_warning);

        let form: Form<'_, Msg> = Form::new_disabled("Email", &Value::default());
        assert!(!form.show_warning);
    }
}
