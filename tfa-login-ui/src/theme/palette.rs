use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub segments: Segments,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
    pub success: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
    pub info: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

/// Colors of a single OTP segment, by state
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segments {
    pub idle: ButtonPalette,
    pub focused: ButtonPalette,
    pub invalid: ButtonPalette,
}

const INPUT: TextInputPalette = TextInputPalette {
    background: color::WHITE,
    icon: color::GREY_500,
    placeholder: color::GREY_400,
    value: color::GREY_800,
    selection: color::BLUE_400,
    border: Some(color::GREY_300),
};

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_50,
            },
            text: Text {
                primary: color::GREY_900,
                secondary: color::GREY_500,
                error: color::RED_500,
                success: color::GREEN_600,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE_600,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::BLUE_700,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLUE_800,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::DISABLED_BACKGROUND,
                        text: color::DISABLED_TEXT,
                        border: Some(color::DISABLED_BORDER),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_800,
                        border: Some(color::GREY_300),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_100,
                        text: color::GREY_900,
                        border: Some(color::BLUE_400),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::DISABLED_BACKGROUND,
                        text: color::DISABLED_TEXT,
                        border: Some(color::DISABLED_BORDER),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_800,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_100,
                        text: color::GREY_900,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_100),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN_50,
                    text: Some(color::GREEN_600),
                    border: Some(color::GREEN_600),
                },
                error: ContainerPalette {
                    background: color::RED_50,
                    text: Some(color::RED_500),
                    border: Some(color::RED_500),
                },
                info: ContainerPalette {
                    background: color::BLUE_50,
                    text: Some(color::BLUE_700),
                    border: Some(color::BLUE_500),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: INPUT,
                    focused: TextInputPalette {
                        border: Some(color::BLUE_400),
                        ..INPUT
                    },
                    disabled: TextInputPalette {
                        background: color::DISABLED_BACKGROUND,
                        value: color::DISABLED_TEXT,
                        ..INPUT
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        border: Some(color::RED_500),
                        ..INPUT
                    },
                    focused: TextInputPalette {
                        border: Some(color::RED_500),
                        ..INPUT
                    },
                    disabled: TextInputPalette {
                        background: color::DISABLED_BACKGROUND,
                        value: color::DISABLED_TEXT,
                        border: Some(color::RED_500),
                        ..INPUT
                    },
                },
            },
            segments: Segments {
                idle: ButtonPalette {
                    background: color::WHITE,
                    text: color::GREY_900,
                    border: Some(color::GREY_300),
                },
                focused: ButtonPalette {
                    background: color::WHITE,
                    text: color::GREY_900,
                    border: Some(color::BLUE_500),
                },
                invalid: ButtonPalette {
                    background: color::WHITE,
                    text: color::GREY_900,
                    border: Some(color::RED_500),
                },
            },
        }
    }
}
