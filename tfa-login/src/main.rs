use std::{error::Error, sync::Arc};

use clap::Parser;
use iced::{widget::text_input, Pixels, Settings, Subscription, Task};
use tfa_login::{
    args::{Args, Config},
    client::AuthService,
    logger,
    state::{views::credentials::EMAIL_INPUT_ID, Msg, State},
};
use tfa_login_ui::theme::Theme;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::try_from(Args::parse())?;
    logger::setup_logger(config.log_level, config.log_file.as_deref())?;
    tracing::info!("Using {:?} backend", config.backend);

    let backend = config.backend.service();

    let settings = Settings {
        default_font: tfa_login_ui::font::REGULAR,
        default_text_size: Pixels(16.0),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: iced::Size::new(520.0, 720.0),
        min_size: Some(iced::Size::new(420.0, 560.0)),
        ..Default::default()
    };

    iced::application(LoginApp::title, LoginApp::update, LoginApp::view)
        .theme(|_| Theme::default())
        .settings(settings)
        .window(window_settings)
        .subscription(LoginApp::subscription)
        .run_with(move || LoginApp::new(backend))?;

    Ok(())
}

pub struct LoginApp {
    state: State,
}

impl LoginApp {
    pub fn new(backend: Arc<dyn AuthService>) -> (Self, Task<Msg>) {
        (
            Self {
                state: State::new(backend),
            },
            text_input::focus(text_input::Id::new(EMAIL_INPUT_ID)),
        )
    }

    pub fn title(&self) -> String {
        "Sign in".to_string()
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        self.state.subscription()
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    pub fn view(&self) -> tfa_login_ui::widget::Element<'_, Msg> {
        self.state.view()
    }
}
