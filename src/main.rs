use gui::App;
use iced::{Application, Settings};
use influmatch_core::{AppConfig, CoreError};
use match_client::MatchClient;
use std::sync::Arc;

fn main() -> Result<(), CoreError> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    tracing::info!(
        "Starting Influmatch against {} (locale {})",
        config.api_base_url,
        config.locale
    );

    let client = Arc::new(MatchClient::from_config(&config)?);

    let settings = Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1000.0, 800.0),
            min_size: Some(iced::Size::new(720.0, 560.0)),
            ..Default::default()
        },
        ..Settings::with_flags(client)
    };

    InflumatchApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Internal {
            message: format!("GUI error: {e}"),
        }
    })
}

struct InflumatchApp {
    app: App,
}

impl Application for InflumatchApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = Arc<MatchClient>;

    fn new(client: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!("Initializing application");
        let (app, command) = App::new(client);
        (Self { app }, command)
    }

    fn title(&self) -> String {
        match self.app.state().selected_brand() {
            Some(brand) => format!("Influmatch - {brand}"),
            None => "Influmatch".to_string(),
        }
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        self.app.update(message)
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }
}
