use std::sync::Arc;

use iced::window::{self, Id};
use iced::{Element, Size, Task};

use crate::adapters::GeminiVisionService;
use crate::core::interfaces::ports::{
    ClipboardPort, ImageAnalysisPort, ImageFilePicker, ScreenCapturer,
};
use crate::core::models::{AppConfig, ConfigError};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::ImageAnalyzer;
use crate::global_constants;
use crate::ports::{ArboardClipboard, RfdImageFilePicker, XcapScreenCapturer};
use crate::presentation::ConfigErrorView;

pub struct AppDependencies {
    pub image_analyzer: Arc<dyn ImageAnalysisPort>,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub screen_capturer: Arc<dyn ScreenCapturer>,
    pub image_file_picker: Arc<dyn ImageFilePicker>,
}

enum AppState {
    Ready(AppOrchestrator),
    ConfigurationError(ConfigErrorView),
}

pub struct ImageToTextApp {
    state: AppState,
    main_window_id: Option<Id>,
}

impl ImageToTextApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        Self::build_with_config(
            AppConfig::load_from_environment(),
            Self::build_production_dependencies,
        )
    }

    /// The factory only runs for a valid configuration, so nothing reaches
    /// the inference service when the API key is missing.
    pub fn build_with_config<F>(
        config: Result<AppConfig, ConfigError>,
        build_dependencies: F,
    ) -> (Self, Task<OrchestratorMessage>)
    where
        F: FnOnce(&AppConfig) -> AppDependencies,
    {
        let state = match config {
            Ok(config) => {
                log::info!("[APP] Configuration loaded: {:?}", config);
                let dependencies = build_dependencies(&config);
                AppState::Ready(AppOrchestrator::build(
                    dependencies.image_analyzer,
                    dependencies.clipboard,
                    dependencies.screen_capturer,
                    dependencies.image_file_picker,
                    config.theme_mode,
                ))
            }
            Err(e) => {
                log::error!("[APP] Configuration error: {}", e);
                AppState::ConfigurationError(ConfigErrorView::build(&e))
            }
        };

        (
            Self {
                state,
                main_window_id: None,
            },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    fn build_production_dependencies(config: &AppConfig) -> AppDependencies {
        let inference_service = Arc::new(GeminiVisionService::from_config(config));

        AppDependencies {
            image_analyzer: Arc::new(ImageAnalyzer::new(inference_service)),
            clipboard: Arc::new(ArboardClipboard::new()),
            screen_capturer: Arc::new(XcapScreenCapturer::initialize()),
            image_file_picker: Arc::new(RfdImageFilePicker::new()),
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.state, AppState::Ready(_))
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match message {
            OrchestratorMessage::OpenMainWindow => self.open_main_window(),
            OrchestratorMessage::WindowClosed(id) => {
                if self.main_window_id == Some(id) {
                    log::info!("[APP] Main window closed, exiting");
                    iced::exit()
                } else {
                    Task::none()
                }
            }
            other => match &mut self.state {
                AppState::Ready(orchestrator) => orchestrator.update(other),
                AppState::ConfigurationError(_) => {
                    log::debug!("[APP] Ignoring {:?} while configuration is invalid", other);
                    Task::none()
                }
            },
        }
    }

    fn open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            return Task::none();
        }

        let size = if self.is_interactive() {
            Size::new(1000.0, 700.0)
        } else {
            Size::new(600.0, 300.0)
        };

        let (id, task) = window::open(window::Settings {
            size,
            position: window::Position::Centered,
            resizable: self.is_interactive(),
            ..Default::default()
        });

        log::info!("[APP] Opened main window {:?}", id);
        self.main_window_id = Some(id);
        if let AppState::Ready(orchestrator) = &mut self.state {
            orchestrator.attach_main_window(id);
        }

        task.discard()
    }

    pub fn render_view(&self, _window_id: Id) -> Element<'_, OrchestratorMessage> {
        match &self.state {
            AppState::Ready(orchestrator) => orchestrator.render_main_window(),
            AppState::ConfigurationError(view) => view.render_ui(),
        }
    }

    pub fn window_title(&self, _window_id: Id) -> String {
        match self.state {
            AppState::Ready(_) => global_constants::APPLICATION_TITLE.to_string(),
            AppState::ConfigurationError(_) => {
                global_constants::CONFIG_ERROR_WINDOW_TITLE.to_string()
            }
        }
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })
    }
}
