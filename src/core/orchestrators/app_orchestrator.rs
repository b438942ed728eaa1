use std::sync::Arc;

use iced::widget::{
    button, column, container, image, markdown, row, scrollable, text, tooltip, Space,
};
use iced::window::{self, Id};
use iced::{Alignment, Background, Color, Element, Length, Task};

use crate::core::interfaces::ports::{
    ClipboardPort, ImageAnalysisPort, ImageFilePicker, ScreenCapturer,
};
use crate::core::models::{AnalysisResult, ImageInput, ImageSlot, ImageSlots, ImageSource, ThemeMode};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct AppOrchestrator {
    image_analyzer: Arc<dyn ImageAnalysisPort>,
    clipboard: Arc<dyn ClipboardPort>,
    screen_capturer: Arc<dyn ScreenCapturer>,
    image_file_picker: Arc<dyn ImageFilePicker>,
    image_slots: ImageSlots,
    analysis_output: Option<String>,
    analysis_markdown: Vec<markdown::Item>,
    is_analyzing: bool,
    status: String,
    theme_mode: ThemeMode,
    main_window_id: Option<Id>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    UploadImage,
    PasteFromClipboard,
    CaptureScreen,
    PerformCapture,
    ImageLoaded(ImageSource, ImageInput),
    ImageLoadCancelled,
    ImageLoadFailed(ImageSource, String),
    ClearSlot(ImageSlot),
    AnalyzeImage,
    AnalysisComplete(AnalysisResult),
    CopyResult,
    LinkClicked(markdown::Uri),
}

impl OrchestratorMessage {
    pub fn name(&self) -> &'static str {
        match self {
            OrchestratorMessage::OpenMainWindow => "OpenMainWindow",
            OrchestratorMessage::WindowClosed(_) => "WindowClosed",
            OrchestratorMessage::UploadImage => "UploadImage",
            OrchestratorMessage::PasteFromClipboard => "PasteFromClipboard",
            OrchestratorMessage::CaptureScreen => "CaptureScreen",
            OrchestratorMessage::PerformCapture => "PerformCapture",
            OrchestratorMessage::ImageLoaded(_, _) => "ImageLoaded",
            OrchestratorMessage::ImageLoadCancelled => "ImageLoadCancelled",
            OrchestratorMessage::ImageLoadFailed(_, _) => "ImageLoadFailed",
            OrchestratorMessage::ClearSlot(_) => "ClearSlot",
            OrchestratorMessage::AnalyzeImage => "AnalyzeImage",
            OrchestratorMessage::AnalysisComplete(_) => "AnalysisComplete",
            OrchestratorMessage::CopyResult => "CopyResult",
            OrchestratorMessage::LinkClicked(_) => "LinkClicked",
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        image_analyzer: Arc<dyn ImageAnalysisPort>,
        clipboard: Arc<dyn ClipboardPort>,
        screen_capturer: Arc<dyn ScreenCapturer>,
        image_file_picker: Arc<dyn ImageFilePicker>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            image_analyzer,
            clipboard,
            screen_capturer,
            image_file_picker,
            image_slots: ImageSlots::default(),
            analysis_output: None,
            analysis_markdown: Vec::new(),
            is_analyzing: false,
            status: global_constants::STATUS_READY.to_string(),
            theme_mode,
            main_window_id: None,
        }
    }

    pub fn attach_main_window(&mut self, window_id: Id) {
        self.main_window_id = Some(window_id);
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {}", message.name());
        log::debug!("[ORCHESTRATOR] Message payload: {:?}", message);

        match message {
            OrchestratorMessage::UploadImage => self.handle_upload_image(),
            OrchestratorMessage::PasteFromClipboard => self.handle_paste_from_clipboard(),
            OrchestratorMessage::CaptureScreen => self.handle_capture_screen(),
            OrchestratorMessage::PerformCapture => self.handle_perform_capture(),
            OrchestratorMessage::ImageLoaded(source, image) => {
                self.handle_image_loaded(source, image)
            }
            OrchestratorMessage::ImageLoadCancelled => {
                self.status = global_constants::STATUS_READY.to_string();
                Task::none()
            }
            OrchestratorMessage::ImageLoadFailed(source, error) => {
                self.handle_image_load_failed(source, error)
            }
            OrchestratorMessage::ClearSlot(slot) => {
                self.image_slots.clear(slot);
                self.status = global_constants::STATUS_READY.to_string();
                Task::none()
            }
            OrchestratorMessage::AnalyzeImage => self.handle_analyze_image(),
            OrchestratorMessage::AnalysisComplete(result) => self.handle_analysis_complete(result),
            OrchestratorMessage::CopyResult => self.handle_copy_result(),
            OrchestratorMessage::LinkClicked(uri) => {
                log::debug!("[ORCHESTRATOR] Ignoring link in analysis output: {}", uri);
                Task::none()
            }
            OrchestratorMessage::OpenMainWindow | OrchestratorMessage::WindowClosed(_) => {
                log::debug!("[ORCHESTRATOR] Window lifecycle message ignored by orchestrator");
                Task::none()
            }
        }
    }

    fn handle_upload_image(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Opening file picker");
        self.status = "Choosing an image...".to_string();

        let file_picker = Arc::clone(&self.image_file_picker);

        Task::future(async move {
            match file_picker.pick_image().await {
                Ok(Some(image)) => OrchestratorMessage::ImageLoaded(ImageSource::Upload, image),
                Ok(None) => OrchestratorMessage::ImageLoadCancelled,
                Err(e) => {
                    log::error!("[ORCHESTRATOR] Failed to load image file: {:#}", e);
                    OrchestratorMessage::ImageLoadFailed(ImageSource::Upload, e.to_string())
                }
            }
        })
    }

    fn handle_paste_from_clipboard(&mut self) -> Task<OrchestratorMessage> {
        match self.clipboard.read_image() {
            Ok(image) => self.handle_image_loaded(ImageSource::Clipboard, image),
            Err(e) => {
                log::error!("[ORCHESTRATOR] Clipboard paste failed: {:#}", e);
                self.handle_image_load_failed(ImageSource::Clipboard, e.to_string())
            }
        }
    }

    fn handle_capture_screen(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Starting capture screen process");
        self.status = "Preparing to capture...".to_string();

        log::debug!("[ORCHESTRATOR] Minimizing main window and waiting 200ms before capture");
        Task::batch(vec![
            match self.main_window_id {
                Some(id) => window::minimize(id, true),
                None => Task::none(),
            },
            Task::future(async {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                OrchestratorMessage::PerformCapture
            }),
        ])
    }

    fn handle_perform_capture(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Performing screen capture");
        self.status = "Capturing screen...".to_string();

        let screen_capturer = Arc::clone(&self.screen_capturer);

        Task::future(async move {
            match screen_capturer.capture_primary_screen() {
                Ok(image) => {
                    log::info!(
                        "[ORCHESTRATOR] Screen captured successfully: {}x{}",
                        image.width,
                        image.height
                    );
                    OrchestratorMessage::ImageLoaded(ImageSource::ScreenCapture, image)
                }
                Err(e) => {
                    log::error!("[ORCHESTRATOR] Screen capture failed: {:#}", e);
                    OrchestratorMessage::ImageLoadFailed(ImageSource::ScreenCapture, e.to_string())
                }
            }
        })
    }

    fn restore_after_capture(&self, source: ImageSource) -> Task<OrchestratorMessage> {
        match (source, self.main_window_id) {
            (ImageSource::ScreenCapture, Some(id)) => {
                window::minimize(id, false).chain(window::gain_focus(id))
            }
            _ => Task::none(),
        }
    }

    fn handle_image_loaded(
        &mut self,
        source: ImageSource,
        image: ImageInput,
    ) -> Task<OrchestratorMessage> {
        if image.is_empty() {
            log::warn!("[ORCHESTRATOR] Ignoring empty image from {}", source);
            self.status = format!("Error: the image from {} is empty", source);
            return self.restore_after_capture(source);
        }

        log::info!(
            "[ORCHESTRATOR] Image loaded from {}: {}x{}",
            source,
            image.width,
            image.height
        );
        self.image_slots.place(source, image);
        self.status = format!("Image ready from {}", source);

        self.restore_after_capture(source)
    }

    fn handle_image_load_failed(
        &mut self,
        source: ImageSource,
        error: String,
    ) -> Task<OrchestratorMessage> {
        self.status = format!("Failed to load image from {}: {}", source, error);
        self.restore_after_capture(source)
    }

    fn handle_analyze_image(&mut self) -> Task<OrchestratorMessage> {
        if self.is_analyzing {
            log::warn!("[ORCHESTRATOR] Analysis already in progress");
            return Task::none();
        }

        let selected_image = self.image_slots.select_for_analysis();
        log::info!(
            "[ORCHESTRATOR] Starting analysis, image selected: {}",
            selected_image.is_some()
        );

        self.is_analyzing = true;
        self.status = global_constants::STATUS_ANALYZING.to_string();

        let image_analyzer = Arc::clone(&self.image_analyzer);

        Task::future(async move {
            let result = image_analyzer.analyze(selected_image).await;
            OrchestratorMessage::AnalysisComplete(result)
        })
    }

    fn handle_analysis_complete(&mut self, result: AnalysisResult) -> Task<OrchestratorMessage> {
        self.is_analyzing = false;
        log::info!(
            "[ORCHESTRATOR] Analysis finished, completed: {}",
            result.is_completed()
        );
        self.status = match &result {
            AnalysisResult::Completed(_) => "Ready - analysis complete".to_string(),
            AnalysisResult::MissingInput => "No image selected".to_string(),
            AnalysisResult::ContentBlocked { reason } => format!("Analysis blocked ({})", reason),
            AnalysisResult::ServiceFault => "Error - analysis failed".to_string(),
        };
        let output = result.to_string();
        self.analysis_markdown = markdown::parse(&output).collect();
        self.analysis_output = Some(output);
        Task::none()
    }

    fn handle_copy_result(&mut self) -> Task<OrchestratorMessage> {
        let Some(output) = self.analysis_output.as_deref() else {
            log::debug!("[ORCHESTRATOR] Nothing to copy yet");
            return Task::none();
        };

        match self.clipboard.copy_text(output) {
            Ok(()) => self.status = "Result copied to clipboard".to_string(),
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to copy result: {:#}", e);
                self.status = format!("Failed to copy result: {}", e);
            }
        }
        Task::none()
    }

    pub fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.theme_mode);

        let title = text(format!("🖼️ {} 📝", global_constants::APPLICATION_TITLE)).size(32);
        let subtitle = text(
            "Upload an image, paste from your clipboard, or capture your screen. The AI will provide a detailed analysis.",
        )
        .size(14)
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
        });

        let header_section = column![title, subtitle].spacing(6);

        let content = column![
            header_section,
            Space::new().height(Length::Fixed(16.0)),
            row![self.render_input_column(), self.render_output_column()]
                .spacing(20)
                .height(Length::Fill),
            self.render_status_indicator(),
        ]
        .spacing(8)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_input_column(&self) -> Element<'_, OrchestratorMessage> {
        let source_buttons = row![
            button(text("⬆️ Upload").size(14))
                .padding([10, 16])
                .style(app_theme::secondary_button_style(&self.theme_mode))
                .on_press(OrchestratorMessage::UploadImage),
            button(text("📋 Paste").size(14))
                .padding([10, 16])
                .style(app_theme::secondary_button_style(&self.theme_mode))
                .on_press(OrchestratorMessage::PasteFromClipboard),
            tooltip(
                button(text("📸 Capture Screen").size(14))
                    .padding([10, 16])
                    .style(app_theme::secondary_button_style(&self.theme_mode))
                    .on_press(OrchestratorMessage::CaptureScreen),
                container(text(global_constants::CAPTURE_SOURCE_HINT).size(12))
                    .padding(8)
                    .style(|_theme| app_theme::panel_style(&self.theme_mode)),
                tooltip::Position::Bottom,
            ),
        ]
        .spacing(8);

        let analyze_button = button(
            row![text("🔍").size(18), text("Analyze Image").size(16)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding([14, 36])
        .style(app_theme::primary_button_style)
        .on_press_maybe((!self.is_analyzing).then_some(OrchestratorMessage::AnalyzeImage));

        let column_content = column![
            source_buttons,
            self.render_slot_preview("Upload & Paste", ImageSlot::Upload),
            self.render_slot_preview("Screen Capture", ImageSlot::Capture),
            analyze_button,
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        container(column_content)
            .padding(16)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(|_theme| app_theme::panel_style(&self.theme_mode))
            .into()
    }

    fn slot_placeholder(slot: ImageSlot) -> &'static str {
        match slot {
            ImageSlot::Upload => "No image selected",
            ImageSlot::Capture => global_constants::CAPTURE_SOURCE_HINT,
        }
    }

    fn render_slot_preview(
        &self,
        label: &'static str,
        slot: ImageSlot,
    ) -> Element<'_, OrchestratorMessage> {
        let preview_height = Length::Fixed(170.0);

        let preview: Element<'_, OrchestratorMessage> = match self.image_slots.get(slot) {
            Some(selected) => image(selected.image_handle.clone())
                .width(Length::Fill)
                .height(preview_height)
                .into(),
            None => container(
                text(Self::slot_placeholder(slot))
                    .size(13)
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                    }),
            )
            .width(Length::Fill)
            .height(preview_height)
            .center_x(Length::Fill)
            .center_y(preview_height)
            .into(),
        };

        let clear_button = button(text("✖ Clear").size(12))
            .padding([4, 10])
            .style(app_theme::secondary_button_style(&self.theme_mode))
            .on_press_maybe(
                self.image_slots
                    .get(slot)
                    .map(|_| OrchestratorMessage::ClearSlot(slot)),
            );

        column![
            row![text(label).size(14).width(Length::Fill), clear_button].align_y(Alignment::Center),
            preview,
        ]
        .spacing(6)
        .into()
    }

    fn render_output_column(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.theme_mode);

        let output_content: Element<'_, OrchestratorMessage> = match self.analysis_output {
            Some(_) => markdown::view(&self.analysis_markdown, &theme)
                .map(OrchestratorMessage::LinkClicked),
            None => text(global_constants::OUTPUT_PLACEHOLDER)
                .size(15)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                })
                .into(),
        };

        let output_area = scrollable(container(output_content).padding(12).width(Length::Fill))
            .height(Length::Fill);

        let copy_button = button(text("📋 Copy Result").size(14))
            .padding([10, 16])
            .style(app_theme::secondary_button_style(&self.theme_mode))
            .on_press_maybe(
                self.analysis_output
                    .as_ref()
                    .filter(|_| !self.is_analyzing)
                    .map(|_| OrchestratorMessage::CopyResult),
            );

        let column_content = column![text("AI Analysis").size(18), output_area, copy_button]
            .spacing(10);

        container(column_content)
            .padding(16)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(|_theme| app_theme::panel_style(&self.theme_mode))
            .into()
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let status_color = match self.status.as_str() {
            s if s.contains("Ready") => Color::from_rgb(0.2, 0.8, 0.4),
            s if s.contains("Analyzing") || s.contains("Capturing") || s.contains("Preparing") => {
                Color::from_rgb(1.0, 0.8, 0.2)
            }
            s if s.contains("Error") || s.contains("Failed") || s.contains("blocked") => {
                Color::from_rgb(1.0, 0.3, 0.3)
            }
            _ => Color::from_rgba(0.5, 0.5, 0.5, 1.0),
        };

        let status_text = row![
            text("●")
                .size(12)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(status_color),
                }),
            text(&self.status)
                .size(13)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(status_text).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockImageAnalyzer;

    #[async_trait]
    impl ImageAnalysisPort for MockImageAnalyzer {
        async fn analyze(&self, _image: Option<ImageInput>) -> AnalysisResult {
            AnalysisResult::Completed("mock analysis".to_string())
        }
    }

    struct MockClipboard {
        image_available: bool,
        copied_texts: Mutex<Vec<String>>,
    }

    impl MockClipboard {
        fn with_image() -> Self {
            Self {
                image_available: true,
                copied_texts: Mutex::new(Vec::new()),
            }
        }

        fn without_image() -> Self {
            Self {
                image_available: false,
                copied_texts: Mutex::new(Vec::new()),
            }
        }
    }

    impl ClipboardPort for MockClipboard {
        fn read_image(&self) -> anyhow::Result<ImageInput> {
            if self.image_available {
                Ok(create_test_image(3, 3))
            } else {
                anyhow::bail!("No image found on the clipboard")
            }
        }

        fn copy_text(&self, text: &str) -> anyhow::Result<()> {
            self.copied_texts.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct MockScreenCapturer;

    impl ScreenCapturer for MockScreenCapturer {
        fn capture_primary_screen(&self) -> anyhow::Result<ImageInput> {
            Ok(create_test_image(16, 9))
        }
    }

    struct MockFilePicker;

    #[async_trait]
    impl ImageFilePicker for MockFilePicker {
        async fn pick_image(&self) -> anyhow::Result<Option<ImageInput>> {
            Ok(Some(create_test_image(2, 2)))
        }
    }

    fn create_test_image(width: u32, height: u32) -> ImageInput {
        ImageInput::build_from_raw_data(width, height, vec![255u8; (width * height * 4) as usize])
    }

    fn create_test_orchestrator(clipboard: Arc<MockClipboard>) -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockImageAnalyzer),
            clipboard,
            Arc::new(MockScreenCapturer),
            Arc::new(MockFilePicker),
            ThemeMode::Light,
        )
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        assert!(orchestrator.analysis_output.is_none());
        assert!(!orchestrator.is_analyzing);
        assert!(orchestrator.main_window_id.is_none());
        assert_eq!(orchestrator.status, global_constants::STATUS_READY);
        assert!(orchestrator.image_slots.select_for_analysis().is_none());
    }

    #[test]
    fn test_paste_from_clipboard_fills_upload_slot() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::PasteFromClipboard);

        let pasted = orchestrator.image_slots.get(ImageSlot::Upload).unwrap();
        assert_eq!(pasted.width, 3);
        assert!(orchestrator.status.contains("clipboard"));
    }

    #[test]
    fn test_paste_without_clipboard_image_reports_failure() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::without_image()));

        let _ = orchestrator.update(OrchestratorMessage::PasteFromClipboard);

        assert!(orchestrator.image_slots.get(ImageSlot::Upload).is_none());
        assert!(orchestrator.status.starts_with("Failed to load image from clipboard"));
    }

    #[test]
    fn test_screen_capture_fills_capture_slot() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(
            ImageSource::ScreenCapture,
            create_test_image(16, 9),
        ));

        assert!(orchestrator.image_slots.get(ImageSlot::Capture).is_some());
        assert!(orchestrator.image_slots.get(ImageSlot::Upload).is_none());
    }

    #[test]
    fn test_empty_image_is_not_placed() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(
            ImageSource::Upload,
            ImageInput::build_from_raw_data(0, 0, Vec::new()),
        ));

        assert!(orchestrator.image_slots.get(ImageSlot::Upload).is_none());
        assert!(orchestrator.status.contains("empty"));
    }

    #[test]
    fn test_image_load_failure_updates_status() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::ImageLoadFailed(
            ImageSource::Upload,
            "unsupported format".to_string(),
        ));

        assert!(orchestrator.status.contains("unsupported format"));
    }

    #[test]
    fn test_clear_slot_removes_image() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));
        let _ = orchestrator.update(OrchestratorMessage::PasteFromClipboard);

        let _ = orchestrator.update(OrchestratorMessage::ClearSlot(ImageSlot::Upload));

        assert!(orchestrator.image_slots.get(ImageSlot::Upload).is_none());
    }

    #[test]
    fn test_analyze_marks_analysis_in_progress() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::AnalyzeImage);

        assert!(orchestrator.is_analyzing);
        assert_eq!(orchestrator.status, global_constants::STATUS_ANALYZING);
    }

    #[test]
    fn test_analysis_complete_shows_result_text() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));
        let _ = orchestrator.update(OrchestratorMessage::AnalyzeImage);

        let _ = orchestrator.update(OrchestratorMessage::AnalysisComplete(
            AnalysisResult::Completed("Hello world".to_string()),
        ));

        assert!(!orchestrator.is_analyzing);
        assert_eq!(orchestrator.analysis_output.as_deref(), Some("Hello world"));
        assert!(orchestrator.status.contains("Ready"));
    }

    #[test]
    fn test_analysis_complete_parses_markdown_and_keeps_raw_text() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::AnalysisComplete(
            AnalysisResult::Completed("**1. Extracted Text:**\n\nHello".to_string()),
        ));

        assert!(!orchestrator.analysis_markdown.is_empty());
        assert_eq!(
            orchestrator.analysis_output.as_deref(),
            Some("**1. Extracted Text:**\n\nHello")
        );
    }

    #[test]
    fn test_blocked_result_is_rendered_as_markdown() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::AnalysisComplete(
            AnalysisResult::content_blocked(Some("SAFETY")),
        ));

        assert!(orchestrator.analysis_markdown.len() >= 2);
        assert!(orchestrator
            .analysis_output
            .as_deref()
            .unwrap()
            .contains("**safety**"));
    }

    #[test]
    fn test_message_name_omits_payload() {
        let message = OrchestratorMessage::AnalysisComplete(AnalysisResult::Completed(
            "private model output".to_string(),
        ));

        assert_eq!(message.name(), "AnalysisComplete");
        assert!(!message.name().contains("private"));
    }

    #[test]
    fn test_capture_slot_placeholder_explains_screen_capture() {
        assert_eq!(
            AppOrchestrator::slot_placeholder(ImageSlot::Capture),
            global_constants::CAPTURE_SOURCE_HINT
        );
        assert!(global_constants::CAPTURE_SOURCE_HINT.contains("webcam"));
        assert_eq!(
            AppOrchestrator::slot_placeholder(ImageSlot::Upload),
            "No image selected"
        );
    }

    #[test]
    fn test_analysis_fault_shows_retry_message() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));

        let _ = orchestrator.update(OrchestratorMessage::AnalysisComplete(
            AnalysisResult::ServiceFault,
        ));

        assert_eq!(
            orchestrator.analysis_output.as_deref(),
            Some(global_constants::MESSAGE_SERVICE_FAULT)
        );
        assert!(orchestrator.status.contains("Error"));
    }

    #[test]
    fn test_copy_result_sends_output_to_clipboard() {
        let clipboard = Arc::new(MockClipboard::with_image());
        let mut orchestrator = create_test_orchestrator(Arc::clone(&clipboard));
        let _ = orchestrator.update(OrchestratorMessage::AnalysisComplete(
            AnalysisResult::Completed("copy me".to_string()),
        ));

        let _ = orchestrator.update(OrchestratorMessage::CopyResult);

        assert_eq!(*clipboard.copied_texts.lock().unwrap(), vec!["copy me".to_string()]);
    }

    #[test]
    fn test_copy_result_without_output_does_nothing() {
        let clipboard = Arc::new(MockClipboard::with_image());
        let mut orchestrator = create_test_orchestrator(Arc::clone(&clipboard));

        let _ = orchestrator.update(OrchestratorMessage::CopyResult);

        assert!(clipboard.copied_texts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_attach_main_window_records_id() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::with_image()));
        let id = Id::unique();

        orchestrator.attach_main_window(id);

        assert_eq!(orchestrator.main_window_id, Some(id));
    }
}
