use iced::widget::{column, container, text};
use iced::{Alignment, Background, Color, Element, Length};

use crate::core::models::ConfigError;
use crate::global_constants;

/// Static notice shown instead of the analyzer when startup configuration
/// failed. It has no controls.
pub struct ConfigErrorView {
    error_detail: String,
}

impl ConfigErrorView {
    pub fn build(error: &ConfigError) -> Self {
        log::info!("[CONFIG_ERROR_VIEW] Creating configuration error view");
        Self {
            error_detail: error.to_string(),
        }
    }

    pub fn error_detail(&self) -> &str {
        &self.error_detail
    }

    pub fn render_ui<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let heading = text(format!("🔴 {}", global_constants::CONFIG_ERROR_HEADING))
            .size(28)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgb(0.85, 0.2, 0.2)),
            });

        let instructions = text(global_constants::CONFIG_ERROR_INSTRUCTIONS).size(16);

        let detail = text(self.error_detail())
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
            });

        let content = column![heading, instructions, detail]
            .spacing(16)
            .padding(40)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgb(0.98, 0.95, 0.95))),
                text_color: Some(Color::from_rgb(0.1, 0.1, 0.1)),
                ..Default::default()
            })
            .into()
    }
}
