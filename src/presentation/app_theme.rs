use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.09, 0.10, 0.13),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.941, 0.957, 0.976),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn panel_style(mode: &ThemeMode) -> container::Style {
    let (background, border_color) = match mode {
        ThemeMode::Dark => (
            Color::from_rgba(0.2, 0.2, 0.2, 0.6),
            Color::from_rgba(0.4, 0.4, 0.4, 0.4),
        ),
        ThemeMode::Light => (Color::WHITE, Color::from_rgba(0.0, 0.0, 0.0, 0.12)),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

fn solid_button_style(background: Color, text_color: Color, border: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button_style(
            Color::from_rgb(0.275, 0.392, 0.902),
            Color::WHITE,
            Color::from_rgb(0.275, 0.392, 0.902),
            false,
        ),
        button::Status::Hovered => solid_button_style(
            Color::from_rgb(0.361, 0.475, 0.949),
            Color::WHITE,
            Color::from_rgb(0.361, 0.475, 0.949),
            false,
        ),
        button::Status::Pressed => solid_button_style(
            Color::from_rgb(0.212, 0.310, 0.757),
            Color::WHITE,
            Color::from_rgb(0.212, 0.310, 0.757),
            true,
        ),
        button::Status::Disabled => solid_button_style(
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
    }
}

pub fn secondary_button_style(
    mode: &ThemeMode,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let mode = mode.clone();
    move |_theme, status| match mode {
        ThemeMode::Dark => dark_secondary_button_style(status),
        ThemeMode::Light => light_secondary_button_style(status),
    }
}

fn dark_secondary_button_style(status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button_style(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.85, 0.85, 0.85),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
        button::Status::Hovered => solid_button_style(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
        button::Status::Pressed => solid_button_style(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.35, 0.35, 0.35),
            true,
        ),
        button::Status::Disabled => solid_button_style(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.4, 0.4, 0.4),
            Color::from_rgb(0.3, 0.3, 0.3),
            false,
        ),
    }
}

fn light_secondary_button_style(status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button_style(
            Color::from_rgb(0.95, 0.96, 0.97),
            Color::from_rgb(0.15, 0.15, 0.15),
            Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            false,
        ),
        button::Status::Hovered => solid_button_style(
            Color::from_rgb(0.89, 0.91, 0.94),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            false,
        ),
        button::Status::Pressed => solid_button_style(
            Color::from_rgb(0.84, 0.86, 0.9),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            true,
        ),
        button::Status::Disabled => solid_button_style(
            Color::from_rgb(0.97, 0.97, 0.97),
            Color::from_rgb(0.65, 0.65, 0.65),
            Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            false,
        ),
    }
}
