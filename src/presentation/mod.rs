pub mod app_theme;
mod config_error_view;

pub use config_error_view::ConfigErrorView;
