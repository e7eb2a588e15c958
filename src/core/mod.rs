// Core infrastructure module
// Host document model, tab behavior and application state

pub mod app;
pub mod app_config;
pub mod controller;
pub mod document;
pub mod error;
pub mod events;
pub mod markup;
pub mod validation;

pub use app::App;
pub use app_config::AppConfig;
pub use controller::TabController;
pub use document::{ElementId, HostDocument};
pub use error::DocumentError;
pub use events::{AppEvent, EventHandler};
pub use markup::{Document, Selector};
pub use validation::{validate, Diagnostic, Severity};
