// Tab Panels Library
// An accessible ARIA-style tab widget hosted in a terminal UI

// Core infrastructure - host document, tab controller, app state
pub mod core;

// UI - TUI components and views
pub mod ui;

// Re-export commonly used items for convenience
pub use core::{App, AppConfig, Document, ElementId, HostDocument, TabController};
