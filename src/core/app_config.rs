// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for tab-panels
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and input settings
    pub ui: UiSettings,

    /// Log destination and verbosity
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Capture mouse events (tab clicks)
    pub mouse_enabled: bool,

    /// Event poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Accent color for the selected tab
    pub tab_color: String,

    /// Render the auxiliary image pane
    pub show_images: bool,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// File receiving log output (the terminal belongs to the UI)
    pub log_file: String,

    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            poll_interval_ms: compiled::POLL_INTERVAL_MS,
            tab_color: compiled::TAB_COLOR.to_string(),
            show_images: compiled::SHOW_IMAGES,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_file: compiled::LOG_FILE.to_string(),
            level: compiled::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
