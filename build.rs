// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Fall back to hardcoded defaults if config.yaml is missing
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const POLL_INTERVAL_MS: u64 = {poll_interval_ms};
pub const TAB_COLOR: &str = {tab_color:?};
pub const SHOW_IMAGES: bool = {show_images};

pub const LOG_FILE: &str = {log_file:?};
pub const LOG_LEVEL: &str = {log_level:?};
"#,
        mouse_enabled = config.mouse_enabled,
        poll_interval_ms = config.poll_interval_ms,
        tab_color = config.tab_color,
        show_images = config.show_images,
        log_file = config.log_file,
        log_level = config.log_level,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    poll_interval_ms: u64,
    tab_color: String,
    show_images: bool,
    log_file: String,
    log_level: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            poll_interval_ms: 50,
            tab_color: "cyan".to_string(),
            show_images: true,
            log_file: "tab-panels.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple section-aware YAML parsing (no external dependencies in build script)
    let mut in_ui = false;
    let mut in_logging = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("ui:") {
            in_ui = true;
            in_logging = false;
            continue;
        } else if trimmed.starts_with("logging:") {
            in_ui = false;
            in_logging = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_ui {
                match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "poll_interval_ms" => config.poll_interval_ms = value.parse().unwrap_or(50),
                    "tab_color" => config.tab_color = unquote(value).to_string(),
                    "show_images" => config.show_images = parse_bool(value),
                    _ => {}
                }
            } else if in_logging {
                match key {
                    "log_file" => config.log_file = unquote(value).to_string(),
                    "level" => config.log_level = unquote(value).to_string(),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Strip inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
