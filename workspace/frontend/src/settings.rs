use log::Level;
use web_sys::window;

/// Forecasting service used when neither the build nor localStorage names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const STORAGE_API_URL: &str = "medforecast_api_url";
const STORAGE_LOG_LEVEL: &str = "medforecast_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the forecasting service (e.g., "http://localhost:5000")
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            // Can be baked in at build time: MEDFORECAST_API_URL=... trunk build
            api_base_url: option_env!("MEDFORECAST_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the build environment and window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Custom settings saved in localStorage win over the defaults
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_url)) = storage.get_item(STORAGE_API_URL) {
                let api_url = api_url.trim().trim_end_matches('/');
                if !api_url.is_empty() {
                    settings.api_base_url = api_url.to_string();
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
