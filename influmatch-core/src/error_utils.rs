use crate::error::*;
use crate::locale::{Locale, Text};
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self, locale: Locale) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::MatchApi(e) => {
                error!("Matching API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self, locale: Locale) -> String {
        match self {
            CoreError::MatchApi(e) => e.user_friendly_message(locale),
            CoreError::Config(e) => e.user_friendly_message(locale),
            CoreError::Network(e) if e.is_timeout() => {
                Text::TimeoutNotice.in_locale(locale).to_string()
            }
            CoreError::Network(_) => Text::NetworkNotice.in_locale(locale).to_string(),
            CoreError::Serialization(_) => {
                Text::InvalidResponseNotice.in_locale(locale).to_string()
            }
            CoreError::InvalidInput { .. } => {
                Text::InvalidInputNotice.in_locale(locale).to_string()
            }
            CoreError::Io(_) | CoreError::Internal { .. } => {
                Text::UnexpectedNotice.in_locale(locale).to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::MatchApi(e) => e.error_code(),
            CoreError::Config(e) => e.error_code(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for MatchApiError {
    fn log_error(&self) -> &Self {
        error!("MatchApiError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("MatchApiError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self, locale: Locale) -> String {
        match self {
            MatchApiError::HttpStatus { status_code, .. } => format!(
                "{} (HTTP {})",
                Text::ServerNotice.in_locale(locale),
                status_code
            ),
            MatchApiError::InvalidResponse { .. } => {
                Text::InvalidResponseNotice.in_locale(locale).to_string()
            }
            MatchApiError::RequestTimeout => Text::TimeoutNotice.in_locale(locale).to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            MatchApiError::HttpStatus { .. } => "MATCH_API_HTTP_STATUS".to_string(),
            MatchApiError::InvalidResponse { .. } => "MATCH_API_INVALID_RESPONSE".to_string(),
            MatchApiError::RequestTimeout => "MATCH_API_TIMEOUT".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self, locale: Locale) -> String {
        format!("{} ({})", Text::ConfigNotice.in_locale(locale), self)
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::Read { .. } => "CONFIG_READ_ERROR".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

/// User-visible message with a stable code, safe to clone into view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub code: String,
    pub message: String,
}

impl Notice {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_error(error: &CoreError, locale: Locale) -> Self {
        Self::new(error.error_code(), error.user_friendly_message(locale))
    }

    pub fn from_text(code: impl Into<String>, text: Text, locale: Locale) -> Self {
        Self::new(code, text.in_locale(locale))
    }
}

pub struct ErrorReporter {
    report_errors: bool,
    report_warnings: bool,
    locale: Locale,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            report_errors: true,
            report_warnings: true,
            locale: Locale::default(),
        }
    }

    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    pub fn with_warning_reporting(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn report_error(&self, error: &CoreError) -> Notice {
        let notice = Notice::from_error(error, self.locale);
        if self.report_errors {
            error.log_error();
            info!("Error code: {}", notice.code);
            info!("User message: {}", notice.message);
        }
        notice
    }

    pub fn report_warning(&self, error: &CoreError) -> Notice {
        if self.report_warnings {
            error.log_warn();
        }
        Notice::from_error(error, self.locale)
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
