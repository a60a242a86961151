//! Crate error type.
//!
//! Errors implement `Serialize` so tauri commands can hand them to the frontend
//! as plain message strings.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Main window could not be built.
    #[error("failed to create main window: {0}")]
    Window(#[source] tauri::Error),

    /// Tray icon or one of its menu items could not be built.
    #[error("failed to build tray {what}: {source}")]
    Tray {
        what: &'static str,
        #[source]
        source: tauri::Error,
    },

    /// Frontend called into the backend before the service finished starting.
    #[error("service not started")]
    ServiceNotStarted,

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub(crate) fn tray(what: &'static str) -> impl FnOnce(tauri::Error) -> Self {
        move |source| AppError::Tray { what, source }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
