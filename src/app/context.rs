//! Usage: Tauri-managed state shared by window/tray callbacks and commands.
//!
//! - `AppContext`: quit flag + running ticker, consulted by every lifecycle callback.
//! - `AppService`: backend façade handed to commands; holds a handle back to the app.

use super::ticker::TickerHandle;
use crate::error::{AppError, AppResult};
use crate::shared::mutex_ext::MutexExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use tauri::{AppHandle, Runtime};

#[derive(Default)]
pub struct AppContext {
    quitting: AtomicBool,
    ticker: Mutex<Option<TickerHandle>>,
}

impl AppContext {
    /// Store the running ticker; a previously installed ticker is stopped.
    pub fn install_ticker(&self, ticker: TickerHandle) {
        let previous = self.ticker.lock_or_recover().replace(ticker);
        if let Some(previous) = previous {
            tracing::warn!("ticker 重复启动，停止旧实例");
            previous.stop();
        }
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.lock_or_recover().is_some()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }

    /// Mark the app as quitting and stop the ticker.
    ///
    /// Returns `false` if quitting had already begun.
    pub fn begin_quit(&self) -> bool {
        if self.quitting.swap(true, Ordering::SeqCst) {
            return false;
        }

        if let Some(ticker) = self.ticker.lock_or_recover().take() {
            ticker.stop();
        }
        true
    }
}

/// Backend service exposed to the frontend.
///
/// The app handle is attached once at startup. The service only reads and drives
/// app state through it; the app's lifetime is governed by the event loop.
pub struct AppService<R: Runtime = tauri::Wry> {
    app: OnceLock<AppHandle<R>>,
}

impl<R: Runtime> Default for AppService<R> {
    fn default() -> Self {
        Self {
            app: OnceLock::new(),
        }
    }
}

impl<R: Runtime> AppService<R> {
    pub fn service_startup(&self, app: AppHandle<R>) {
        if self.app.set(app).is_err() {
            tracing::warn!("AppService 已启动，忽略重复的 startup");
        }
    }

    pub fn app(&self) -> AppResult<&AppHandle<R>> {
        self.app.get().ok_or(AppError::ServiceNotStarted)
    }
}
