//! Usage: App-level Tauri commands (about info, window/lifecycle control).

use crate::app::context::AppService;
use crate::app::resident;
use crate::error::AppResult;
use tauri::utils::config::BundleType;

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AppAboutInfo {
    name: String,
    description: String,
    os: String,
    arch: String,
    profile: String,
    app_version: String,
    bundle_type: Option<String>,
    run_mode: String,
}

fn run_mode(bundle_type: &Option<BundleType>) -> &'static str {
    match bundle_type {
        Some(BundleType::Nsis | BundleType::Msi | BundleType::Deb | BundleType::Rpm) => "installer",
        Some(BundleType::AppImage) => "portable",
        _ => "unknown",
    }
}

pub(crate) fn about_info(bundle_type: Option<BundleType>) -> AppAboutInfo {
    let options = &crate::app::options::APP_OPTIONS;
    AppAboutInfo {
        name: options.name.to_string(),
        description: options.description.to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        run_mode: run_mode(&bundle_type).to_string(),
        bundle_type: bundle_type.map(|t| t.to_string()),
    }
}

#[tauri::command]
pub(crate) fn app_about_get() -> AppAboutInfo {
    about_info(tauri::utils::platform::bundle_type())
}

#[tauri::command]
pub(crate) fn app_show_main_window(service: tauri::State<'_, AppService>) -> AppResult<bool> {
    let app = service.app()?;
    resident::show_main_window(app);
    Ok(true)
}

#[tauri::command]
pub(crate) fn app_exit(service: tauri::State<'_, AppService>) -> AppResult<bool> {
    let app = service.app()?.clone();
    // Let the IPC response reach the webview before the event loop winds down.
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(200));
        resident::quit(&app);
    });
    Ok(true)
}
