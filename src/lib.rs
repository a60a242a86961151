mod app;
mod commands;
mod error;
mod shared;

pub(crate) use app::{context, options, resident, ticker};

use commands::*;
use context::{AppContext, AppService};
use options::APP_OPTIONS;
use tauri::Manager;

pub fn run() {
    let builder = tauri::Builder::default()
        .manage(AppContext::default())
        .manage(AppService::<tauri::Wry>::default())
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            resident::show_main_window(app);
        }))
        .plugin(tauri_plugin_opener::init());

    let app = builder
        .on_window_event(|window, event| resident::on_window_event(window, event))
        .setup(|app| {
            crate::app::logging::init(app.handle());
            tracing::info!(
                name = APP_OPTIONS.name,
                version = env!("CARGO_PKG_VERSION"),
                "应用启动"
            );

            let handle = app.handle();
            app.state::<AppService>().service_startup(handle.clone());

            resident::create_main_window(handle)?;

            if let Err(err) = resident::setup_tray(handle) {
                tracing::error!("系统托盘初始化失败: {}", err);
            }

            let ticker = ticker::start(handle, APP_OPTIONS.ticker);
            app.state::<AppContext>().install_ticker(ticker);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            greet,
            app_about_get,
            app_show_main_window,
            app_exit
        ])
        .build(tauri::generate_context!());

    let app = match app {
        Ok(app) => app,
        Err(err) => {
            crate::app::logging::init_fallback();
            tracing::error!("应用启动失败: {}", err);
            std::process::exit(1);
        }
    };

    app.run(|app_handle, event| match event {
        tauri::RunEvent::ExitRequested { code, .. } => {
            resident::on_exit_requested(app_handle.state::<AppContext>().inner(), code);
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => resident::show_main_window(app_handle),
        _ => {}
    });
}
