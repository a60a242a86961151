//! Usage: Desktop resident mode (tray icon + window lifecycle hooks).

use super::context::AppContext;
use super::options::APP_OPTIONS;
use crate::error::{AppError, AppResult};
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

const TRAY_MENU_SHOW_ID: &str = "tray.show";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";

/// Window operations the resident hooks rely on.
pub(crate) trait ResidentWindow {
    fn show(&self) -> tauri::Result<()>;
    fn hide(&self) -> tauri::Result<()>;
    fn unminimize(&self) -> tauri::Result<()>;
    fn set_focus(&self) -> tauri::Result<()>;
}

macro_rules! impl_resident_window {
    ($ty:ident) => {
        impl<R: Runtime> ResidentWindow for tauri::$ty<R> {
            fn show(&self) -> tauri::Result<()> {
                tauri::$ty::show(self)
            }
            fn hide(&self) -> tauri::Result<()> {
                tauri::$ty::hide(self)
            }
            fn unminimize(&self) -> tauri::Result<()> {
                tauri::$ty::unminimize(self)
            }
            fn set_focus(&self) -> tauri::Result<()> {
                tauri::$ty::set_focus(self)
            }
        }
    };
}

impl_resident_window!(Window);
impl_resident_window!(WebviewWindow);

/// App-level operations used by tray actions.
pub(crate) trait ResidentApp {
    type Window: ResidentWindow;

    fn main_window(&self) -> Option<Self::Window>;
    fn context(&self) -> &AppContext;
    fn exit(&self, code: i32);
}

impl<R: Runtime> ResidentApp for AppHandle<R> {
    type Window = WebviewWindow<R>;

    fn main_window(&self) -> Option<Self::Window> {
        self.get_webview_window(APP_OPTIONS.main_window.label)
    }

    fn context(&self) -> &AppContext {
        self.state::<AppContext>().inner()
    }

    fn exit(&self, code: i32) {
        AppHandle::exit(self, code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrayAction {
    Show,
    Quit,
}

impl TrayAction {
    pub(crate) fn from_menu_id(id: &str) -> Option<Self> {
        match id {
            TRAY_MENU_SHOW_ID => Some(Self::Show),
            TRAY_MENU_QUIT_ID => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseDecision {
    /// Window hidden; the close request must be cancelled.
    HideToTray,
    /// Let the framework close the window.
    Proceed,
}

pub(crate) fn intercept_close<W: ResidentWindow>(
    ctx: &AppContext,
    label: &str,
    window: &W,
) -> CloseDecision {
    if label != APP_OPTIONS.main_window.label || ctx.is_quitting() {
        return CloseDecision::Proceed;
    }

    tracing::info!("窗口关闭，隐藏到系统托盘");
    if let Err(err) = window.hide() {
        tracing::warn!("隐藏主窗口失败: {}", err);
    }
    CloseDecision::HideToTray
}

pub(crate) fn reveal_main_window<A: ResidentApp>(app: &A) {
    let Some(window) = app.main_window() else {
        tracing::warn!("主窗口不存在，无法显示");
        return;
    };

    if let Err(err) = window.show() {
        tracing::warn!("显示主窗口失败: {}", err);
    }
    if let Err(err) = window.unminimize() {
        tracing::warn!("还原主窗口失败: {}", err);
    }
    if let Err(err) = window.set_focus() {
        tracing::warn!("聚焦主窗口失败: {}", err);
    }
}

pub(crate) fn quit<A: ResidentApp>(app: &A) {
    if app.context().begin_quit() {
        tracing::info!("开始退出应用");
    }
    app.exit(0);
}

/// Exit requests from any source (tray, command, OS) stop background work.
pub(crate) fn on_exit_requested(ctx: &AppContext, code: Option<i32>) {
    tracing::info!(
        ?code,
        ticker_running = ctx.ticker_running(),
        "收到退出请求，停止后台任务"
    );
    ctx.begin_quit();
}

pub(crate) fn on_tray_action<A: ResidentApp>(app: &A, action: TrayAction) {
    match action {
        TrayAction::Show => {
            tracing::info!("托盘菜单：显示主窗口");
            reveal_main_window(app);
        }
        TrayAction::Quit => {
            tracing::info!("托盘菜单：退出应用");
            quit(app);
        }
    }
}

pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> AppResult<WebviewWindow<R>> {
    let options = &APP_OPTIONS.main_window;
    let (r, g, b) = options.background_rgb;

    let url = WebviewUrl::App(options.url.into());
    let builder = WebviewWindowBuilder::new(app, options.label, url)
        .title(options.title)
        .inner_size(options.width, options.height)
        .background_color(tauri::window::Color(r, g, b, 255));

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);

    builder.build().map_err(AppError::Window)
}

pub fn setup_tray<R: Runtime>(app: &AppHandle<R>) -> AppResult<()> {
    use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
    use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

    let options = &APP_OPTIONS.tray;

    let show_item =
        MenuItem::with_id(app, TRAY_MENU_SHOW_ID, options.show_label, true, None::<&str>)
            .map_err(AppError::tray("show menu item"))?;
    let quit_item =
        MenuItem::with_id(app, TRAY_MENU_QUIT_ID, options.quit_label, true, None::<&str>)
            .map_err(AppError::tray("quit menu item"))?;
    let separator =
        PredefinedMenuItem::separator(app).map_err(AppError::tray("menu separator"))?;

    let menu = Menu::with_items(app, &[&show_item, &separator, &quit_item])
        .map_err(AppError::tray("menu"))?;

    let icon = tauri::image::Image::from_bytes(include_bytes!("../../icons/32x32.png"))
        .map_err(AppError::tray("icon"))?;

    TrayIconBuilder::with_id(options.id)
        .icon(icon)
        .tooltip(APP_OPTIONS.name)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            if let Some(action) = TrayAction::from_menu_id(event.id.as_ref()) {
                on_tray_action(app, action);
            }
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                tracing::info!("托盘图标被点击");
                reveal_main_window(tray.app_handle());
            }
        })
        .build(app)
        .map_err(AppError::tray("icon"))?;

    tracing::info!("系统托盘创建成功");
    Ok(())
}

pub fn show_main_window<R: Runtime>(app: &AppHandle<R>) {
    reveal_main_window(app);
}

fn close_requested<R, W>(window: &W, label: &str) -> CloseDecision
where
    R: Runtime,
    W: ResidentWindow + Manager<R>,
{
    let ctx = window.state::<AppContext>();
    intercept_close(ctx.inner(), label, window)
}

pub fn on_window_event<R: Runtime>(window: &tauri::Window<R>, event: &tauri::WindowEvent) {
    let tauri::WindowEvent::CloseRequested { api, .. } = event else {
        return;
    };

    if close_requested::<R, _>(window, window.label()) == CloseDecision::HideToTray {
        api.prevent_close();
    }
}
