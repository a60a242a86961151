//! Usage: Static application options (window, tray, ticker) read once at startup.

use crate::shared::time::ClockZone;
use std::time::Duration;

pub struct AppOptions {
    pub name: &'static str,
    pub description: &'static str,
    pub main_window: WindowOptions,
    pub tray: TrayOptions,
    pub ticker: TickerOptions,
}

pub struct WindowOptions {
    pub label: &'static str,
    pub title: &'static str,
    /// Path inside the embedded asset bundle.
    pub url: &'static str,
    pub width: f64,
    pub height: f64,
    pub background_rgb: (u8, u8, u8),
}

pub struct TrayOptions {
    pub id: &'static str,
    pub show_label: &'static str,
    pub quit_label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TickerOptions {
    pub event: &'static str,
    pub period: Duration,
    pub zone: ClockZone,
}

pub const APP_OPTIONS: AppOptions = AppOptions {
    name: "Resident Clock",
    description: "A tray-resident window that receives the current time every second",
    main_window: WindowOptions {
        label: "main",
        title: "Window 1",
        url: "index.html",
        width: 1240.0,
        height: 850.0,
        background_rgb: (27, 38, 54),
    },
    tray: TrayOptions {
        id: "main-tray",
        show_label: "显示主窗口",
        quit_label: "退出",
    },
    ticker: TickerOptions {
        event: "time",
        period: Duration::from_secs(1),
        zone: ClockZone::Local,
    },
};
