//! Usage: Tauri command handlers exposed to the frontend via `invoke`.

mod app;
mod greet;

pub(crate) use app::*;
pub(crate) use greet::*;
