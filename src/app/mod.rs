//! Usage: Application layer (Tauri-managed state, tray/window lifecycle, startup wiring).

pub(crate) mod context;
pub(crate) mod logging;
pub(crate) mod options;
pub(crate) mod resident;
pub(crate) mod ticker;
