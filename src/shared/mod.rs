//! Usage: Cross-cutting utilities shared across the app layer.

pub(crate) mod mutex_ext;
pub(crate) mod time;

#[cfg(test)]
pub(crate) mod log_capture;
