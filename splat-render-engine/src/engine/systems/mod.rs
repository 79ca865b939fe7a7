//! Core runtime systems for diagnostics.

/// FPS tracking for the native UI overlay.
pub mod fps_tracking;
