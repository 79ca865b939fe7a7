//! Interactive tools for deforming the sprite.
//!
//! The drag tool owns the pointer state machine: a left-button press
//! starts a drag, pointer positions are polled once per frame and
//! projected onto the deform plane, and release clears the hit point.

/// Pointer drag state and cursor-to-plane projection systems.
pub mod drag_deform;
