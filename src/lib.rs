//! City Drive Library
//!
//! A 3D city driving simulator whose core can run independently or with a
//! Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
