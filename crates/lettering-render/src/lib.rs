//! Lettering Render Library
//!
//! Graphics context implementations for Lettering.
//! The default implementation shapes text with Parley and encodes it into a Vello scene.

#[cfg(feature = "vello-renderer")]
mod vello_impl;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{VelloContext, VelloText};
