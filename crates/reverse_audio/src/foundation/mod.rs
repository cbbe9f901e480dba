//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types for positional playback
//! - Typed handle collections for asset storage
//! - Logging setup

pub mod math;
pub mod collections;
pub mod logging;
