//! Common types and utilities for the ts2rs type declaration converter.
//!
//! This crate provides foundational types used across the Resolver and
//! Emitter crates:
//! - The converter's error type (`ConvertError`)
//! - Non-fatal diagnostics accumulated during a run (`Warning`)
//! - Naming-convention conversion helpers shared by both the Resolver
//!   (variant names) and the Emitter (field/type spelling)
//! - Centralized recursion limits

pub mod error;
pub use error::ConvertError;

pub mod warning;
pub use warning::{Warning, WarningReason};

pub mod naming;

pub mod limits;
