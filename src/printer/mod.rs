//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Paper width specifications

pub mod config;

pub use config::PrinterConfig;
