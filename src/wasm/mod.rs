//! WebAssembly bindings for the CPU core.
//!
//! This module provides JavaScript-callable interfaces for driving a CPU over
//! flat 64KB memory from a browser page.

pub mod api;

pub use api::Emulator6502;
