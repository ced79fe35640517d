//! Puzzle solutions with automatic registration
//!
//! Each solution derives `AutoRegisterSolver`, so linking this crate is
//! enough for a binary to discover it through the plugin registry.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
