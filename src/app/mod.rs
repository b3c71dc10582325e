//! EchoChamber application module: terminal lifecycle, workers and event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{RunOptions, run, spawn_search_worker};
