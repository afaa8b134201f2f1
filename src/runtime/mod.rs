//! Launcher startup: layout derivation through driver exit.
mod startup;

pub use startup::{run_launcher, RuntimeExit};
