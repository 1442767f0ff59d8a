//! Door unlocking and run endings.

pub mod graph;

pub use graph::{Ending, ProgressionGraph, UnlockRule};
