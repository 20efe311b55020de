//! Interactive terminal demonstrator for the gridpath search algorithms.
//!
//! Place a start, an end and some barriers, then watch DFS, BFS or IDDFS
//! explore the grid step by step.

pub mod app;
pub mod config;
pub mod editor;
pub mod input;

pub use app::run;
pub use config::DemoConfig;
pub use editor::{Command, Editor, Effect, Report};
