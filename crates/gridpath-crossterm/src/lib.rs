//! Crossterm front-end for gridpath.
//!
//! Provides a [`TerminalRenderer`] that paints a [`gridpath_core::Grid`]
//! two terminal columns per cell and doubles as a
//! [`gridpath_search::StepObserver`], so a search can be animated by simply
//! passing the renderer in as the observer.

pub mod layout;
pub mod palette;
pub mod renderer;

pub use layout::Layout;
pub use renderer::TerminalRenderer;
