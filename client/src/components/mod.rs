//! Reusable UI components.

pub mod theme_switcher;
pub mod toaster;
