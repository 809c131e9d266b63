//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so both can be exercised off the browser.

pub mod dark_mode;
