//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module owns one concern (`theme`, `toast`) and exposes a `Copy`
//! context handle so components deep in the tree can reach it.

pub mod theme;
pub mod toast;
