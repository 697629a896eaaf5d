//! Reusable rendering helpers

pub mod placement;
pub mod scrollbar;
