//! CLI library components for sheetmap.

pub mod logging;
