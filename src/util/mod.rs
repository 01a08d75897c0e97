//! Browser glue behind small capability seams.
//!
//! Each module pairs a pure decision (theme resolution, scroll thresholds,
//! acknowledgment text) with the `browser`-gated side effect that applies
//! it, so the decisions test natively.

pub mod clipboard;
pub mod dark_mode;
pub mod scroll;
