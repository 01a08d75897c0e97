//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `contact`) so individual components can
//! depend on small focused models. Everything here is plain data; signals
//! wrap these structs at the component layer.

pub mod contact;
pub mod ui;
