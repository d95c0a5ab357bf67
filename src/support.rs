//! Supporting utilities used by models.
//!
//! These modules are public because they're useful to callers preparing model
//! inputs, but their APIs are not stable.

pub mod constraint;
