//! Service-layer modules.

pub mod providers;
