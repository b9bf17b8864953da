//! The numpin informer reports how many pins a peer holds. Only its
//! configuration lives here; `metric_ttl` bounds how long a reported value
//! is trusted before it counts as stale.

pub mod config;

pub use config::Config;
