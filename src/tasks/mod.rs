//! Background Tasks Module
//!
//! Long-running work that happens off the request path. Currently a single
//! worker draining queued category refreshes.

mod refresh;

pub use refresh::RefreshQueue;
