//! Service Module
//!
//! The refresh orchestrator tying the cache, the rate limiter and the
//! catalog client together behind one public operation.

mod trending;

pub use trending::TrendingService;
