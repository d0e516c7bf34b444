//! mf-core: stable foundation for maxflow.
//!
//! Contains:
//! - numeric (Real + flow tolerance + float helpers)
//! - ids (stable compact IDs for nodes and edges)
//! - timing (wall-clock timer used for solve budgets and stats)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use ids::*;
pub use numeric::*;
pub use timing::Timer;
