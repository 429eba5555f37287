//! Background Tasks Module
//!
//! Optional background work that runs alongside the service.
//!
//! # Tasks
//! - Expiry sweep: physically removes expired cache entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
