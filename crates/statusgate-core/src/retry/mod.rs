//! Fixed-interval retry engine
//!
//! Runs an async attempt repeatedly until it reports a result, the attempt
//! budget is spent, or the attempt fails outright. Failures are never
//! retried: only an attempt that reports [`Attempt::Pending`] is tried again.
//!
//! # Example
//!
//! ```rust,no_run
//! use statusgate_core::retry::{Attempt, RetryError, RetryExecutorBuilder, RetryPolicy};
//! use std::time::Duration;
//!
//! async fn example() -> Result<u32, RetryError<std::io::Error>> {
//!     let executor = RetryExecutorBuilder::new()
//!         .with_policy(RetryPolicy::from_retry_count(3, Duration::from_secs(1)))
//!         .build();
//!
//!     executor
//!         .execute(|| async {
//!             // Report Pending until the thing you wait for is ready
//!             Ok(Attempt::Ready(42))
//!         })
//!         .await
//! }
//! ```

mod error;
mod executor;
mod observer;
mod policy;

pub use error::RetryError;
pub use executor::{RetryExecutor, RetryExecutorBuilder};
pub use observer::{NoOpObserver, RetryObserver, StatsObserver, TracingObserver};
pub use policy::{calculate_delay, Attempt, RetryPolicy};
