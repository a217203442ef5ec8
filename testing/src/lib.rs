//! # Activity Tracker Testing
//!
//! Testing utilities for reducers built on `activity-tracker-core`.
//!
//! This crate provides:
//! - Deterministic environment implementations (`FixedClock`, `SequentialIdGenerator`)
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use activity_tracker_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(ActivityReducer::new())
//!     .with_env(test_environment())
//!     .given_state(ActivityState::new())
//!     .when_action(ActivityAction::ShowForm)
//!     .then_state(|state| assert!(state.is_form_visible()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use activity_tracker_core::environment::{Clock, IdGenerator};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;


/// Deterministic implementations of environment traits
pub mod mocks {
    use super::{AtomicU64, Clock, DateTime, IdGenerator, Ordering, Utc, Uuid};

    /// Fixed clock for deterministic tests
    ///
    /// # Example
    ///
    /// ```
    /// use activity_tracker_testing::mocks::FixedClock;
    /// use activity_tracker_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which cannot happen.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable id generator: yields UUIDs 1, 2, 3, ...
    ///
    /// ```
    /// use activity_tracker_testing::mocks::SequentialIdGenerator;
    /// use activity_tracker_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start a fresh sequence
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// How many ids have been handed out
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

pub use mocks::{FixedClock, SequentialIdGenerator, test_clock};
pub use reducer_test::{ReducerTest, assertions};
