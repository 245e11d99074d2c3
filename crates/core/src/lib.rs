// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod catalog;
mod clock;
pub mod coordinator;
pub mod engine;
mod error;
mod filter;
mod ledger;
mod salon;
mod state;
mod storage;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::Assignment;
pub use error::{CoreError, StorageError};
pub use filter::{AppointmentFilter, GroomerFilter};
pub use ledger::{CommissionLedger, PointsLedger};
pub use salon::Salon;
pub use state::State;
pub use storage::{CollectionKey, CollectionWrite, MemoryStorage, Storage};
pub use store::EntityStore;
