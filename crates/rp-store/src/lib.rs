//! Identifier-keyed store for scored receipts.
//!
//! A receipt is scored once, on submission, and kept together with its points
//! under a freshly generated [`ReceiptId`](rp_types::ReceiptId). Lookups by id
//! return the stored points, or nothing for ids that were never issued.
//!
//! # Storage Backends
//!
//! All backends implement the [`ReceiptStore`] trait:
//!
//! - [`InMemoryReceiptStore`] -- `RwLock<HashMap>` store, lost on restart
//!
//! # Design Rules
//!
//! 1. A record is written exactly once and never updated or removed.
//! 2. The receipt and its points live in one record, so neither can exist
//!    without the other.
//! 3. Id generation and insertion happen under one write guard; no reader
//!    can observe a half-written record.
//! 4. Lookups take a shared read guard and run concurrently with each other.
//! 5. Ids come from an injected [`IdGenerator`] and are never reused.

pub mod error;
pub mod id;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use memory::InMemoryReceiptStore;
pub use traits::ReceiptStore;
