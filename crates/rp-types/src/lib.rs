//! Foundation types for the receipt processor.
//!
//! Every other `rp-*` crate depends on `rp-types`. The types here are plain
//! data: they carry no scoring logic and no storage concerns.
//!
//! # Key Types
//!
//! - [`Receipt`] -- a purchase as submitted by a client
//! - [`Item`] -- one line on a receipt
//! - [`ReceiptId`] -- opaque identifier issued on submission
//! - [`ScoreRecord`] -- a stored receipt together with its points

pub mod error;
pub mod id;
pub mod receipt;
pub mod record;

pub use error::TypeError;
pub use id::ReceiptId;
pub use receipt::{Item, Receipt};
pub use record::{Points, ScoreRecord};
