//! Schedule classification and auto-completion for appointments and
//! medications.
//!
//! Layers, leaves first:
//!
//! ```text
//! effective   parse dates, is_past / is_upcoming_or_due_today
//!     │
//! classifier  active vs past buckets, ordered
//!     │
//! transition  scheduled → completed, one atomic batch via RecordStore
//! ```
//!
//! Everything above `transition` is pure. Reads never write.

mod classifier;
mod effective;
mod store;
mod summary;
mod transition;

pub use classifier::*;
pub use effective::*;
pub use store::*;
pub use summary::*;
pub use transition::*;
