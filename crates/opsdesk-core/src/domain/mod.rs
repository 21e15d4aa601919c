//! Domain types for the operator console.
//!
//! These are plain data types with no storage or terminal concerns.

mod collection;
mod stats;
mod user;

pub use collection::{Collection, HIDDEN_RECORD_PREFIX, is_hidden_record};
pub use stats::{HostStats, LoadAverage};
pub use user::{CREDENTIAL_FIELD, User};
