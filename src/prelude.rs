//! Prelude module for plain_date crate.
//!
//! Re-exports the value type and the traits its methods live on.

pub use crate::PlainDate;
pub use crate::interface::DateTimeValue;
pub use crate::locale::LocaleFormatter;
