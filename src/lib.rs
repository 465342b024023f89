//! amz-shortlist - Search Amazon and shortlist the top-rated listings under a price condition.
//!
//! Price conditions put the operator after the number and apply it to the
//! listing price: `20<` keeps listings cheaper than 20, `30>` keeps listings
//! dearer than 30.

pub mod amazon;
pub mod commands;
pub mod condition;
pub mod config;
pub mod format;
pub mod link;
pub mod listing;
pub mod pipeline;

pub use condition::{is_valid_condition, ConditionError, PriceCondition, PriceOperator};
pub use config::Config;
pub use listing::{NormalizedListing, RawListing, ResultSet};
pub use pipeline::Pipeline;
