//! Error types produced while deriving and running a parser.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{DatacliError, DatacliResult};
