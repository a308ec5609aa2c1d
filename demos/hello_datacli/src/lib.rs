//! Library facade for the `hello_datacli` demo so integration tests can reuse
//! the argument record and greeting helpers.

pub mod cli;
pub mod error;
pub mod message;
