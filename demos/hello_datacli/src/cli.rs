//! Command-line arguments for the `hello_datacli` demo.

use datacli::DataCli;

/// Prints a greeting for the configured recipient.
#[derive(Debug, Clone, PartialEq, Eq, DataCli)]
#[datacli(name = "hello-datacli")]
pub struct Greeting {
    /// Person to greet.
    #[datacli(cli_short = 'r', env = "HELLO_RECIPIENT")]
    pub recipient: String,
    /// Word opening the greeting.
    #[datacli(cli_short = 's', default = String::from("Hello"))]
    pub salutation: String,
    /// Punctuation closing the greeting.
    #[datacli(env = "HELLO_PUNCTUATION", env_fallback = "!")]
    pub punctuation: String,
    /// Number of times to print the greeting.
    #[datacli(cli_short = 'n', default = 1)]
    pub repeat: u8,
    /// Line printed once before the greetings.
    pub preamble: Option<String>,
    /// Shout the greeting.
    #[datacli(cli_short = 'e')]
    pub excited: bool,
}
