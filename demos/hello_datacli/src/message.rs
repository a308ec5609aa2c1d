//! Greeting planning and rendering for the `hello_datacli` demo.

use std::io::{self, Write};

use crate::cli::Greeting;
use crate::error::{Result, ValidationError};

/// Computed greeting ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    preamble: Option<String>,
    message: String,
    repeat: u8,
}

impl GreetingPlan {
    /// Returns the formatted greeting line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional preamble preceding the greetings.
    #[must_use]
    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }

    /// Number of times the greeting line is printed.
    #[must_use]
    pub const fn repeat(&self) -> u8 {
        self.repeat
    }
}

/// Builds a [`GreetingPlan`] from resolved arguments.
///
/// # Errors
///
/// Returns [`ValidationError`] (wrapped in the demo error) when the recipient
/// or salutation is blank, or the repeat count is zero.
///
/// # Examples
///
/// ```rust
/// use hello_datacli::cli::Greeting;
/// use hello_datacli::message::build_plan;
///
/// let greeting = Greeting {
///     recipient: String::from("Ada"),
///     salutation: String::from("Hello"),
///     punctuation: String::from("!"),
///     repeat: 1,
///     preamble: None,
///     excited: false,
/// };
/// let plan = build_plan(&greeting).expect("valid greeting");
/// assert_eq!(plan.message(), "Hello, Ada!");
/// ```
pub fn build_plan(greeting: &Greeting) -> Result<GreetingPlan> {
    let recipient = greeting.recipient.trim();
    if recipient.is_empty() {
        return Err(ValidationError::BlankRecipient.into());
    }
    let salutation = greeting.salutation.trim();
    if salutation.is_empty() {
        return Err(ValidationError::BlankSalutation.into());
    }
    if greeting.repeat == 0 {
        return Err(ValidationError::ZeroRepeat.into());
    }
    let base = format!("{salutation}, {recipient}");
    let base = if greeting.excited {
        base.to_uppercase()
    } else {
        base
    };
    let preamble = greeting
        .preamble
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from);
    tracing::debug!(
        repeat = greeting.repeat,
        excited = greeting.excited,
        "built greeting plan"
    );
    Ok(GreetingPlan {
        preamble,
        message: format!("{base}{}", greeting.punctuation.trim()),
        repeat: greeting.repeat,
    })
}

/// Writes the plan to `out`, one line per greeting.
///
/// # Errors
///
/// Returns an I/O error when writing fails.
pub fn write_plan(out: &mut impl Write, plan: &GreetingPlan) -> io::Result<()> {
    if let Some(preamble) = plan.preamble() {
        writeln!(out, "{preamble}")?;
    }
    for _ in 0..plan.repeat() {
        writeln!(out, "{}", plan.message())?;
    }
    Ok(())
}

/// Prints the plan to standard output.
///
/// # Errors
///
/// Returns an I/O error when standard output is closed.
pub fn print_plan(plan: &GreetingPlan) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_plan(&mut handle, plan)
}
