use std::fmt;

/// Failure raised by a failed `assert_check!` or by `unreachable_code!`.
///
/// Carries the message and the `file:line` it was raised from. `Display`
/// shows the composed description, which is what a stress loop logs when
/// it records a failing case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
  message: String,
  location: String,
  description: String,
}

impl CheckFailure {
  pub fn new(message: &str, location: &str) -> CheckFailure {
    CheckFailure {
      message: message.to_string(),
      location: location.to_string(),
      description: compose_description(message, location),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn location(&self) -> &str {
    &self.location
  }

  /// Location prefix plus message; never empty.
  pub fn description(&self) -> &str {
    &self.description
  }
}

fn compose_description(message: &str, location: &str) -> String {
  let prefix = if location.is_empty() {
    String::new()
  } else {
    format!("{location}: ")
  };
  let message = if message.is_empty() {
    "MyAssertException"
  } else {
    message
  };
  format!("{prefix}{message}")
}

impl fmt::Display for CheckFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.description)
  }
}

impl std::error::Error for CheckFailure {}
