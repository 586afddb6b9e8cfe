/// Expands to the `file:line` of the call site.
#[macro_export]
macro_rules! code_location {
  () => {
    concat!(file!(), ":", line!())
  };
}

/// Checks a condition; on failure prints the diagnostic line to stderr and
/// raises a catchable [`CheckFailure`](crate::CheckFailure).
///
/// `assert_check!(cond)` reports the stringified condition;
/// `assert_check!(cond, text)` reports `text` instead.
#[cfg(feature = "checks")]
#[macro_export]
macro_rules! assert_check {
  ($cond:expr $(,)?) => {
    $crate::diag::assert_check($cond, stringify!($cond), $crate::code_location!())
  };
  ($cond:expr, $text:expr $(,)?) => {
    $crate::diag::assert_check($cond, $text, $crate::code_location!())
  };
}

/// Judge stub: forwards to the platform assertion primitive. A failure
/// here follows the standard panic path, not a catchable failure.
#[cfg(not(feature = "checks"))]
#[macro_export]
macro_rules! assert_check {
  ($cond:expr $(,)?) => {
    ::std::debug_assert!($cond)
  };
  ($cond:expr, $text:expr $(,)?) => {
    ::std::debug_assert!($cond, "{}", $text)
  };
}

/// Like `assert_check!` but only prints; a failed warning never raises.
#[cfg(feature = "checks")]
#[macro_export]
macro_rules! warn_check {
  ($cond:expr $(,)?) => {
    $crate::diag::warn_check($cond, stringify!($cond), $crate::code_location!())
  };
}

/// Judge stub: does nothing and does not evaluate the condition.
#[cfg(not(feature = "checks"))]
#[macro_export]
macro_rules! warn_check {
  ($cond:expr $(,)?) => {
    ()
  };
}

/// Prints `expr = value` (Debug formatting) with the call-site location.
/// The expression is evaluated exactly once.
#[cfg(feature = "checks")]
#[macro_export]
macro_rules! debug_print {
  ($expr:expr $(,)?) => {
    $crate::diag::debug_print(
      stringify!($expr),
      &format!("{:?}", $expr),
      $crate::code_location!(),
    )
  };
}

/// Judge stub: does nothing and does not evaluate the expression.
#[cfg(not(feature = "checks"))]
#[macro_export]
macro_rules! debug_print {
  ($expr:expr $(,)?) => {
    ()
  };
}

/// Marks code that must never run; prints and raises when it does.
#[cfg(feature = "checks")]
#[macro_export]
macro_rules! unreachable_code {
  () => {
    $crate::diag::unreachable("", $crate::code_location!())
  };
  ($text:expr $(,)?) => {
    $crate::diag::unreachable($text, $crate::code_location!())
  };
}

/// Judge stub: terminates the process instead of raising.
#[cfg(not(feature = "checks"))]
#[macro_export]
macro_rules! unreachable_code {
  () => {
    ::std::process::exit(42)
  };
  ($text:expr $(,)?) => {
    ::std::process::exit(42)
  };
}

#[cfg(all(test, feature = "checks"))]
mod tests {
  use crate::catch::catch_failure;

  #[test]
  fn test_code_location_format() {
    let location = crate::code_location!();
    let (file, line) = location.rsplit_once(':').unwrap();
    assert!(file.ends_with("macros.rs"));
    assert!(line.parse::<u32>().is_ok());
  }

  #[test]
  fn test_assert_check_defaults_to_stringified_condition() {
    let x = 3;
    let failure = catch_failure(|| {
      crate::assert_check!(x == 4);
    })
    .unwrap_err();
    assert_eq!(failure.message(), "x == 4");
    assert!(failure.location().contains("macros.rs:"));
  }

  #[test]
  fn test_assert_check_explicit_text_wins() {
    let failure = catch_failure(|| {
      crate::assert_check!(false, "explicit wins");
    })
    .unwrap_err();
    assert_eq!(failure.message(), "explicit wins");
  }

  #[test]
  fn test_warn_check_returns_normally() {
    let x = 1;
    crate::warn_check!(x == 1);
    crate::warn_check!(x == 2);
  }

  #[test]
  fn test_debug_print_evaluates_once() {
    let mut calls = 0;
    let mut next = || {
      calls += 1;
      calls
    };
    crate::debug_print!(next());
    assert_eq!(calls, 1);
  }

  #[test]
  fn test_unreachable_code_default_text_is_empty() {
    let failure = catch_failure(|| {
      crate::unreachable_code!();
    })
    .unwrap_err();
    assert_eq!(failure.message(), "");
  }

  #[test]
  fn test_unreachable_code_with_text() {
    let failure = catch_failure(|| {
      crate::unreachable_code!("oops");
    })
    .unwrap_err();
    assert_eq!(failure.message(), "oops");
  }
}
