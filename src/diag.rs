use std::panic;

use crate::failure::CheckFailure;
use crate::style::{paint, Style};

/// Builds the whole diagnostic line up front so one event is one write.
fn compose_line(location: &str, label: &str, label_style: Style, rest: &str) -> String {
  format!(
    "{}{}{}",
    paint(&format!("{location}: "), Style::Bold),
    paint(label, label_style),
    rest
  )
}

fn emit(line: String) {
  eprintln!("{line}");
}

#[cold]
#[inline(never)]
fn raise(message: &str, location: &str) -> ! {
  panic::panic_any(CheckFailure::new(message, location))
}

/// No effect when `condition` holds. Otherwise writes the diagnostic line
/// to stderr, then raises a [`CheckFailure`] with `text` and `location`.
pub fn assert_check(condition: bool, text: &str, location: &str) {
  if !condition {
    emit(compose_line(
      location,
      "assertion check failed: ",
      Style::Red,
      text,
    ));
    raise(text, location);
  }
}

/// Logs a failed check without raising. No effect when `condition` holds.
pub fn warn_check(condition: bool, expr_text: &str, location: &str) {
  if !condition {
    emit(compose_line(
      location,
      "warning check failed: ",
      Style::Magenta,
      expr_text,
    ));
  }
}

/// Unconditionally prints `expr_text = value` with the location prefix.
pub fn debug_print(expr_text: &str, value: &str, location: &str) {
  emit(compose_line(
    location,
    "debug: ",
    Style::Yellow,
    &format!("{expr_text} = {value}"),
  ));
}

/// Marks code that must never execute. Always logs, always raises.
pub fn unreachable(text: &str, location: &str) -> ! {
  emit(compose_line(
    location,
    "unreacheable code. ",
    Style::Red,
    text,
  ));
  raise(text, location)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catch::catch_failure;

  #[test]
  fn test_assert_check_passing_is_silent() {
    assert_check(true, "x > 0", "main.rs:1");
  }

  #[test]
  fn test_assert_check_failing_raises() {
    let failure = catch_failure(|| {
      assert_check(false, "custom text", "file.ext:10");
    })
    .unwrap_err();
    assert_eq!(failure.description(), "file.ext:10: custom text");
    assert_eq!(failure.message(), "custom text");
    assert_eq!(failure.location(), "file.ext:10");
  }

  #[test]
  fn test_assert_check_empty_text_falls_back() {
    let failure = catch_failure(|| {
      assert_check(false, "", "");
    })
    .unwrap_err();
    assert_eq!(failure.description(), "MyAssertException");
  }

  #[test]
  fn test_warn_check_never_raises() {
    warn_check(true, "a == b", "main.rs:2");
    warn_check(false, "a == b", "main.rs:2");
  }

  #[test]
  fn test_debug_line_contents_in_order() {
    let line = compose_line("file.ext:5", "debug: ", Style::Yellow, "x = 42");
    let location = line.find("file.ext:5").unwrap();
    let label = line.find("debug: ").unwrap();
    let expr = line.find("x = ").unwrap();
    let value = line.find("= 42").unwrap();
    assert!(location < label);
    assert!(label < expr);
    assert!(expr < value);
  }

  #[test]
  fn test_assert_line_contains_label_and_text() {
    let line = compose_line("f.rs:1", "assertion check failed: ", Style::Red, "x > 0");
    assert!(line.contains("f.rs:1: "));
    assert!(line.contains("assertion check failed: "));
    assert!(line.contains("x > 0"));
  }

  #[test]
  fn test_compose_line_is_pure() {
    let first = compose_line("f.rs:1", "debug: ", Style::Yellow, "x = 1");
    let second = compose_line("f.rs:1", "debug: ", Style::Yellow, "x = 1");
    assert_eq!(first, second);
  }

  #[test]
  fn test_unreachable_always_raises() {
    let failure = catch_failure(|| {
      unreachable("oops", "file.ext:7");
    })
    .unwrap_err();
    assert_eq!(failure.description(), "file.ext:7: oops");

    let failure = catch_failure(|| {
      unreachable("", "file.ext:8");
    })
    .unwrap_err();
    assert_eq!(failure.message(), "");
    assert_eq!(failure.location(), "file.ext:8");
  }
}
