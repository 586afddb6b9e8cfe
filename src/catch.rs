use std::panic;
use std::panic::AssertUnwindSafe;

use crate::failure::CheckFailure;

/// Runs `f`, converting a raised [`CheckFailure`] into `Err`.
///
/// Anything else that unwinds out of `f` is re-raised untouched. This is
/// the supported way to collect failing inputs in a stress loop; stress
/// closures routinely borrow their rng mutably, and a failed check unwinds
/// before that state matters, hence the `AssertUnwindSafe`.
pub fn catch_failure<T, F>(f: F) -> Result<T, CheckFailure>
where
  F: FnOnce() -> T,
{
  match panic::catch_unwind(AssertUnwindSafe(f)) {
    Ok(value) => Ok(value),
    Err(payload) => match payload.downcast::<CheckFailure>() {
      Ok(failure) => Err(*failure),
      Err(payload) => panic::resume_unwind(payload),
    },
  }
}
