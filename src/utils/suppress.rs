use std::fmt::Display;

use tracing::debug;

/// Marks a side effect as best-effort: failures are logged and dropped here,
/// never propagated.
pub trait Suppress<T> {
    fn suppress(self, action: &'static str) -> Option<T>;
}

impl<T, E: Display> Suppress<T> for Result<T, E> {
    fn suppress(self, action: &'static str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(action, %err, "suppressed failure");
                None
            }
        }
    }
}
