//! Caller-defined flag values: the settable capability and flag callbacks.

use std::fmt;

use crate::error::BoxError;

/// A type that converts flag text into itself.
///
/// Implement this for domain types that should be usable as flag fields
/// without going through the built-in scalar conversions. Errors are
/// returned to the registry unchanged.
///
/// # Examples
///
/// ```
/// use flagbind::{BoxError, FlagValue};
///
/// #[derive(Default)]
/// struct Level(u8);
///
/// impl FlagValue for Level {
///     fn set(&mut self, text: &str) -> Result<(), BoxError> {
///         self.0 = match text {
///             "low" => 1,
///             "high" => 9,
///             other => return Err(format!("unknown level {other}").into()),
///         };
///         Ok(())
///     }
/// }
///
/// let mut level = Level::default();
/// level.set("high").unwrap();
/// assert_eq!(level.0, 9);
/// ```
pub trait FlagValue {
    /// Replaces the current value with the one described by `text`.
    ///
    /// # Errors
    ///
    /// Returns any error describing why `text` is unacceptable.
    fn set(&mut self, text: &str) -> Result<(), BoxError>;
}

type ValueFn = dyn FnMut(&str) -> Result<(), BoxError>;
type NamedValueFn = dyn FnMut(&str, &str) -> Result<(), BoxError>;

/// Flag field that hands each raw value to a callback.
///
/// The default callback accepts and discards every value.
pub struct Func(Box<ValueFn>);

impl Func {
    /// Wraps `callback` so it runs once per flag occurrence.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str) -> Result<(), BoxError> + 'static,
    {
        Self(Box::new(callback))
    }

    pub(crate) fn call(&mut self, text: &str) -> Result<(), BoxError> {
        (self.0)(text)
    }
}

impl Default for Func {
    fn default() -> Self {
        Self::new(|_| Ok(()))
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func(<callback>)")
    }
}

/// Flag field whose callback also receives the resolved flag name.
///
/// Useful when one callback serves several fields.
pub struct NamedFunc(Box<NamedValueFn>);

impl NamedFunc {
    /// Wraps `callback`; it is invoked as `callback(flag_name, value)`.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str, &str) -> Result<(), BoxError> + 'static,
    {
        Self(Box::new(callback))
    }

    pub(crate) fn call(&mut self, flag: &str, text: &str) -> Result<(), BoxError> {
        (self.0)(flag, text)
    }
}

impl Default for NamedFunc {
    fn default() -> Self {
        Self::new(|_, _| Ok(()))
    }
}

impl fmt::Debug for NamedFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NamedFunc(<callback>)")
    }
}
