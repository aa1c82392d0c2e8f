//! Error types for flag binding and value conversion.
//!
//! Errors fall into two tiers. [`SetError`] and [`NumError`] describe bad
//! user input rejected while a setter converts raw text; they are ordinary
//! values handed back to the flag registry. [`BindError`] describes a
//! malformed default discovered while binding, which is a mistake in the
//! program rather than in its input. [`crate::bind`] turns it into a panic;
//! [`crate::try_bind`] returns it.

use std::fmt;

use thiserror::Error;

/// Boxed error returned by [`crate::FlagValue`] implementations and flag
/// callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Distinguishes the two ways a numeric conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumErrorKind {
    /// The text is not a number of the expected shape.
    Syntax,
    /// The text is a number, but it does not fit the target width.
    Range,
}

impl fmt::Display for NumErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("invalid syntax"),
            Self::Range => f.write_str("value out of range"),
        }
    }
}

/// Failure converting text into an integer or floating point slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing {value:?}: {kind}")]
pub struct NumError {
    value: String,
    kind: NumErrorKind,
}

impl NumError {
    pub(crate) fn syntax(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            kind: NumErrorKind::Syntax,
        }
    }

    pub(crate) fn range(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            kind: NumErrorKind::Range,
        }
    }

    /// Text that failed to convert.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the text was malformed or merely too large.
    #[must_use]
    pub const fn kind(&self) -> NumErrorKind {
        self.kind
    }
}

/// Failure raised by a flag setter while converting raw text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetError {
    /// Boolean or duration text that could not be parsed.
    #[error("invalid value {value:?}")]
    Invalid {
        /// Text that failed to convert.
        value: String,
    },

    /// Numeric text that could not be parsed or did not fit.
    #[error(transparent)]
    Number(#[from] NumError),

    /// Error returned verbatim by a [`crate::FlagValue`] or callback.
    #[error(transparent)]
    Custom(BoxError),
}

impl SetError {
    pub(crate) fn invalid(value: &str) -> Self {
        Self::Invalid {
            value: value.to_owned(),
        }
    }

    /// Returns the numeric failure kind, if this is a numeric error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagbind::{NumErrorKind, Slot, Target};
    ///
    /// let mut port = 0_i32;
    /// let mut slot = Slot::I32(Target::Value(&mut port));
    /// let err = slot.set("port", "99999999999").unwrap_err();
    /// assert_eq!(err.num_kind(), Some(NumErrorKind::Range));
    /// ```
    #[must_use]
    pub const fn num_kind(&self) -> Option<NumErrorKind> {
        match self {
            Self::Number(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// Failure detected while binding a record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// A field's default text was rejected by its own setter.
    #[error("unable to set default value for flag -{flag}: {source}")]
    Default {
        /// Resolved name of the flag whose default failed.
        flag: String,
        /// Conversion failure reported by the setter.
        #[source]
        source: SetError,
    },
}

/// Failure parsing command-line arguments through
/// [`crate::ClapRegistry`].
#[cfg(feature = "clap")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// `clap` rejected the arguments or asked to display help or version.
    #[error("Failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),

    /// A setter rejected the text supplied for a flag.
    #[error("invalid value {value:?} for flag -{flag}: {source}")]
    Value {
        /// Name of the flag being set.
        flag: String,
        /// Raw text supplied on the command line.
        value: String,
        /// Conversion failure reported by the setter.
        #[source]
        source: SetError,
    },
}
