//! Storage slots: where a flag writes and how its text is converted.
//!
//! Each supported field type resolves to exactly one [`Slot`] variant
//! through [`Bindable`]. Value fields use [`Target::Value`]; `Option<T>`
//! fields use [`Target::Optional`], which stays `None` until a value is
//! successfully set.

use std::time::Duration;

use crate::error::SetError;
use crate::parse::{parse_bool, parse_duration, parse_float, parse_int};
use crate::value::{FlagValue, Func, NamedFunc};

/// Location a scalar flag writes into.
#[derive(Debug)]
pub enum Target<'a, T> {
    /// A plain field, overwritten on every set.
    Value(&'a mut T),
    /// An optional field, filled with `Some` on every set.
    Optional(&'a mut Option<T>),
}

impl<T> Target<'_, T> {
    fn store(&mut self, value: T) {
        match self {
            Self::Value(slot) => **slot = value,
            Self::Optional(slot) => **slot = Some(value),
        }
    }

    fn reset(&mut self) {
        if let Self::Optional(slot) = self {
            **slot = None;
        }
    }
}

/// Storage slot for one flag, tagged with the conversion it needs.
#[non_exhaustive]
pub enum Slot<'a> {
    /// A plain `bool` registered as a native switch.
    Switch(&'a mut bool),
    /// A boolean set through the generic setter.
    Bool(Target<'a, bool>),
    /// `i8` field.
    I8(Target<'a, i8>),
    /// `i16` field.
    I16(Target<'a, i16>),
    /// `i32` field.
    I32(Target<'a, i32>),
    /// `i64` field.
    I64(Target<'a, i64>),
    /// `isize` field.
    Isize(Target<'a, isize>),
    /// `u8` field.
    U8(Target<'a, u8>),
    /// `u16` field.
    U16(Target<'a, u16>),
    /// `u32` field.
    U32(Target<'a, u32>),
    /// `u64` field.
    U64(Target<'a, u64>),
    /// `usize` field.
    Usize(Target<'a, usize>),
    /// `f32` field.
    F32(Target<'a, f32>),
    /// `f64` field.
    F64(Target<'a, f64>),
    /// `String` field; any text is accepted.
    Str(Target<'a, String>),
    /// `Duration` field parsed from spans such as `1h30m`.
    Duration(Target<'a, Duration>),
    /// A field that converts text itself.
    Value(&'a mut dyn FlagValue),
    /// A callback receiving each raw value.
    Func(&'a mut Func),
    /// A callback receiving the flag name and each raw value.
    NamedFunc(&'a mut NamedFunc),
}

impl Slot<'_> {
    /// Converts `text` and stores it in the slot.
    ///
    /// `flag` is the resolved flag name, forwarded to [`NamedFunc`]
    /// callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Invalid`] for malformed booleans and durations,
    /// [`SetError::Number`] for numeric syntax or range failures, and
    /// [`SetError::Custom`] carrying whatever a [`FlagValue`] or callback
    /// reported.
    pub fn set(&mut self, flag: &str, text: &str) -> Result<(), SetError> {
        match self {
            Self::Switch(slot) => **slot = parse_bool(text)?,
            Self::Bool(target) => target.store(parse_bool(text)?),
            Self::I8(target) => target.store(parse_int(text)?),
            Self::I16(target) => target.store(parse_int(text)?),
            Self::I32(target) => target.store(parse_int(text)?),
            Self::I64(target) => target.store(parse_int(text)?),
            Self::Isize(target) => target.store(parse_int(text)?),
            Self::U8(target) => target.store(parse_int(text)?),
            Self::U16(target) => target.store(parse_int(text)?),
            Self::U32(target) => target.store(parse_int(text)?),
            Self::U64(target) => target.store(parse_int(text)?),
            Self::Usize(target) => target.store(parse_int(text)?),
            Self::F32(target) => target.store(parse_float(text)?),
            Self::F64(target) => target.store(parse_float(text)?),
            Self::Str(target) => target.store(text.to_owned()),
            Self::Duration(target) => target.store(parse_duration(text)?),
            Self::Value(value) => value.set(text).map_err(SetError::Custom)?,
            Self::Func(callback) => callback.call(text).map_err(SetError::Custom)?,
            Self::NamedFunc(callback) => callback.call(flag, text).map_err(SetError::Custom)?,
        }
        Ok(())
    }

    /// Clears optional targets to `None`; every other slot is untouched.
    pub fn reset(&mut self) {
        match self {
            Self::Bool(target) => target.reset(),
            Self::I8(target) => target.reset(),
            Self::I16(target) => target.reset(),
            Self::I32(target) => target.reset(),
            Self::I64(target) => target.reset(),
            Self::Isize(target) => target.reset(),
            Self::U8(target) => target.reset(),
            Self::U16(target) => target.reset(),
            Self::U32(target) => target.reset(),
            Self::U64(target) => target.reset(),
            Self::Usize(target) => target.reset(),
            Self::F32(target) => target.reset(),
            Self::F64(target) => target.reset(),
            Self::Str(target) => target.reset(),
            Self::Duration(target) => target.reset(),
            Self::Switch(_) | Self::Value(_) | Self::Func(_) | Self::NamedFunc(_) => {}
        }
    }

    /// Short name of the slot kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Switch(_) => "switch",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "string",
            Self::Duration(_) => "duration",
            Self::Value(_) => "value",
            Self::Func(_) => "func",
            Self::NamedFunc(_) => "named func",
        }
    }
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// Field types that can back a flag.
///
/// Implemented for the built-in scalars, their `Option` forms, [`Func`],
/// [`NamedFunc`], and every [`FlagValue`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot back a command-line flag",
    label = "unsupported flag field type",
    note = "implement `flagbind::FlagValue` for the type, or mark the field `#[flag(skip)]`"
)]
pub trait Bindable {
    /// Borrows the field as a storage slot.
    fn slot(&mut self) -> Slot<'_>;
}

impl Bindable for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Switch(self)
    }
}

impl Bindable for Option<bool> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(Target::Optional(self))
    }
}

macro_rules! scalar_bindable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(Target::Value(self))
                }
            }

            impl Bindable for Option<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(Target::Optional(self))
                }
            }
        )*
    };
}

scalar_bindable! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
    Duration => Duration,
}

impl Bindable for Func {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Func(self)
    }
}

impl Bindable for NamedFunc {
    fn slot(&mut self) -> Slot<'_> {
        Slot::NamedFunc(self)
    }
}

impl<T: FlagValue> Bindable for T {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(self)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for slot conversion, storage and reset.

    use super::*;
    use crate::NumErrorKind;
    use crate::error::BoxError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default, PartialEq)]
    struct Colour(String);

    impl FlagValue for Colour {
        fn set(&mut self, text: &str) -> Result<(), BoxError> {
            if matches!(text, "red" | "blue") {
                self.0 = text.to_owned();
                Ok(())
            } else {
                Err(format!("unknown colour {text}").into())
            }
        }
    }

    #[test]
    fn optional_target_is_filled_on_set() {
        let mut port: Option<u16> = None;
        port.slot().set("port", "8080").expect("valid port");
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn failed_set_leaves_optional_target_empty() {
        let mut port: Option<u16> = None;
        let err = port.slot().set("port", "70000").expect_err("out of range");
        assert_eq!(err.num_kind(), Some(NumErrorKind::Range));
        assert_eq!(port, None);
    }

    #[test]
    fn reset_clears_only_optional_targets() {
        let mut count = 7_i64;
        let mut limit = Some(3_i64);
        count.slot().reset();
        limit.slot().reset();
        assert_eq!(count, 7);
        assert_eq!(limit, None);
    }

    #[test]
    fn switch_accepts_boolean_text() {
        let mut verbose = false;
        verbose.slot().set("verbose", "t").expect("valid literal");
        assert!(verbose);
    }

    #[test]
    fn strings_are_stored_verbatim() {
        let mut name = String::new();
        name.slot().set("name", " spaced ").expect("any text");
        assert_eq!(name, " spaced ");
    }

    #[test]
    fn durations_parse_time_spans() {
        let mut timeout: Option<Duration> = None;
        timeout.slot().set("timeout", "1h30m").expect("valid span");
        assert_eq!(timeout, Some(Duration::from_secs(5400)));
    }

    #[test]
    fn flag_values_delegate_and_pass_errors_through() {
        let mut colour = Colour::default();
        colour.slot().set("colour", "red").expect("known colour");
        assert_eq!(colour, Colour("red".to_owned()));

        let err = colour.slot().set("colour", "green").expect_err("unknown colour");
        assert!(matches!(err, SetError::Custom(_)));
        assert_eq!(err.to_string(), "unknown colour green");
    }

    #[test]
    fn named_callbacks_receive_flag_name() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callback = NamedFunc::new(move |flag, value| {
            sink.borrow_mut().push(format!("{flag}={value}"));
            Ok(())
        });
        callback.slot().set("trace", "on").expect("callback accepts");
        assert_eq!(*seen.borrow(), vec!["trace=on".to_owned()]);
    }

    #[test]
    fn callback_errors_are_returned_verbatim() {
        let mut callback = Func::new(|_| Err("rejected".into()));
        let err = callback.slot().set("hook", "x").expect_err("callback fails");
        assert_eq!(err.to_string(), "rejected");
    }

    #[test]
    fn slot_kind_names_variant() {
        let mut ratio = Some(0.5_f32);
        assert_eq!(ratio.slot().kind(), "f32");
        let mut enabled = true;
        assert_eq!(enabled.slot().kind(), "switch");
    }
}
