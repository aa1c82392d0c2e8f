//! The flag-registration interface the binder writes into.
//!
//! A registry owns flag storage and argument parsing. The binder only ever
//! asks it to attach a name either to a boolean slot or to a setter
//! callback; everything after that (parsing, help output, collision
//! handling) belongs to the registry.

use crate::error::SetError;

/// Callback converting and storing one raw flag value.
pub type Setter<'a> = Box<dyn FnMut(&str) -> Result<(), SetError> + 'a>;

/// A flag set that bound fields can be registered with.
///
/// The lifetime `'a` is how long registered slots and setters stay
/// borrowed from the record.
pub trait FlagRegistry<'a> {
    /// Attaches `name` directly to a boolean slot.
    ///
    /// Implementations store `initial` into `slot` before returning.
    fn register_bool(&mut self, name: &str, slot: &'a mut bool, initial: bool, usage: &str);

    /// Attaches `name` to `setter`, to be called once per occurrence with
    /// the raw text supplied for the flag.
    fn register_func(&mut self, name: &str, usage: &str, setter: Setter<'a>);
}
