//! A [`FlagRegistry`] that remembers every registration.
//!
//! # Examples
//!
//! ```
//! use flagbind::{Field, bind_fields};
//! use flagbind_test_helpers::RecordingRegistry;
//!
//! let mut port = 0_u16;
//! let mut registry = RecordingRegistry::default();
//! bind_fields(&mut registry, vec![Field::new("port", &mut port)]);
//! assert_eq!(registry.names(), ["port"]);
//! registry.set("port", "8080").expect("valid port");
//! drop(registry);
//! assert_eq!(port, 8080);
//! ```

use flagbind::{FlagRegistry, SetError, Setter};

/// How a flag was registered.
pub enum Registration<'a> {
    /// Registered with `register_bool`.
    Switch {
        /// The bound field.
        slot: &'a mut bool,
        /// Initial value handed over by the binder.
        initial: bool,
    },
    /// Registered with `register_func`.
    Func(Setter<'a>),
}

struct Entry<'a> {
    name: String,
    usage: String,
    registration: Registration<'a>,
}

/// Registry storing registrations in the order they were made.
#[derive(Default)]
pub struct RecordingRegistry<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> FlagRegistry<'a> for RecordingRegistry<'a> {
    fn register_bool(&mut self, name: &str, slot: &'a mut bool, initial: bool, usage: &str) {
        *slot = initial;
        self.entries.push(Entry {
            name: name.to_owned(),
            usage: usage.to_owned(),
            registration: Registration::Switch { slot, initial },
        });
    }

    fn register_func(&mut self, name: &str, usage: &str, setter: Setter<'a>) {
        self.entries.push(Entry {
            name: name.to_owned(),
            usage: usage.to_owned(),
            registration: Registration::Func(setter),
        });
    }
}

impl<'a> RecordingRegistry<'a> {
    /// Registered flag names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Usage text registered for `name`.
    #[must_use]
    pub fn usage(&self, name: &str) -> Option<&str> {
        self.find(name).map(|entry| entry.usage.as_str())
    }

    /// Whether `name` was registered as a boolean switch.
    #[must_use]
    pub fn is_switch(&self, name: &str) -> bool {
        self.find(name)
            .is_some_and(|entry| matches!(entry.registration, Registration::Switch { .. }))
    }

    /// Initial value of the switch `name`, if it is one.
    #[must_use]
    pub fn initial(&self, name: &str) -> Option<bool> {
        match self.find(name).map(|entry| &entry.registration) {
            Some(Registration::Switch { initial, .. }) => Some(*initial),
            _ => None,
        }
    }

    /// Raw access to the registration for `name`.
    pub fn registration(&mut self, name: &str) -> Option<&mut Registration<'a>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.registration)
    }

    /// Calls the setter registered for `name` with `text`.
    ///
    /// # Errors
    ///
    /// Returns whatever the setter returns.
    ///
    /// # Panics
    ///
    /// Panics if `name` was not registered through `register_func`.
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), SetError> {
        match self.registration(name) {
            Some(Registration::Func(setter)) => setter(text),
            Some(Registration::Switch { .. }) => panic!("flag -{name} is a switch"),
            None => panic!("flag -{name} is not registered"),
        }
    }

    /// Stores `value` into the switch registered as `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` was not registered through `register_bool`.
    pub fn set_switch(&mut self, name: &str, value: bool) {
        match self.registration(name) {
            Some(Registration::Switch { slot, .. }) => **slot = value,
            Some(Registration::Func(_)) => panic!("flag -{name} is not a switch"),
            None => panic!("flag -{name} is not registered"),
        }
    }

    fn find(&self, name: &str) -> Option<&Entry<'a>> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}
