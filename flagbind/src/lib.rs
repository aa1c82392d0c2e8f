//! Bind struct fields to command-line flags.
//!
//! `flagbind` removes the boilerplate of registering one flag per
//! configuration field. Derive [`FlagBind`] on a struct, hand it to
//! [`bind`] together with a [`FlagRegistry`], and every exported field
//! becomes a flag:
//!
//! - the flag name is derived from the field name (`max_retries` becomes
//!   `max-retries`, see [`derive_flag_name`]) unless overridden;
//! - a `default` is converted and stored at bind time;
//! - raw text supplied later is converted according to the field type and
//!   written straight into the struct.
//!
//! ```
//! use std::time::Duration;
//! use flagbind::{ClapRegistry, FlagBind};
//!
//! #[derive(Default, FlagBind)]
//! struct Settings {
//!     pub verbose: bool,
//!     #[flag(default = "3", usage = "attempts before giving up")]
//!     pub max_retries: u32,
//!     #[flag(name = "wait")]
//!     pub timeout: Option<Duration>,
//!     #[flag(name = "-")]
//!     pub scratch: Vec<String>,
//! }
//!
//! let mut settings = Settings::default();
//! let mut registry = ClapRegistry::new("fetch");
//! flagbind::bind(&mut registry, &mut settings);
//! registry.parse_from(["fetch", "--wait", "1m30s"]).unwrap();
//!
//! assert_eq!(settings.max_retries, 3);
//! assert_eq!(settings.timeout, Some(Duration::from_secs(90)));
//! ```
//!
//! Mistakes in the program, such as a default that does not parse, make
//! [`bind`] panic ([`try_bind`] returns them instead). Mistakes in user
//! input come back from the registry as [`SetError`] values.

pub use flagbind_macros::FlagBind;

mod bind;
#[cfg(feature = "clap")]
mod cli;
mod error;
mod field;
mod name;
mod parse;
mod registry;
mod slot;
mod value;

pub use bind::{Bind, bind, bind_fields, try_bind, try_bind_fields};
#[cfg(feature = "clap")]
pub use cli::ClapRegistry;
#[cfg(feature = "clap")]
pub use error::ParseError;
pub use error::{BindError, BoxError, NumError, NumErrorKind, SetError};
pub use field::{Field, IGNORE_MARKER};
pub use name::derive_flag_name;
pub use registry::{FlagRegistry, Setter};
pub use slot::{Bindable, Slot, Target};
pub use value::{FlagValue, Func, NamedFunc};
