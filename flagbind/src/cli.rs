//! A [`FlagRegistry`] backed by `clap`.
//!
//! Switches become `--name[=BOOL]` arguments and every other flag becomes a
//! repeatable `--name VALUE` argument. Parsing consumes the registry: clap
//! validates the command line first, then the registered setters run in
//! the order their values appeared.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::ParseError;
use crate::parse::parse_bool;
use crate::registry::{FlagRegistry, Setter};

enum Binding<'a> {
    Switch(&'a mut bool),
    Setter(Setter<'a>),
}

struct Registered<'a> {
    name: String,
    binding: Binding<'a>,
}

/// Flag registry that turns bound fields into `clap` arguments.
///
/// # Examples
///
/// ```
/// use flagbind::{ClapRegistry, FlagBind};
///
/// #[derive(Default, FlagBind)]
/// struct Opts {
///     pub verbose: bool,
///     #[flag(default = "8080")]
///     pub port: u16,
///     pub name: Option<String>,
/// }
///
/// let mut opts = Opts::default();
/// let mut registry = ClapRegistry::new("serve");
/// flagbind::bind(&mut registry, &mut opts);
/// registry
///     .parse_from(["serve", "--verbose", "--name", "edge"])
///     .unwrap();
///
/// assert!(opts.verbose);
/// assert_eq!(opts.port, 8080);
/// assert_eq!(opts.name.as_deref(), Some("edge"));
/// ```
pub struct ClapRegistry<'a> {
    command: Command,
    flags: Vec<Registered<'a>>,
}

impl<'a> ClapRegistry<'a> {
    /// Creates a registry for a program called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_command(Command::new(name.into()))
    }

    /// Creates a registry that adds flags to an existing command.
    ///
    /// Repeated arguments override earlier ones, matching the behaviour of
    /// switches set more than once.
    #[must_use]
    pub fn from_command(command: Command) -> Self {
        Self {
            command: command.args_override_self(true),
            flags: Vec::new(),
        }
    }

    /// The command built so far, for inspection or help rendering.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Mutable access to the command, e.g. for `render_help`.
    pub const fn command_mut(&mut self) -> &mut Command {
        &mut self.command
    }

    /// Parses the process arguments and writes values into bound fields.
    ///
    /// # Errors
    ///
    /// See [`ClapRegistry::parse_from`].
    pub fn try_parse(self) -> Result<(), ParseError> {
        self.parse_from(std::env::args_os())
    }

    /// Parses `args` (including the program name) and writes values into
    /// bound fields.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Cli`] when clap rejects the arguments or a help
    /// or version request is made, and [`ParseError::Value`] for the first
    /// value a setter rejects. Values before the rejected one have already
    /// been stored.
    pub fn parse_from<I, T>(self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let Self { command, mut flags } = self;
        let matches = command.try_get_matches_from(args).map_err(Box::new)?;
        dispatch(&matches, &mut flags)
    }
}

impl std::fmt::Debug for ClapRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClapRegistry")
            .field("command", &self.command.get_name())
            .field(
                "flags",
                &self.flags.iter().map(|flag| &flag.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> FlagRegistry<'a> for ClapRegistry<'a> {
    fn register_bool(&mut self, name: &str, slot: &'a mut bool, initial: bool, usage: &str) {
        *slot = initial;
        let arg = with_usage(Arg::new(name.to_owned()), usage)
            .long(name.to_owned())
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_name("BOOL")
            .value_parser(parse_bool);
        self.add(name, arg, Binding::Switch(slot));
    }

    fn register_func(&mut self, name: &str, usage: &str, setter: Setter<'a>) {
        let arg = with_usage(Arg::new(name.to_owned()), usage)
            .long(name.to_owned())
            .action(ArgAction::Append)
            .num_args(1)
            .value_name("VALUE")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(String));
        self.add(name, arg, Binding::Setter(setter));
    }
}

impl<'a> ClapRegistry<'a> {
    fn add(&mut self, name: &str, arg: Arg, binding: Binding<'a>) {
        let command = std::mem::take(&mut self.command);
        self.command = command.arg(arg);
        self.flags.push(Registered {
            name: name.to_owned(),
            binding,
        });
    }
}

fn with_usage(arg: Arg, usage: &str) -> Arg {
    if usage.is_empty() {
        arg
    } else {
        arg.help(usage.to_owned())
    }
}

fn dispatch(matches: &ArgMatches, flags: &mut [Registered<'_>]) -> Result<(), ParseError> {
    let mut occurrences = Vec::new();
    for (position, flag) in flags.iter_mut().enumerate() {
        match &mut flag.binding {
            Binding::Switch(slot) => {
                if let Some(value) = matches.get_one::<bool>(&flag.name) {
                    **slot = *value;
                }
            }
            Binding::Setter(_) => {
                let indices = matches.indices_of(&flag.name).into_iter().flatten();
                let values = matches.get_many::<String>(&flag.name).into_iter().flatten();
                occurrences.extend(
                    indices
                        .zip(values)
                        .map(|(index, value)| (index, position, value.clone())),
                );
            }
        }
    }

    occurrences.sort_by_key(|(index, _, _)| *index);
    tracing::debug!(values = occurrences.len(), "dispatching flag values");
    for (_, position, value) in occurrences {
        let Some(flag) = flags.get_mut(position) else {
            continue;
        };
        if let Binding::Setter(setter) = &mut flag.binding {
            setter(&value).map_err(|source| ParseError::Value {
                flag: flag.name.clone(),
                value,
                source,
            })?;
        }
    }
    Ok(())
}
