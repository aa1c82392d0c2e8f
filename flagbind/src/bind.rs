//! Registering record fields with a flag registry.

use crate::error::BindError;
use crate::field::Field;
use crate::parse::parse_bool;
use crate::registry::FlagRegistry;
use crate::slot::Slot;

/// Records whose fields can be bound to flags.
///
/// Usually implemented through `#[derive(FlagBind)]`, which lists every
/// exported named field not marked `#[flag(skip)]` or `#[flag(name = "-")]`.
pub trait Bind {
    /// Borrows each bindable field as a flag descriptor, in declaration
    /// order.
    fn flag_fields(&mut self) -> Vec<Field<'_>>;
}

/// Registers one flag per eligible field of `target`.
///
/// Optional fields are cleared, defaults are applied immediately, and the
/// registry keeps borrowing the fields until it is dropped.
///
/// # Panics
///
/// Panics if a field's default text is rejected by its own setter. A bad
/// default is a mistake in the program, not in its input; use
/// [`try_bind`] to receive it as an error instead.
///
/// # Examples
///
/// ```
/// use flagbind::{FlagBind, FlagRegistry, Setter};
///
/// #[derive(Default, FlagBind)]
/// struct Opts {
///     #[flag(default = "25")]
///     pub int_flag: i32,
/// }
///
/// #[derive(Default)]
/// struct Names(Vec<String>);
///
/// impl<'a> FlagRegistry<'a> for Names {
///     fn register_bool(&mut self, name: &str, slot: &'a mut bool, initial: bool, _: &str) {
///         *slot = initial;
///         self.0.push(name.to_owned());
///     }
///
///     fn register_func(&mut self, name: &str, _: &str, _: Setter<'a>) {
///         self.0.push(name.to_owned());
///     }
/// }
///
/// let mut opts = Opts::default();
/// let mut names = Names::default();
/// flagbind::bind(&mut names, &mut opts);
/// assert_eq!(names.0, ["int-flag"]);
/// assert_eq!(opts.int_flag, 25);
/// ```
pub fn bind<'a, R, T>(registry: &mut R, target: &'a mut T)
where
    R: FlagRegistry<'a> + ?Sized,
    T: Bind + ?Sized,
{
    bind_fields(registry, target.flag_fields());
}

/// Registers one flag per eligible field of `target`, reporting bad
/// defaults as errors.
///
/// Fields before the failing one stay registered.
///
/// # Errors
///
/// Returns [`BindError::Default`] when a field's default text is rejected
/// by its setter.
pub fn try_bind<'a, R, T>(registry: &mut R, target: &'a mut T) -> Result<(), BindError>
where
    R: FlagRegistry<'a> + ?Sized,
    T: Bind + ?Sized,
{
    try_bind_fields(registry, target.flag_fields())
}

/// Registers a hand-built table of field descriptors.
///
/// # Panics
///
/// Panics if a field's default text is rejected by its own setter.
pub fn bind_fields<'a, R>(registry: &mut R, fields: Vec<Field<'a>>)
where
    R: FlagRegistry<'a> + ?Sized,
{
    if let Err(err) = try_bind_fields(registry, fields) {
        panic!("{err}");
    }
}

/// Registers a hand-built table of field descriptors, reporting bad
/// defaults as errors.
///
/// # Errors
///
/// Returns [`BindError::Default`] when a field's default text is rejected
/// by its setter.
pub fn try_bind_fields<'a, R>(registry: &mut R, fields: Vec<Field<'a>>) -> Result<(), BindError>
where
    R: FlagRegistry<'a> + ?Sized,
{
    for field in fields {
        if !field.is_included() {
            tracing::trace!(field = field.ident(), "skipping excluded field");
            continue;
        }
        let flag = field.flag_name();
        let (default, usage, slot) = field.into_parts();
        match slot {
            Slot::Switch(switch) => {
                let initial = match default.as_deref() {
                    Some(text) => parse_bool(text).map_err(|source| BindError::Default {
                        flag: flag.clone(),
                        source,
                    })?,
                    None => false,
                };
                tracing::debug!(flag = %flag, initial, "registering switch");
                registry.register_bool(&flag, switch, initial, &usage);
            }
            mut slot => {
                slot.reset();
                if let Some(text) = default {
                    slot.set(&flag, &text)
                        .map_err(|source| BindError::Default {
                            flag: flag.clone(),
                            source,
                        })?;
                    tracing::debug!(flag = %flag, value = %text, "applied default");
                }
                tracing::debug!(flag = %flag, kind = slot.kind(), "registering flag");
                let name = flag.clone();
                registry.register_func(
                    &flag,
                    &usage,
                    Box::new(move |text: &str| {
                        tracing::trace!(flag = %name, value = text, "setting flag");
                        slot.set(&name, text)
                    }),
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit tests for the binder against an in-module registry.

    use super::*;
    use crate::registry::Setter;
    use crate::{NumErrorKind, SetError};

    #[derive(Default)]
    struct Recorder<'a> {
        switches: Vec<(String, bool)>,
        setters: Vec<(String, String, Setter<'a>)>,
    }

    impl<'a> FlagRegistry<'a> for Recorder<'a> {
        fn register_bool(&mut self, name: &str, slot: &'a mut bool, initial: bool, _usage: &str) {
            *slot = initial;
            self.switches.push((name.to_owned(), initial));
        }

        fn register_func(&mut self, name: &str, usage: &str, setter: Setter<'a>) {
            self.setters.push((name.to_owned(), usage.to_owned(), setter));
        }
    }

    impl Recorder<'_> {
        fn set(&mut self, name: &str, text: &str) -> Result<(), SetError> {
            let (_, _, setter) = self
                .setters
                .iter_mut()
                .find(|(flag, _, _)| flag == name)
                .unwrap_or_else(|| panic!("flag {name} not registered"));
            setter(text)
        }
    }

    #[test]
    fn switches_take_default_as_initial_value() {
        let mut verbose = false;
        let mut quiet = true;
        let mut recorder = Recorder::default();
        bind_fields(
            &mut recorder,
            vec![
                Field::new("Verbose", &mut verbose).default("true"),
                Field::new("Quiet", &mut quiet),
            ],
        );
        assert_eq!(
            recorder.switches,
            vec![("verbose".to_owned(), true), ("quiet".to_owned(), false)]
        );
        drop(recorder);
        assert!(verbose);
        assert!(!quiet);
    }

    #[test]
    fn defaults_are_applied_and_optionals_reset() {
        let mut count = 0_u32;
        let mut limit = Some(9_u64);
        let mut label = Some("stale".to_owned());
        let mut recorder = Recorder::default();
        bind_fields(
            &mut recorder,
            vec![
                Field::new("count", &mut count).default("25").usage("how many"),
                Field::new("limit", &mut limit),
                Field::new("label", &mut label).default("fresh"),
            ],
        );
        let names: Vec<_> = recorder
            .setters
            .iter()
            .map(|(name, usage, _)| (name.clone(), usage.clone()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("count".to_owned(), "how many".to_owned()),
                ("limit".to_owned(), String::new()),
                ("label".to_owned(), String::new()),
            ]
        );
        drop(recorder);
        assert_eq!(count, 25);
        assert_eq!(limit, None);
        assert_eq!(label.as_deref(), Some("fresh"));
    }

    #[test]
    fn setters_write_through_to_fields() {
        let mut port: Option<u16> = None;
        let mut recorder = Recorder::default();
        bind_fields(&mut recorder, vec![Field::new("port", &mut port)]);
        recorder.set("port", "8080").expect("valid port");
        let err = recorder.set("port", "http").expect_err("not a number");
        assert_eq!(err.num_kind(), Some(NumErrorKind::Syntax));
        drop(recorder);
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn excluded_fields_are_not_registered() {
        let mut kept = 0_i32;
        let mut ignored = 0_i64;
        let mut skipped = false;
        let mut recorder = Recorder::default();
        bind_fields(
            &mut recorder,
            vec![
                Field::new("kept", &mut kept),
                Field::new("ignored", &mut ignored).name("-"),
                Field::new("skipped", &mut skipped).skip(),
            ],
        );
        assert!(recorder.switches.is_empty());
        assert_eq!(recorder.setters.len(), 1);
    }

    #[test]
    fn try_bind_reports_bad_default() {
        let mut count = 0_i32;
        let mut recorder = Recorder::default();
        let err = try_bind_fields(
            &mut recorder,
            vec![Field::new("count", &mut count).default("lots")],
        )
        .expect_err("default is not a number");
        assert!(matches!(err, BindError::Default { ref flag, .. } if flag == "count"));
    }

    #[test]
    fn bad_switch_default_is_reported() {
        let mut verbose = false;
        let mut recorder = Recorder::default();
        let err = try_bind_fields(
            &mut recorder,
            vec![Field::new("verbose", &mut verbose).default("maybe")],
        )
        .expect_err("default is not a boolean");
        assert_eq!(
            err.to_string(),
            "unable to set default value for flag -verbose: invalid value \"maybe\""
        );
    }

    #[test]
    #[should_panic(expected = "unable to set default value for flag -ratio")]
    fn bind_panics_on_bad_default() {
        let mut ratio = 0.0_f32;
        let mut recorder = Recorder::default();
        bind_fields(&mut recorder, vec![Field::new("ratio", &mut ratio).default("half")]);
    }
}
