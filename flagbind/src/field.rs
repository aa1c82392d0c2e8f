//! Per-field flag descriptors.
//!
//! A [`Field`] pairs a storage [`Slot`] with the configuration that would
//! otherwise live in attributes: an optional name override, default text,
//! usage text, and whether the field is bound at all. The derive macro
//! builds one per eligible struct field; hand-written tables use the same
//! builder.

use crate::name::derive_flag_name;
use crate::slot::{Bindable, Slot};

/// Name override that excludes a field from binding.
pub const IGNORE_MARKER: &str = "-";

/// Describes how one record field becomes a flag.
///
/// # Examples
///
/// ```
/// use flagbind::Field;
///
/// let mut retries = 0_u32;
/// let field = Field::new("MaxRetries", &mut retries)
///     .default("3")
///     .usage("attempts before giving up");
/// assert_eq!(field.flag_name(), "max-retries");
/// assert!(field.is_included());
/// ```
#[derive(Debug)]
pub struct Field<'a> {
    ident: String,
    name: Option<String>,
    default: Option<String>,
    usage: String,
    skip: bool,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describes the field `ident` stored in `target`.
    pub fn new<T>(ident: impl Into<String>, target: &'a mut T) -> Self
    where
        T: Bindable + ?Sized,
    {
        Self::from_slot(ident, target.slot())
    }

    /// Describes the field `ident` backed by an explicit slot.
    pub fn from_slot(ident: impl Into<String>, slot: Slot<'a>) -> Self {
        Self {
            ident: ident.into(),
            name: None,
            default: None,
            usage: String::new(),
            skip: false,
            slot,
        }
    }

    /// Overrides the derived flag name. [`IGNORE_MARKER`] excludes the field.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Raw text applied through the field's setter at bind time.
    #[must_use]
    pub fn default(mut self, text: impl Into<String>) -> Self {
        self.default = Some(text.into());
        self
    }

    /// Help text handed to the registry.
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Excludes the field from binding.
    #[must_use]
    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Identifier the field was declared with.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Resolved flag name: the override if present, else the derived name.
    #[must_use]
    pub fn flag_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| derive_flag_name(&self.ident))
    }

    /// Whether the field produces a flag.
    #[must_use]
    pub fn is_included(&self) -> bool {
        !self.skip && self.name.as_deref() != Some(IGNORE_MARKER)
    }

    pub(crate) fn into_parts(self) -> (Option<String>, String, Slot<'a>) {
        (self.default, self.usage, self.slot)
    }
}
