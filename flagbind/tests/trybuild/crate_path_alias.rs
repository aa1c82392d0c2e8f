//! `#[flag(crate = "...")]` resolves generated paths through an alias.

use flagbind as flags;
use flags::{Bind, FlagBind};

#[derive(Default, FlagBind)]
#[flag(crate = "flags")]
struct Aliased {
    pub count: u32,
}

fn main() {
    let mut record = Aliased::default();
    let fields: Vec<flags::Field<'_>> = record.flag_fields();
    assert_eq!(fields[0].flag_name(), "count");
}
