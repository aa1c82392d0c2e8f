//! Array fields have no flag representation.

use flagbind::FlagBind;

#[allow(dead_code)]
#[derive(FlagBind)]
struct Opts {
    pub name: String,
    pub pair: [u16; 2],
}

fn main() {}
