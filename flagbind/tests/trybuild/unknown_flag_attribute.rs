//! Only known keys are accepted inside `#[flag(...)]`.

use flagbind::FlagBind;

#[allow(dead_code)]
#[derive(FlagBind)]
struct Opts {
    #[flag(short = "v")]
    pub verbose: bool,
}

fn main() {}
