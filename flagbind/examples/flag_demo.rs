//! Example CLI binding a settings struct to command-line flags.
//!
//! ```text
//! RUST_LOG=flagbind=debug cargo run --example flag_demo -- --bool-flag --int-flag 10 --func-flag aaa
//! ```

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use flagbind::{ClapRegistry, FlagBind, Func, ParseError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, FlagBind)]
struct Settings {
    pub bool_flag: bool,
    pub bool_flag2: Option<bool>,
    #[flag(default = "25")]
    pub int_flag: i64,
    pub int_flag2: Option<i64>,
    #[flag(name = "str", default = "abc", usage = "str usage")]
    pub str_flag: String,
    #[flag(name = "cust", usage = "custom flag usage")]
    pub custom_flag: f64,
    #[flag(name = "-")]
    pub ignored_flag: i64,
    #[flag(usage = "echoes each value")]
    pub func_flag: Func,
    #[flag(default = "35")]
    pub def_flag: i32,
    #[flag(default = "30s", usage = "how long to wait")]
    pub timeout: Duration,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings {
        func_flag: Func::new(|value| {
            writeln!(io::stdout().lock(), "{value}")?;
            Ok(())
        }),
        ..Settings::default()
    };

    let mut registry = ClapRegistry::new("flag_demo");
    flagbind::bind(&mut registry, &mut settings);
    match registry.try_parse() {
        Ok(()) => {}
        Err(ParseError::Cli(err)) => err.exit(),
        Err(err) => {
            tracing::error!(error = %err, "invalid arguments");
            return ExitCode::from(2);
        }
    }

    match writeln!(io::stdout().lock(), "{settings:#?}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
