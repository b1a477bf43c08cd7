use clap::Parser;
use std::ffi::OsString;

/// Command-line surface of the retired generator.
///
/// Nothing is configurable: every argument, flag-like or not, lands in
/// `ignored` and has no effect on the output.
#[derive(Parser, Debug)]
#[command(
    name = "generate-json-from-csv",
    about = "Deprecated CSV-to-JSON generator (prints a deprecation notice)",
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub ignored: Vec<OsString>,
}
