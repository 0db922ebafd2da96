use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Default)]
#[command(name = "hello")]
#[command(about = "Prints a greeting.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLine {
    /// Anything passed on the command line. Accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

impl CommandLine {
    /// Never fails: arguments clap still refuses are dropped as well.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_default()
    }
}
