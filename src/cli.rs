use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueHint};

use crate::error::FlipError;
use crate::flip::FlipSet;

mod run_impl;

pub use run_impl::{render, run_with_args};

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bitflip",
    version,
    about = "Flip even, odd, or all bits of a 16-bit value",
    long_about = None,
    override_usage = "bitflip [-e] [-f] [-a] [-o outputfile] intval",
    args_override_self = true
)]
pub struct Args {
    /// Flip even bits (bit positions 0, 2, 4, ...)
    #[arg(short = 'e', long = "even", action = ArgAction::SetTrue)]
    pub even: bool,

    /// Flip odd bits (bit positions 1, 3, 5, ...)
    #[arg(short = 'f', long = "odd", action = ArgAction::SetTrue)]
    pub odd: bool,

    /// Flip all bits
    #[arg(short = 'a', long = "all", action = ArgAction::SetTrue)]
    pub all: bool,

    /// Write output to file instead of screen (created or truncated)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        allow_hyphen_values = true
    )]
    pub output: Option<PathBuf>,

    /// Output JSON instead of text lines
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV instead of text lines
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Verbose logging (repeat for more)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Integer between 1 and 20000 inclusive
    #[arg(value_name = "INTVAL", allow_negative_numbers = true)]
    pub intval: String,
}

impl Args {
    pub fn flips(&self) -> FlipSet {
        FlipSet {
            even: self.even,
            odd: self.odd,
            all: self.all,
        }
    }
}

/// Parse process arguments. Help and version requests are printed here and
/// yield `Ok(None)`; every other clap failure becomes a usage error.
pub fn parse_args<I, T>(argv: I) -> Result<Option<Args>, FlipError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(FlipError::Usage(e.render().to_string())),
    }
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error on bad usage, an invalid value, or an unwritable output.
pub fn run() -> Result<()> {
    let Some(args) = parse_args(std::env::args_os())? else {
        return Ok(());
    };
    init_logging(args.verbose);
    run_with_args(&args)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG still wins when set.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Option<Args>, FlipError> {
        parse_args(std::iter::once("bitflip").chain(argv.iter().copied()))
    }

    #[test]
    fn short_flags_and_positional() {
        let args = parse(&["-e", "-a", "-o", "out.txt", "42"]).unwrap().unwrap();
        assert!(args.even && args.all && !args.odd);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.intval, "42");
    }

    #[test]
    fn clustered_and_repeated_flags() {
        let args = parse(&["-ef", "-e", "7"]).unwrap().unwrap();
        assert_eq!(
            args.flips(),
            FlipSet {
                even: true,
                odd: true,
                all: false
            }
        );
    }

    #[test]
    fn negative_value_reaches_validation() {
        let args = parse(&["-5"]).unwrap().unwrap();
        assert_eq!(args.intval, "-5");
    }

    #[test]
    fn usage_errors() {
        for argv in [&[][..], &["1", "2"][..], &["-x", "5"][..], &["-o"][..]] {
            let err = parse(argv).err().unwrap();
            assert!(matches!(err, FlipError::Usage(_)), "{argv:?}");
        }
        let err = parse(&["1", "2"]).err().unwrap();
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn output_value_may_start_with_hyphen() {
        let args = parse(&["-o", "-e", "5"]).unwrap().unwrap();
        assert_eq!(args.output, Some(PathBuf::from("-e")));
        assert!(!args.even);
        assert_eq!(args.intval, "5");
    }

    #[test]
    fn repeated_output_keeps_last_path() {
        let args = parse(&["-o", "a.txt", "-o", "b.txt", "5"]).unwrap().unwrap();
        assert_eq!(args.output, Some(PathBuf::from("b.txt")));
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }
}
