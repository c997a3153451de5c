//! Command-line surface for the decoy generator.
//!
//! The binary only parses arguments and installs logging; everything else
//! runs through [`run`], so the whole pipeline can be exercised in tests
//! without spawning a process.

mod error;

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;

pub use self::error::CliError;
use crate::generator::{Generator, render_lines};
use crate::mode::ModeFlags;
use crate::output::Destination;
use crate::request::{DEFAULT_COUNT, GenerationRequest};

const EXAMPLES: &str = concat!(
    "Examples:\n",
    "  decoy-creds -n 120 --pass --out passwords.txt\n",
    "  decoy-creds -n 50 --user --pass --out creds.txt\n",
    "  decoy-creds -n 100 --hash -t bcrypt,argon2id --annotate\n",
    "  decoy-creds -n 30 --default --seed 42\n",
    "  decoy-creds -n 50 --bypass --decrypt --payload\n",
);

/// `decoy-creds` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "decoy-creds",
    about = "Generate fake credentials, hashes, tokens, and payloads for UI demos",
    version,
    after_help = EXAMPLES
)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "one field per independent command-line switch"
)]
pub struct Cli {
    /// How many lines to generate.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        default_value_t = DEFAULT_COUNT,
        allow_negative_numbers = true
    )]
    pub count: i64,
    /// Generate password hashes.
    #[arg(long = "hash", visible_alias = "test-hash")]
    pub hash: bool,
    /// Generate passwords.
    #[arg(long = "pass")]
    pub password: bool,
    /// Generate usernames.
    #[arg(long = "user")]
    pub username: bool,
    /// Generate username:password pairs.
    #[arg(long = "creds")]
    pub credentials: bool,
    /// Generate pairs biased towards factory defaults.
    #[arg(long = "default")]
    pub default_credentials: bool,
    /// Generate weak passwords.
    #[arg(long = "weak")]
    pub weak: bool,
    /// Generate tokens and session IDs.
    #[arg(long = "bypass")]
    pub bypass: bool,
    /// Generate encrypted credentials.
    #[arg(long = "decrypt")]
    pub decrypt: bool,
    /// Generate injection payloads.
    #[arg(long = "payload")]
    pub payload: bool,
    /// Comma-separated hash types (only used in hash mode).
    #[arg(short = 't', long = "types", value_name = "LIST")]
    pub types: Option<String>,
    /// Seed for deterministic output.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
    /// Prefix each line with its [type].
    #[arg(long = "annotate")]
    pub annotate: bool,
    /// Write to a file instead of standard output.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<Utf8PathBuf>,
}

impl Cli {
    /// Builds the unvalidated generation request.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            count: self.count,
            flags: ModeFlags {
                hash: self.hash,
                password: self.password,
                username: self.username,
                credentials: self.credentials,
                default_credentials: self.default_credentials,
                weak: self.weak,
                token: self.bypass,
                encrypted: self.decrypt,
                payload: self.payload,
            },
            formats: self.types.clone(),
            seed: self.seed,
            annotate: self.annotate,
        }
    }

    /// Returns where output should be written.
    #[must_use]
    pub fn destination(&self) -> Destination {
        self.out.clone().map_or(Destination::Stdout, Destination::File)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of lines written.
    pub lines: usize,
    /// Where they were written.
    pub destination: Destination,
}

/// Validates, generates, and writes one run.
///
/// Validation happens before any randomness is drawn or any byte is written.
///
/// # Errors
///
/// Returns [`CliError::InvalidRequest`] for a bad count or unknown hash
/// types, [`CliError::Generation`] when the lines cannot be held in memory,
/// and [`CliError::Output`] if the destination cannot be written.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use decoy_creds::cli::{Cli, run};
///
/// let cli = Cli::try_parse_from(["decoy-creds", "-n", "3", "--seed", "1"]).expect("parse");
/// let mut out = Vec::new();
/// let summary = run(&cli, &mut out).expect("run");
///
/// assert_eq!(summary.lines, 3);
/// assert_eq!(String::from_utf8_lossy(&out).lines().count(), 3);
/// ```
pub fn run(cli: &Cli, stdout: impl Write) -> Result<RunSummary, CliError> {
    let request = cli.request().validate()?;
    debug!(modes = ?request.modes(), "request validated");

    let lines = Generator::new(&request)?.generate()?;
    let text = render_lines(&lines);

    let destination = cli.destination();
    destination.write(&text, stdout)?;

    Ok(RunSummary {
        lines: lines.len(),
        destination,
    })
}
