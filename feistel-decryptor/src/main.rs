//! Command-line front end for the Feistel-CBC cipher
//!
//! Decrypts a hex ciphertext file with a base64 key file, or produces such a
//! ciphertext from a UTF-8 plaintext file. Decryption failures are reported
//! with one generic message; run with `RUST_LOG=debug` to see the cause.

use std::fs::{self, File};
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

/// Default cap on the input file size, in bytes.
const DEFAULT_MAX_BYTES: usize = 1 << 20;

/// Command-line arguments for the Feistel-CBC cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file (hex ciphertext or plaintext)")]
    file: String,

    /// Path to the key file.
    #[arg(short, long, help = "File containing the base64 key")]
    key: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt).
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Largest accepted input file, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES, help = "Reject inputs larger than this many bytes")]
    max_bytes: usize,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode.
    Encrypt,
    /// Decrypt mode.
    Decrypt,
}

/// Reads a file, refusing anything larger than `max_bytes`.
fn read_capped(path: &str, max_bytes: usize) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to read {path}"))?;

    let mut content = String::new();
    file.take(max_bytes as u64 + 1)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read {path}"))?;
    if content.len() > max_bytes {
        bail!("{path} is larger than the {max_bytes}-byte limit");
    }

    Ok(content)
}

/// Removes spaces and line breaks so wrapped hex dumps can be used directly.
fn strip_whitespace(content: &str) -> String {
    content.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Runs the selected operation. `Ok(None)` means decryption was rejected.
fn run(cli: &Cli) -> Result<Option<String>> {
    let input = read_capped(&cli.file, cli.max_bytes)?;
    let key = read_capped(&cli.key, cli.max_bytes)?;
    let key = key.trim();

    match cli.mode {
        OperationMode::Encrypt => {
            info!("Encrypting {} bytes", input.len());
            let ciphertext = feistel_cbc::encrypt(&input, key).context("Encryption failed")?;
            Ok(Some(ciphertext))
        }
        OperationMode::Decrypt => {
            let ciphertext = strip_whitespace(&input);
            info!("Decrypting {} hex digits", ciphertext.len());
            Ok(feistel_cbc::decrypt(&ciphertext, key).ok())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?} {} with key file {}", cli.mode, cli.file, cli.key);

    let result = match run(&cli) {
        Ok(Some(result)) => result,
        Ok(None) => {
            eprintln!("Invalid decryption key");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &result) {
                eprintln!("Failed to write the output file: {e}");
                return ExitCode::FAILURE;
            }
            println!("Operation completed successfully! Output saved to: {path}");
        }
        None => println!("{result}"),
    }

    ExitCode::SUCCESS
}
