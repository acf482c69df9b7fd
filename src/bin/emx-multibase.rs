//! emx-multibase CLI
//!
//! Encode, decode and detect self-describing multibase strings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emx_multibase::{Base, decode, encode, encoding};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emx-multibase")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Self-describing multibase encoding tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode bytes into a multibase string
    #[command(name = "e")]
    Encode {
        /// Base to encode with (e.g. base58btc, base16, base64url)
        #[arg(short, long)]
        base: String,

        /// File to read bytes from (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Decode a multibase string back to bytes
    #[command(name = "d")]
    Decode {
        /// File holding the multibase string (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Report which base produced a multibase string
    Detect {
        /// File holding the multibase string (default: stdin)
        input: Option<PathBuf>,
    },

    /// List the registered bases and their prefixes
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { base, input, output } => {
            run_encode(&base, input, output)?;
        }
        Commands::Decode { input, output } => {
            run_decode(input, output)?;
        }
        Commands::Detect { input } => {
            run_detect(input)?;
        }
        Commands::List => {
            run_list();
        }
    }

    Ok(())
}

fn run_encode(base: &str, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let base = Base::from_name(base)
        .with_context(|| format!("Unknown base name: {}", base))?;

    let data = read_bytes(input)?;
    let text = encode(base, &data)?;

    match output {
        Some(path) => fs::write(&path, text)
            .with_context(|| format!("Failed to write: {}", path.display()))?,
        None => println!("{}", text),
    }

    Ok(())
}

fn run_decode(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let text = read_text(input)?;
    let data = decode(text.trim_end())?;

    match output {
        Some(path) => fs::write(&path, data)
            .with_context(|| format!("Failed to write: {}", path.display()))?,
        None => io::stdout().write_all(&data)?,
    }

    Ok(())
}

fn run_detect(input: Option<PathBuf>) -> Result<()> {
    let text = read_text(input)?;
    let base = encoding(text.trim_end())?;
    println!("{} ('{}')", base.name(), base.code());
    Ok(())
}

fn run_list() {
    for base in Base::ALL {
        let status = if base.is_supported() { "" } else { "  (no codec)" };
        println!("{:<18} '{}'{}", base.name(), base.code(), status);
    }
}

fn read_bytes(input: Option<PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            fs::read(&path).with_context(|| format!("Failed to read: {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn read_text(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
