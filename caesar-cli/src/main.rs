use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use caesar_core::history::{HistoryStore, Operation, OperationKind, DEFAULT_HISTORY_FILE};
use caesar_core::{bruteforce, decrypt, encrypt, process_file};

/// Command-line arguments for the Caesar cipher toolkit.
#[derive(Parser, Debug)]
#[command(name = "caesar", version)]
#[command(about = "Byte-space additive cipher: encrypt, decrypt, brute-force, file processing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a text with a shift key
    Encrypt {
        #[arg(help = "Text to encrypt")]
        text: String,

        #[arg(short, long, help = "Shift key in -255..=255")]
        key: i32,

        #[arg(long, default_value = DEFAULT_HISTORY_FILE, help = "Path to the history file")]
        history_file: PathBuf,
    },

    /// Decrypt a text with the shift key used for encryption
    Decrypt {
        #[arg(help = "Text to decrypt")]
        text: String,

        #[arg(short, long, help = "Shift key in -255..=255")]
        key: i32,

        #[arg(long, default_value = DEFAULT_HISTORY_FILE, help = "Path to the history file")]
        history_file: PathBuf,
    },

    /// Try all 256 shift keys and rank the candidates by plausibility
    Bruteforce {
        #[arg(help = "Encrypted text to attack")]
        text: String,

        #[arg(short, long, default_value_t = 10, help = "Number of candidates to display")]
        top: usize,
    },

    /// Encrypt or decrypt a whole file, line by line
    File {
        #[arg(short, long, help = "Path to the input file")]
        file: PathBuf,

        #[arg(short, long, help = "Path to the output file")]
        output: PathBuf,

        #[arg(short, long, help = "Key for the cipher")]
        key: i32,

        #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
        mode: OperationMode,
    },

    /// Show the most recent operations from the history log
    History {
        #[arg(short, long, default_value_t = 10, help = "Number of records to display")]
        count: usize,

        #[arg(long, default_value = DEFAULT_HISTORY_FILE, help = "Path to the history file")]
        history_file: PathBuf,
    },
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

impl From<OperationMode> for OperationKind {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => OperationKind::Encrypt,
            OperationMode::Decrypt => OperationKind::Decrypt,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> caesar_core::Result<()> {
    match cli.command {
        Command::Encrypt {
            text,
            key,
            history_file,
        } => {
            let ciphertext: String = encrypt(&text, key)?;
            let mut store = HistoryStore::open(&history_file);
            store.append(Operation::new(OperationKind::Encrypt, &text, &ciphertext, key));
            println!("{ciphertext}");
        }

        Command::Decrypt {
            text,
            key,
            history_file,
        } => {
            let plaintext: String = decrypt(&text, key)?;
            let mut store = HistoryStore::open(&history_file);
            store.append(Operation::new(OperationKind::Decrypt, &text, &plaintext, key));
            println!("{plaintext}");
        }

        Command::Bruteforce { text, top } => {
            // Brute-force attempts are never journaled.
            let candidates = bruteforce(&text);
            println!("Bruteforce results (top {top} of {}):", candidates.len());
            println!("{}", "-".repeat(50));
            for candidate in candidates.iter().take(top) {
                let preview: String = candidate.plaintext.chars().take(50).collect();
                println!(
                    "Key {:3}  score {:.3}  {}",
                    candidate.key,
                    candidate.score,
                    preview.escape_debug()
                );
            }
            println!("{}", "-".repeat(50));
        }

        Command::File {
            file,
            output,
            key,
            mode,
        } => {
            let lines: usize = process_file(&file, &output, key, mode.into())?;
            println!("Processed {lines} lines into {}", output.display());
        }

        Command::History {
            count,
            history_file,
        } => {
            let store = HistoryStore::open(&history_file);
            if store.is_empty() {
                println!("No operations recorded yet.");
                return Ok(());
            }
            for record in store.recent(count) {
                println!(
                    "{}  {:7}  key {:4}  {} -> {}",
                    record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    record.operation.to_string(),
                    record.shift,
                    record.input_text.escape_debug(),
                    record.output_text.escape_debug()
                );
            }
        }
    }
    Ok(())
}
