//! # Caesar Core Library
//!
//! Byte-space additive (Caesar-style) cipher engine with brute-force key
//! recovery and a bounded, persisted operation history.
//!
//! ## Components
//!
//! - **shift** - The additive transform over the full byte space (0-255)
//! - **freq** - Character-frequency distributions and plausibility scoring
//! - **bruteforce** - Exhaustive 256-key recovery, ranked best-first
//! - **history** - Bounded operation log with write-through JSON persistence
//! - **filecodec** - Line-structured whole-file transform with atomic output
//!
//! ## Usage
//!
//! ```rust
//! use caesar_core::{bruteforce, decrypt, encrypt};
//!
//! let ciphertext = encrypt("Hello, World!", 3)?;
//! assert_eq!(decrypt(&ciphertext, 3)?, "Hello, World!");
//!
//! // Unknown key? Rank all 256 candidates by plausibility.
//! let candidates = bruteforce(&ciphertext);
//! assert_eq!(candidates.len(), 256);
//! # Ok::<(), caesar_core::CaesarError>(())
//! ```
//!
//! This is an educational substitution cipher, not a security primitive:
//! there is no cryptographic strength claim of any kind.
//!
//! The transform itself is pure. Recording operations into the history is
//! composed explicitly by the caller (see [`history::HistoryStore`]), so
//! brute-force scoring can reuse the raw transform without journaling.

// Public modules
pub mod bruteforce;
pub mod error;
pub mod filecodec;
pub mod freq;
pub mod history;
pub mod shift;

// Re-exports for easy access
pub use bruteforce::{bruteforce, Candidate};
pub use error::{CaesarError, Result};
pub use filecodec::process_file;
pub use freq::{distribution, score, FrequencyDistribution};
pub use history::{HistoryStore, Operation, OperationKind, MAX_ENTRIES};
pub use shift::{decrypt, encrypt, is_printable};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
