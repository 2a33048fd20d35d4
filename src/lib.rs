//! Code 128 barcode encoding with an optimizing encoder.
//!
//! Code 128 packs text into one of three character subsets (codesets A,
//! B and C) and can switch between them mid-stream, either permanently
//! or for a single symbol. Where the switches go decides the width of
//! the final barcode. This crate runs a shortest-path search over all
//! switching alternatives, so the returned encoding always has the
//! minimal number of symbols.
//!
//! The rendered string targets the Libre Barcode 128 font family:
//! display it in one of those fonts and you have a scannable barcode.
//!
//! ```
//! let barcode = code128::encode("0123456789")?;
//! assert_eq!(barcode, "Í!7McyiÎ");
//! # Ok::<(), code128::EncodeError>(())
//! ```
//!
//! For access to the symbol sequence behind the rendered string use
//! [`Code128::encoding`].

mod codeset;
mod path;
pub mod render;
mod search;
mod symbols;

pub use codeset::Codeset;
pub use symbols::{alphabet, switch_symbols_of, Symbol, SymbolClass};

use path::Path;
use thiserror::Error;

/// Ways an encoding attempt can fail.
///
/// The search is exhaustive and deterministic, so a failing message
/// fails every time; there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No combination of codesets can represent the message.
    #[error("message cannot be represented in Code 128")]
    UnencodableInput,
    /// The configured expansion ceiling was hit before an encoding was
    /// found.
    #[error("gave up after {0} search expansions")]
    ExpansionLimitReached(usize),
}

/// Encode `message` with the default settings.
///
/// Shorthand for `Code128::new().encode(message)`.
pub fn encode(message: &str) -> Result<String, EncodeError> {
    Code128::new().encode(message)
}

/// A Code 128 encoder.
///
/// The default configuration searches without bounds, which is fine for
/// any realistic message. A ceiling on the number of search expansions
/// can be set as a safety valve:
///
/// ```
/// use code128::Code128;
///
/// let encoder = Code128::with_expansion_limit(100_000);
/// let barcode = encoder.encode("123456789")?;
/// assert_eq!(barcode, "Ì1Ç7McyÆÎ");
/// # Ok::<(), code128::EncodeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Code128 {
    expansion_limit: Option<usize>,
}

impl Code128 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder that aborts with [`EncodeError::ExpansionLimitReached`]
    /// after `limit` state expansions.
    pub fn with_expansion_limit(limit: usize) -> Self {
        Self {
            expansion_limit: Some(limit),
        }
    }

    /// Encode `message` into its rendered barcode characters.
    pub fn encode(&self, message: &str) -> Result<String, EncodeError> {
        Ok(self.encoding(message)?.characters())
    }

    /// Encode `message` and return the full [`Encoding`] rather than
    /// only the rendered string.
    pub fn encoding(&self, message: &str) -> Result<Encoding, EncodeError> {
        search::run(message, self.expansion_limit).map(Encoding)
    }
}

/// A complete, minimal-width encoding of one message.
#[derive(Debug, Clone)]
pub struct Encoding(Path);

impl Encoding {
    /// The symbols in barcode order, start symbol first. The checksum
    /// and stop marker are not part of the sequence; they are derived
    /// during rendering.
    pub fn symbols(&self) -> &[Symbol] {
        self.0.symbols()
    }

    /// The mod-103 checksum value of the symbol sequence.
    pub fn checksum(&self) -> u8 {
        self.0.checksum()
    }

    /// The rendered barcode characters, checksum and stop marker
    /// included.
    pub fn characters(&self) -> String {
        self.0.characters()
    }
}
