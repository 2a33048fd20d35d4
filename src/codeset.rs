//! The three character subsets of Code 128.

use crate::symbols::{self, Symbol};

/// One of the three character subsets a Code 128 barcode can operate in.
///
/// Subset A covers uppercase ASCII and the control characters, subset B
/// covers the full printable ASCII range, and subset C packs two digits
/// into every symbol. Subsets A and B consume one input character per
/// symbol, subset C consumes two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Codeset {
    A,
    B,
    C,
}

impl Codeset {
    /// All codesets in stable order.
    pub const ALL: [Codeset; 3] = [Codeset::A, Codeset::B, Codeset::C];

    /// Number of input characters one data symbol of this codeset consumes.
    pub fn chars_per_symbol(self) -> usize {
        match self {
            Codeset::A | Codeset::B => 1,
            Codeset::C => 2,
        }
    }

    /// The data and control symbols of this codeset, in catalog order.
    pub fn alphabet(self) -> &'static [Symbol] {
        symbols::alphabet(self)
    }
}
