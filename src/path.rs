//! Immutable encoded-prefix values grown by the search.
//!
//! A [`Path`] is one candidate encoding of a prefix of the input
//! message: the symbols emitted so far, the input characters they
//! consumed, the accumulated cost and the codeset that will interpret
//! the next input characters. Extending a path always builds a new
//! value; the search relies on paths never changing once enqueued.

use core::fmt;

use log::trace;

use crate::codeset::Codeset;
use crate::render;
use crate::symbols::{Symbol, SymbolClass};

#[derive(Clone)]
pub(crate) struct Path {
    symbols: Vec<Symbol>,
    consumed: String,
    cost: u32,
    active: Codeset,
}

impl Path {
    /// Singleton path holding only a start symbol.
    ///
    /// Panics when handed anything but a start symbol; that is a catalog
    /// construction bug, not an input error.
    pub(crate) fn root(start: Symbol) -> Self {
        assert_eq!(start.class(), SymbolClass::Start, "root takes a start symbol");
        let active = start
            .target()
            .expect("start symbol must declare a codeset");
        Self {
            symbols: vec![start],
            consumed: String::new(),
            cost: 1,
            active,
        }
    }

    /// New path with `symbol` appended.
    ///
    /// Data and control symbols grow the consumed prefix by their token;
    /// steering symbols only add barcode width. Cost never decreases,
    /// which is what lets the search stop at the first complete path.
    pub(crate) fn extend(&self, symbol: Symbol) -> Self {
        let mut symbols = self.symbols.clone();
        symbols.push(symbol);

        let mut consumed = self.consumed.clone();
        consumed.push_str(symbol.consumes());

        let carried = i64::from(self.cost) - self.consumed.len() as i64;
        let cost = consumed.len() as i64 + carried + i64::from(symbol.weight());
        debug_assert!(cost >= i64::from(self.cost), "cost must never decrease");

        let active = derive_active(&symbols);
        let path = Self {
            symbols,
            consumed,
            cost: cost as u32,
            active,
        };
        trace!("appended {:?} -> {:?}", symbol, path);
        path
    }

    pub(crate) fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub(crate) fn last(&self) -> &Symbol {
        self.symbols.last().expect("paths are never empty")
    }

    /// The prefix of the input message this path has encoded.
    pub(crate) fn consumed(&self) -> &str {
        &self.consumed
    }

    pub(crate) fn cost(&self) -> u32 {
        self.cost
    }

    /// Codeset governing the interpretation of the next input characters.
    pub(crate) fn active(&self) -> Codeset {
        self.active
    }

    /// Weighted mod-103 checksum over the symbol sequence. The start
    /// symbol and the first data symbol both carry weight one.
    pub(crate) fn checksum(&self) -> u8 {
        let sum: u32 = self
            .symbols
            .iter()
            .enumerate()
            .map(|(i, s)| i.max(1) as u32 * u32::from(s.checksum_value()))
            .sum();
        (sum % 103) as u8
    }

    /// Rendered barcode characters: every symbol, then the checksum,
    /// then the stop marker.
    pub(crate) fn characters(&self) -> String {
        let mut out: String = self.symbols.iter().map(render::symbol_char).collect();
        out.push(render::checksum_char(self.checksum()));
        out.push(render::STOP_CHAR);
        out
    }
}

/// Codeset in effect after the last symbol.
///
/// A shift governs exactly the one symbol following it. While the path
/// ends on the shift itself the shifted codeset is active; the symbol
/// consumed under it restores the prior codeset, no matter how far the
/// sequence continues afterwards.
fn derive_active(symbols: &[Symbol]) -> Codeset {
    let mut active = symbols[0]
        .target()
        .expect("first symbol must be a start symbol");
    let mut revert_to = None;
    for symbol in &symbols[1..] {
        match symbol.class() {
            SymbolClass::Shift => {
                revert_to = Some(active);
                active = symbol.target().expect("shift symbols declare a codeset");
            }
            SymbolClass::Code => {
                active = symbol.target().expect("code symbols declare a codeset");
                revert_to = None;
            }
            _ => {
                if let Some(prior) = revert_to.take() {
                    active = prior;
                }
            }
        }
    }
    active
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({}:{:?}:", self.cost, self.active)?;
        for symbol in &self.symbols {
            write!(f, " {:?}", symbol)?;
        }
        write!(f, ")")
    }
}
