//! Uniform-cost search over the codeset-switching alternatives.
//!
//! The state space is an implicit graph: a node is the pair (active
//! codeset, consumed prefix) and an edge appends one symbol. Nodes are
//! never materialized; [`next_symbols`] computes the at most four
//! outgoing edges on demand. Paths leave the frontier in ascending cost
//! order, so the first path that consumes the whole message is a
//! minimal-width encoding.

use std::collections::{BTreeMap, HashMap};

use arrayvec::ArrayVec;
use flagset::{flags, FlagSet};
use log::debug;

use crate::codeset::Codeset;
use crate::path::Path;
use crate::symbols::{self, Symbol, SymbolClass};
use crate::EncodeError;

flags! {
    /// One move that can be tried from a search state.
    ///
    /// Recording tried moves per state is the dominance pruning: a later
    /// path reaching the same state never costs less than the first one,
    /// so a move already taken from the state is not worth retrying.
    enum Move: u8 {
        Data   = 0b000001,
        LatchA = 0b000010,
        LatchB = 0b000100,
        LatchC = 0b001000,
        ShiftA = 0b010000,
        ShiftB = 0b100000,
    }
}

fn move_of(symbol: &Symbol) -> Move {
    match (symbol.class(), symbol.target()) {
        (SymbolClass::Data | SymbolClass::Control, _) => Move::Data,
        (SymbolClass::Code, Some(Codeset::A)) => Move::LatchA,
        (SymbolClass::Code, Some(Codeset::B)) => Move::LatchB,
        (SymbolClass::Code, Some(Codeset::C)) => Move::LatchC,
        (SymbolClass::Shift, Some(Codeset::A)) => Move::ShiftA,
        (SymbolClass::Shift, Some(Codeset::B)) => Move::ShiftB,
        _ => unreachable!("start symbols are never search candidates"),
    }
}

/// All consumed prefixes are prefixes of the one message, so the length
/// identifies the prefix.
type StateKey = (Codeset, usize);

/// Find a minimal-width encoding of `message`.
pub(crate) fn run(message: &str, limit: Option<usize>) -> Result<Path, EncodeError> {
    Search::new(message, limit).run()
}

struct Search<'a> {
    message: &'a str,
    /// Cost-bucketed frontier; buckets keep insertion order.
    frontier: BTreeMap<u32, Vec<Path>>,
    explored: HashMap<StateKey, FlagSet<Move>>,
    expansions: usize,
    limit: Option<usize>,
}

impl<'a> Search<'a> {
    fn new(message: &'a str, limit: Option<usize>) -> Self {
        let mut search = Search {
            message,
            frontier: BTreeMap::new(),
            explored: HashMap::new(),
            expansions: 0,
            limit,
        };
        // seed order is observable through tie-breaking, keep it fixed
        for start in [symbols::START_B, symbols::START_A, symbols::START_C] {
            search.enqueue(Path::root(start));
        }
        search
    }

    fn run(mut self) -> Result<Path, EncodeError> {
        while let Some((cost, bucket)) = self.frontier.pop_first() {
            debug!("expanding {} path(s) of cost {}", bucket.len(), cost);
            for path in bucket {
                if path.consumed() == self.message {
                    // only a root can complete here (empty message);
                    // longer paths are caught right when they are built
                    return Ok(path);
                }
                if let Some(found) = self.expand(path)? {
                    debug!("encoding found: {:?}", found);
                    return Ok(found);
                }
            }
        }
        debug!("frontier exhausted, message is not encodable");
        Err(EncodeError::UnencodableInput)
    }

    /// Try every unexplored move from `path`'s state. Returns the
    /// terminal path as soon as an extension consumes the full message.
    fn expand(&mut self, path: Path) -> Result<Option<Path>, EncodeError> {
        self.expansions += 1;
        if let Some(limit) = self.limit {
            if self.expansions > limit {
                return Err(EncodeError::ExpansionLimitReached(limit));
            }
        }

        let key = (path.active(), path.consumed().len());
        let seen = self.explored.get(&key).copied().unwrap_or_default();

        let mut tried = seen;
        for symbol in next_symbols(self.message, &path, seen) {
            let extended = path.extend(symbol);
            if extended.consumed() == self.message {
                return Ok(Some(extended));
            }
            tried |= move_of(&symbol);
            self.enqueue(extended);
        }
        self.explored.insert(key, tried);
        Ok(None)
    }

    fn enqueue(&mut self, path: Path) {
        self.frontier.entry(path.cost()).or_default().push(path);
    }
}

/// Outgoing edges of a search state: the single data or control symbol
/// matching the next input characters (if any), plus the switch symbols
/// of the active codeset unless the path just switched. Moves already
/// explored from this state are dropped.
fn next_symbols(message: &str, path: &Path, seen: FlagSet<Move>) -> ArrayVec<Symbol, 4> {
    let mut candidates = ArrayVec::new();

    let consumed = path.consumed().len();
    let width = path.active().chars_per_symbol();
    if let Some(token) = message.get(consumed..consumed + width) {
        if let Some(symbol) = Symbol::from_token(token, path.active()) {
            candidates.push(symbol);
        }
    }

    // consecutive switches never shorten an encoding
    if !path.last().is_switch() {
        for &symbol in symbols::switch_symbols_of(path.active()) {
            candidates.push(symbol);
        }
    }

    candidates.retain(|s| !seen.contains(move_of(s)));
    candidates
}
