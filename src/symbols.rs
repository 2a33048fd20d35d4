//! The Code 128 symbol catalog.
//!
//! Everything a barcode can contain is enumerated here once and shared
//! read-only afterwards: the per-codeset data and control alphabets, the
//! three start symbols, and the switch symbols that move between
//! codesets. FNC1 through FNC4 are not supported.

use core::fmt;
use std::sync::OnceLock;

use arrayvec::ArrayString;

use crate::codeset::Codeset;
use crate::render;

/// Classification of a symbol within the symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    /// Stands for input characters and renders as its literal token.
    Data,
    /// Stands for a non-printable input character (NUL through US, DEL).
    Control,
    /// First symbol of every barcode, fixes the initial codeset.
    Start,
    /// Switches the active codeset permanently.
    Code,
    /// Switches the active codeset for exactly one following symbol.
    Shift,
}

/// One atomic unit of a Code 128 barcode.
///
/// A symbol either encodes input characters ([`Data`](SymbolClass::Data),
/// [`Control`](SymbolClass::Control)) or steers the encoding
/// ([`Start`](SymbolClass::Start), [`Code`](SymbolClass::Code),
/// [`Shift`](SymbolClass::Shift)). Symbols are plain immutable values
/// drawn from the catalog in this module.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    token: ArrayString<2>,
    class: SymbolClass,
    checksum_value: u8,
    target: Option<Codeset>,
}

pub(crate) const START_A: Symbol = fixed(SymbolClass::Start, 103, Codeset::A);
pub(crate) const START_B: Symbol = fixed(SymbolClass::Start, 104, Codeset::B);
pub(crate) const START_C: Symbol = fixed(SymbolClass::Start, 105, Codeset::C);

pub(crate) const SHIFT_A: Symbol = fixed(SymbolClass::Shift, 98, Codeset::A);
pub(crate) const SHIFT_B: Symbol = fixed(SymbolClass::Shift, 98, Codeset::B);
pub(crate) const CODE_A: Symbol = fixed(SymbolClass::Code, 101, Codeset::A);
pub(crate) const CODE_B: Symbol = fixed(SymbolClass::Code, 100, Codeset::B);
pub(crate) const CODE_C: Symbol = fixed(SymbolClass::Code, 99, Codeset::C);

const fn fixed(class: SymbolClass, checksum_value: u8, target: Codeset) -> Symbol {
    Symbol {
        token: ArrayString::new_const(),
        class,
        checksum_value,
        target: Some(target),
    }
}

impl Symbol {
    fn for_char(ch: char, class: SymbolClass, checksum_value: u8) -> Self {
        let mut token = ArrayString::new();
        token.push(ch);
        Self {
            token,
            class,
            checksum_value,
            target: None,
        }
    }

    fn for_digit_pair(value: u8) -> Self {
        let mut token = ArrayString::new();
        token.push(char::from(b'0' + value / 10));
        token.push(char::from(b'0' + value % 10));
        Self {
            token,
            class: SymbolClass::Data,
            checksum_value: value,
            target: None,
        }
    }

    /// The literal input substring this symbol encodes. Empty for start
    /// and switch symbols.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn class(&self) -> SymbolClass {
        self.class
    }

    /// Weight of this symbol in the mod-103 checksum; doubles as its
    /// index into the glyph table.
    pub fn checksum_value(&self) -> u8 {
        self.checksum_value
    }

    /// Codeset this symbol starts or switches into, `None` for data and
    /// control symbols.
    pub fn target(&self) -> Option<Codeset> {
        self.target
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.class, SymbolClass::Code | SymbolClass::Shift)
    }

    pub fn is_shift(&self) -> bool {
        self.class == SymbolClass::Shift
    }

    /// Input characters consumed when this symbol is appended to a path.
    pub(crate) fn consumes(&self) -> &str {
        match self.class {
            SymbolClass::Data | SymbolClass::Control => &self.token,
            _ => "",
        }
    }

    /// Length of the visible token in the rendered output. Control and
    /// steering symbols render as a bar pattern without a readable glyph.
    fn printed_len(&self) -> usize {
        match self.class {
            SymbolClass::Data => self.token.len(),
            _ => 0,
        }
    }

    /// Contribution to the path cost beyond the consumed characters.
    ///
    /// Every symbol occupies exactly one slot of barcode width, so this
    /// is one minus the printed token length. Negative for codeset C
    /// data symbols, which print two digits from a single slot.
    pub(crate) fn weight(&self) -> i32 {
        1 - self.printed_len() as i32
    }

    /// Exact-token lookup in a codeset's alphabet.
    pub fn from_token(token: &str, codeset: Codeset) -> Option<Symbol> {
        alphabet(codeset).iter().find(|s| s.token() == token).copied()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            SymbolClass::Data => write!(f, "Symbol({})", self.token),
            SymbolClass::Control => {
                let ch = self.token.chars().next().unwrap_or('?');
                write!(f, "Symbol({})", render::control_name(ch))
            }
            _ => match self.target {
                Some(cs) => write!(f, "Symbol({:?}:{:?})", cs, self.class),
                None => write!(f, "Symbol({:?})", self.class),
            },
        }
    }
}

static ALPHABET_A: OnceLock<Vec<Symbol>> = OnceLock::new();
static ALPHABET_B: OnceLock<Vec<Symbol>> = OnceLock::new();
static ALPHABET_C: OnceLock<Vec<Symbol>> = OnceLock::new();

/// The data and control symbols of a codeset, in catalog order.
pub fn alphabet(codeset: Codeset) -> &'static [Symbol] {
    match codeset {
        Codeset::A => ALPHABET_A.get_or_init(codeset_a),
        Codeset::B => ALPHABET_B.get_or_init(codeset_b),
        Codeset::C => ALPHABET_C.get_or_init(codeset_c),
    }
}

/// The switch symbols reachable from a codeset. Order is stable and is
/// the tie-break between equally short encodings. There is no shift to
/// or from codeset C.
pub fn switch_symbols_of(codeset: Codeset) -> &'static [Symbol] {
    match codeset {
        Codeset::A => &[CODE_B, CODE_C, SHIFT_B],
        Codeset::B => &[CODE_A, CODE_C, SHIFT_A],
        Codeset::C => &[CODE_A, CODE_B],
    }
}

/// Symbols shared by codesets A and B: the printable range from space
/// up to `_`, checksum values 0 to 63.
fn basic_symbols() -> impl Iterator<Item = Symbol> {
    (0u8..64).map(|v| Symbol::for_char(char::from(v + 32), SymbolClass::Data, v))
}

fn codeset_a() -> Vec<Symbol> {
    // values 64..=95 are the control characters NUL..US
    basic_symbols()
        .chain((0u8..32).map(|v| Symbol::for_char(char::from(v), SymbolClass::Control, v + 64)))
        .collect()
}

fn codeset_b() -> Vec<Symbol> {
    // values 64..=94 continue the printable range, value 95 is DEL
    basic_symbols()
        .chain((0u8..32).map(|v| {
            let class = if v == 31 {
                SymbolClass::Control
            } else {
                SymbolClass::Data
            };
            Symbol::for_char(char::from(v + 96), class, v + 64)
        }))
        .collect()
}

fn codeset_c() -> Vec<Symbol> {
    (0u8..100).map(Symbol::for_digit_pair).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn count_by_class(codeset: Codeset, class: SymbolClass) -> usize {
        alphabet(codeset).iter().filter(|s| s.class() == class).count()
    }

    #[test]
    fn codeset_a_has_64_data_and_32_control_symbols() {
        assert_eq!(count_by_class(Codeset::A, SymbolClass::Data), 64);
        assert_eq!(count_by_class(Codeset::A, SymbolClass::Control), 32);
    }

    #[test]
    fn codeset_b_has_95_data_and_1_control_symbol() {
        assert_eq!(count_by_class(Codeset::B, SymbolClass::Data), 95);
        assert_eq!(count_by_class(Codeset::B, SymbolClass::Control), 1);
    }

    #[test]
    fn codeset_c_has_100_two_digit_symbols() {
        let symbols = alphabet(Codeset::C);
        assert_eq!(symbols.len(), 100);
        assert!(symbols.iter().all(|s| s.class() == SymbolClass::Data));
        assert!(symbols
            .iter()
            .all(|s| s.token().len() == 2 && s.token().chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn checksum_values_match_catalog_position() {
        for codeset in Codeset::ALL {
            for (i, symbol) in alphabet(codeset).iter().enumerate() {
                assert_eq!(usize::from(symbol.checksum_value()), i);
            }
        }
    }

    #[test]
    fn token_lookup() {
        let sp = Symbol::from_token(" ", Codeset::A).unwrap();
        assert_eq!(sp.checksum_value(), 0);

        let tab = Symbol::from_token("\t", Codeset::A).unwrap();
        assert_eq!(tab.class(), SymbolClass::Control);
        assert_eq!(tab.checksum_value(), 64 + 9);

        let z = Symbol::from_token("z", Codeset::B).unwrap();
        assert_eq!(z.checksum_value(), 90);

        let pair = Symbol::from_token("42", Codeset::C).unwrap();
        assert_eq!(pair.checksum_value(), 42);

        assert_eq!(Symbol::from_token("a", Codeset::A), None);
        assert_eq!(Symbol::from_token("4", Codeset::C), None);
    }

    #[test]
    fn no_shift_to_or_from_codeset_c() {
        assert!(!switch_symbols_of(Codeset::C).iter().any(|s| s.is_shift()));
        for codeset in [Codeset::A, Codeset::B] {
            assert!(switch_symbols_of(codeset)
                .iter()
                .filter(|s| s.is_shift())
                .all(|s| s.target() != Some(Codeset::C)));
        }
    }

    #[test]
    fn switch_order_is_stable() {
        let values: Vec<u8> = switch_symbols_of(Codeset::A)
            .iter()
            .map(Symbol::checksum_value)
            .collect();
        assert_eq!(values, vec![100, 99, 98]);
        let values: Vec<u8> = switch_symbols_of(Codeset::B)
            .iter()
            .map(Symbol::checksum_value)
            .collect();
        assert_eq!(values, vec![101, 99, 98]);
        let values: Vec<u8> = switch_symbols_of(Codeset::C)
            .iter()
            .map(Symbol::checksum_value)
            .collect();
        assert_eq!(values, vec![101, 100]);
    }

    #[test]
    fn start_symbols_declare_their_codeset() {
        assert_eq!(START_A.target(), Some(Codeset::A));
        assert_eq!(START_B.target(), Some(Codeset::B));
        assert_eq!(START_C.target(), Some(Codeset::C));
        assert_eq!(START_A.checksum_value(), 103);
        assert_eq!(START_B.checksum_value(), 104);
        assert_eq!(START_C.checksum_value(), 105);
    }
}
