//! Glyph table for the Libre Barcode 128 font family.
//!
//! A rendered barcode is an ordinary string: displayed in one of the
//! Libre Barcode 128 fonts every character turns into the bar pattern of
//! one symbol. The mapping follows the font's convention, keyed by the
//! symbol's checksum value: values 0 to 94 map to the printable ASCII
//! range starting at space, values 95 to 106 map to `U+00C3..=U+00CE`.

use crate::symbols::Symbol;

/// Character terminating every rendered barcode.
pub const STOP_CHAR: char = 'Î';

/// Font character for a symbol.
pub fn symbol_char(symbol: &Symbol) -> char {
    value_char(symbol.checksum_value())
}

/// Font character for a computed checksum value.
pub fn checksum_char(value: u8) -> char {
    value_char(value)
}

fn value_char(value: u8) -> char {
    debug_assert!(value <= 106, "no glyph for value {}", value);
    if value < 95 {
        char::from(value + 32)
    } else {
        char::from(value + 100)
    }
}

/// Mnemonic for an ASCII control character, used in diagnostics.
pub(crate) fn control_name(ch: char) -> &'static str {
    #[rustfmt::skip]
    const NAMES: [&str; 32] = [
        "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL",
        "BS", "HT", "LF", "VT", "FF", "CR", "SO", "SI",
        "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB",
        "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US",
    ];
    match ch {
        '\u{7f}' => "DEL",
        c if (c as u32) < 32 => NAMES[c as usize],
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_values_map_to_ascii() {
        assert_eq!(checksum_char(0), ' ');
        assert_eq!(checksum_char(1), '!');
        assert_eq!(checksum_char(73), 'i');
        assert_eq!(checksum_char(94), '~');
    }

    #[test]
    fn high_values_map_to_latin1() {
        assert_eq!(checksum_char(95), 'Ã');
        assert_eq!(checksum_char(103), 'Ë');
        assert_eq!(checksum_char(104), 'Ì');
        assert_eq!(checksum_char(105), 'Í');
        assert_eq!(checksum_char(106), STOP_CHAR);
    }

    #[test]
    fn control_names() {
        assert_eq!(control_name('\0'), "NUL");
        assert_eq!(control_name('\t'), "HT");
        assert_eq!(control_name('\u{1f}'), "US");
        assert_eq!(control_name('\u{7f}'), "DEL");
    }
}
