//! The GSM 03.38 default alphabet and its extension table.
//!
//! ASCII letters and digits sit at their ASCII code points in the default alphabet, and are
//! handled directly by the encoder instead of being listed here.

/// Septet that switches the following septet to the extension table.
pub const GSM_ESCAPE: u8 = 0x1B;

/// Characters reached through `GSM_ESCAPE`.
pub static GSM_EXTENDED_ENCODING_TABLE: [(char, u8); 9] = [
    ('^', 0x14),
    ('{', 0x28),
    ('}', 0x29),
    ('\\', 0x2F),
    ('[', 0x3C),
    ('~', 0x3D),
    (']', 0x3E),
    ('|', 0x40),
    ('\u{20AC}', 0x65)
];
/// Everything else in the default alphabet. 0x1B is the escape, and has no character.
pub static GSM_ENCODING_TABLE: [(char, u8); 65] = [
    ('@', 0x00),
    ('\u{00A3}', 0x01),
    ('$', 0x02),
    ('\u{00A5}', 0x03),
    ('\u{00E8}', 0x04),
    ('\u{00E9}', 0x05),
    ('\u{00F9}', 0x06),
    ('\u{00EC}', 0x07),
    ('\u{00F2}', 0x08),
    ('\u{00C7}', 0x09),
    ('\n', 0x0A),
    ('\u{00D8}', 0x0B),
    ('\u{00F8}', 0x0C),
    ('\r', 0x0D),
    ('\u{00C5}', 0x0E),
    ('\u{00E5}', 0x0F),
    ('\u{0394}', 0x10),
    ('_', 0x11),
    ('\u{03A6}', 0x12),
    ('\u{0393}', 0x13),
    ('\u{039B}', 0x14),
    ('\u{03A9}', 0x15),
    ('\u{03A0}', 0x16),
    ('\u{03A8}', 0x17),
    ('\u{03A3}', 0x18),
    ('\u{0398}', 0x19),
    ('\u{039E}', 0x1A),
    ('\u{00C6}', 0x1C),
    ('\u{00E6}', 0x1D),
    ('\u{00DF}', 0x1E),
    ('\u{00C9}', 0x1F),
    (' ', 0x20),
    ('!', 0x21),
    ('"', 0x22),
    ('#', 0x23),
    ('\u{00A4}', 0x24),
    ('%', 0x25),
    ('&', 0x26),
    ('\'', 0x27),
    ('(', 0x28),
    (')', 0x29),
    ('*', 0x2A),
    ('+', 0x2B),
    (',', 0x2C),
    ('-', 0x2D),
    ('.', 0x2E),
    ('/', 0x2F),
    (':', 0x3A),
    (';', 0x3B),
    ('<', 0x3C),
    ('=', 0x3D),
    ('>', 0x3E),
    ('?', 0x3F),
    ('\u{00A1}', 0x40),
    ('\u{00C4}', 0x5B),
    ('\u{00D6}', 0x5C),
    ('\u{00D1}', 0x5D),
    ('\u{00DC}', 0x5E),
    ('\u{00A7}', 0x5F),
    ('\u{00BF}', 0x60),
    ('\u{00E4}', 0x7B),
    ('\u{00F6}', 0x7C),
    ('\u{00F1}', 0x7D),
    ('\u{00FC}', 0x7E),
    ('\u{00E0}', 0x7F)
];
