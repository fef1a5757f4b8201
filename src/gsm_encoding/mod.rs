//! Utilities for dealing with the GSM 7-bit encoding (GSM 03.38), and packing it into message
//! data.
//!
//! "The GSM 7-bit encoding" is otherwise known as [GSM
//! 03.38](https://en.wikipedia.org/wiki/GSM_03.38), and that Wikipedia article is pretty
//! informative.
//!
//! Encoding happens in three steps:
//!
//! 1. every character is mapped to one septet (default alphabet), or two septets (the escape
//!    septet `0x1B`, followed by its index in the extension table);
//! 2. the septets are packed, without any wasted bits, into octets;
//! 3. the octets are rendered as uppercase hex.
//!
//! **NB:** characters that exist in neither alphabet are silently dropped. No replacement
//! character is inserted, and no error is returned; if you care, check your text with
//! `try_gsm_encode_string` first.

pub mod lookup_tables;

use crate::pdu::HexData;
use crate::errors::*;
use self::lookup_tables::*;

/// Septet used to fill the last octet when only one bit of it is used.
///
/// Seven zero bits would decode as an extra `@`, so a carriage return is used instead.
pub const GSM_PADDING_SEPTET: u8 = 0x0D;

/// Decode a GSM 7-bit-encoded buffer into a string.
///
/// **Warning:** You need to unpack the string first; this method operates on unpacked septets, not
/// packed septets. See `unpack_septets`.
///
/// This method is lossy, and doesn't complain about crap that it can't decode.
pub fn gsm_decode_string(input: &[u8]) -> String {
    let mut ret = String::new();
    let mut skip = false;
    for (i, b) in input.iter().enumerate() {
        if skip {
            skip = false;
            continue;
        }
        match *b {
            b'A' ..= b'Z' | b'a' ..= b'z' | b'0' ..= b'9' => {
                ret.push(*b as char);
            },
            GSM_ESCAPE => {
                if let Some(b) = input.get(i+1) {
                    for &(ch, val) in GSM_EXTENDED_ENCODING_TABLE.iter() {
                        if val == *b {
                            ret.push(ch);
                        }
                    }
                    skip = true;
                }
            },
            b => {
                for &(ch, val) in GSM_ENCODING_TABLE.iter() {
                    if val == b {
                        ret.push(ch);
                    }
                }
            }
        }
    }
    ret
}
/// Tries to encode a character into the given destination buffer, returning `true` if the
/// character was successfully encoded, and `false` if the character cannot be represented in the
/// GSM 7-bit encoding.
pub fn try_gsm_encode_char(b: char, dest: &mut Vec<u8>) -> bool {
    match b {
        'A' ..= 'Z' | 'a' ..= 'z' | '0' ..= '9' => {
            dest.push(b as u8);
            return true;
        },
        b => {
            for &(ch, val) in GSM_ENCODING_TABLE.iter() {
                if b == ch {
                    dest.push(val);
                    return true;
                }
            }
            for &(ch, val) in GSM_EXTENDED_ENCODING_TABLE.iter() {
                if b == ch {
                    dest.push(GSM_ESCAPE);
                    dest.push(val);
                    return true;
                }
            }
        }
    }
    false
}
/// Tries to encode a string as GSM 7-bit, returning a buffer of **unpacked** septets iff all of
/// the data in `input` was representable in the 7-bit encoding.
pub fn try_gsm_encode_string(input: &str) -> Option<Vec<u8>> {
    let mut ret = vec![];
    for c in input.chars() {
        if !try_gsm_encode_char(c, &mut ret) {
            return None;
        }
    }
    Some(ret)
}
/// Encode a string as **unpacked** GSM 7-bit septets, dropping any characters that can't be
/// represented.
pub fn gsm_encode_septets(input: &str) -> Vec<u8> {
    let mut ret = vec![];
    for c in input.chars() {
        if !try_gsm_encode_char(c, &mut ret) {
            debug!("dropping unencodable character {:?}", c);
        }
    }
    ret
}
/// Pack septets into octets, least significant bit first (the usual SMS packing).
///
/// The output is always `ceil(septets * 7 / 8)` octets long. If the last octet only carries one
/// bit of data, the rest of it is filled with `GSM_PADDING_SEPTET`; otherwise, it's padded with
/// zeroes.
pub fn pack_septets(orig: &[u8]) -> Vec<u8> {
    let mut ret = Vec::with_capacity((orig.len() * 7 + 7) / 8);
    // Bits waiting to be written out, and how many of them there are (never more than 14).
    let mut acc: u16 = 0;
    let mut bits = 0;
    for septet in orig.iter() {
        acc |= ((*septet & 0b0111_1111) as u16) << bits;
        bits += 7;
        if bits >= 8 {
            ret.push(acc as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    match bits {
        0 => {},
        1 => ret.push((acc as u8) | (GSM_PADDING_SEPTET << 1)),
        _ => ret.push(acc as u8)
    }
    ret
}
/// Unpack `count` septets from packed octets. The inverse of `pack_septets`.
///
/// If `data` runs out before `count` septets have been read, you just get fewer septets.
pub fn unpack_septets(data: &[u8], count: usize) -> Vec<u8> {
    let mut ret = Vec::with_capacity(count);
    let mut acc: u16 = 0;
    let mut bits = 0;
    let mut octets = data.iter();
    while ret.len() < count {
        if bits < 7 {
            match octets.next() {
                Some(o) => {
                    acc |= (*o as u16) << bits;
                    bits += 8;
                },
                None => break
            }
        }
        ret.push((acc & 0b0111_1111) as u8);
        acc >>= 7;
        bits -= 7;
    }
    ret
}
/// Encode a string into packed GSM 7-bit message data, as an uppercase hex string.
///
/// Unencodable characters are dropped; see the module-level documentation.
pub fn gsm_encode(text: &str) -> String {
    let septets = gsm_encode_septets(text);
    HexData(&pack_septets(&septets)).to_string()
}
/// Decode `count` septets worth of packed, hex-encoded message data back into text.
pub fn gsm_decode(hex: &str, count: usize) -> GatewayResult<String> {
    let data = HexData::decode(hex)?;
    Ok(gsm_decode_string(&unpack_septets(&data, count)))
}
