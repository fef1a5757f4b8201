//! Splits the bytes coming from the modem into lines.
use bytes::BytesMut;
use encoding::{Encoding, DecoderTrap};
use encoding::all::ASCII;

/// Buffers data read from the modem, and hands it back a line at a time.
///
/// Lines end with `\r\n`, `\n` or a lone `\r`; the line ending is removed along with the rest
/// of the surrounding whitespace. Anything that isn't ASCII is replaced with U+FFFD.
#[derive(Debug)]
pub struct LineCodec {
    buf: BytesMut,
    /// The last line ended with `\r`, and a `\n` right after it belongs to that line.
    pending_cr: bool
}
impl LineCodec {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
            pending_cr: false
        }
    }
    /// Add freshly read data to the buffer.
    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }
    /// Whether anything is buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    /// Take the next complete line out of the buffer, if there is one.
    ///
    /// If `strip` is `false`, the line is returned as-is, line ending included.
    pub fn decode_line(&mut self, strip: bool) -> Option<String> {
        self.skip_pending_lf();
        let pos = self.buf.iter().position(|b| *b == b'\n' || *b == b'\r')?;
        let mut end = pos + 1;
        if self.buf[pos] == b'\r' {
            match self.buf.get(end) {
                Some(&b'\n') => end += 1,
                Some(_) => {},
                None => self.pending_cr = true
            }
        }
        let line = self.buf.split_to(end);
        Some(Self::line_to_string(&line, strip))
    }
    fn skip_pending_lf(&mut self) {
        if !self.pending_cr || self.buf.is_empty() {
            return;
        }
        if self.buf[0] == b'\n' {
            self.buf.split_to(1);
        }
        self.pending_cr = false;
    }
    /// Take whatever is left in the buffer as a final, unterminated line.
    ///
    /// Used when the other end goes away without finishing its last line.
    pub fn decode_eof(&mut self, strip: bool) -> Option<String> {
        self.skip_pending_lf();
        if self.buf.is_empty() {
            return None;
        }
        let len = self.buf.len();
        let line = self.buf.split_to(len);
        Some(Self::line_to_string(&line, strip))
    }
    fn line_to_string(data: &[u8], strip: bool) -> String {
        trace!("decoding line: {:?}", data);
        let line = ASCII.decode(data, DecoderTrap::Replace)
            .unwrap_or_else(|_| String::from_utf8_lossy(data).into_owned());
        if strip {
            line.trim().to_string()
        }
        else {
            line
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_lines() {
        let mut codec = LineCodec::new();
        codec.extend(b"\r\nOK\r\n+CREG");
        assert_eq!(codec.decode_line(true), Some("".into()));
        assert_eq!(codec.decode_line(true), Some("OK".into()));
        assert_eq!(codec.decode_line(true), None);
        codec.extend(b": 0,1\r\n");
        assert_eq!(codec.decode_line(true), Some("+CREG: 0,1".into()));
        assert!(codec.is_empty());
    }
    #[test]
    fn unstripped() {
        let mut codec = LineCodec::new();
        codec.extend(b"  OK\r\n");
        assert_eq!(codec.decode_line(false), Some("  OK\r\n".into()));
    }
    #[test]
    fn leftovers_at_eof() {
        let mut codec = LineCodec::new();
        assert_eq!(codec.decode_eof(true), None);
        codec.extend(b"> ");
        assert_eq!(codec.decode_line(true), None);
        assert_eq!(codec.decode_eof(true), Some(">".into()));
        assert!(codec.is_empty());
    }
    #[test]
    fn bare_carriage_returns() {
        let mut codec = LineCodec::new();
        codec.extend(b"\rOK\r");
        assert_eq!(codec.decode_line(true), Some("".into()));
        assert_eq!(codec.decode_line(true), Some("OK".into()));
        assert_eq!(codec.decode_line(true), None);
        assert_eq!(codec.decode_eof(true), None);
    }
    #[test]
    fn crlf_split_across_reads() {
        let mut codec = LineCodec::new();
        codec.extend(b"OK\r");
        assert_eq!(codec.decode_line(true), Some("OK".into()));
        assert_eq!(codec.decode_line(true), None);
        codec.extend(b"\n+CMGS: 3\r\n");
        assert_eq!(codec.decode_line(true), Some("+CMGS: 3".into()));
        assert!(codec.is_empty());
    }
    #[test]
    fn non_ascii_is_replaced() {
        let mut codec = LineCodec::new();
        codec.extend(b"O\xFFK\n");
        assert_eq!(codec.decode_line(true), Some("O\u{FFFD}K".into()));
    }
}
