//! Parsers for the information responses the modem sends back.
//!
//! Every parser here works on a single line, with the line ending already removed.
use std::str;
use nom::{digit, IResult};

pub const CREG_PREFIX: &str = "+CREG: ";
pub const CMS_ERROR_PREFIX: &str = "+CMS ERROR: ";
pub const CMGS_PREFIX: &str = "+CMGS: ";

named!(pub parse_integer(&[u8]) -> u32,
       map_res!(
           map_res!(digit, str::from_utf8),
           |st: &str| st.parse::<u32>()
       )
);
named!(pub parse_creg(&[u8]) -> (u32, u32),
       do_parse!(
           tag!(CREG_PREFIX) >>
           n: parse_integer >>
           tag!(",") >>
           stat: parse_integer >>
           (n, stat)
       )
);
named!(pub parse_cms_error(&[u8]) -> u32,
       preceded!(tag!(CMS_ERROR_PREFIX), parse_integer)
);
named!(pub parse_cmgs(&[u8]) -> u32,
       preceded!(tag!(CMGS_PREFIX), parse_integer)
);

/// Parse a `+CREG: <n>,<stat>` line, returning `(n, stat)`.
///
/// With `n` set to 2, some modems append location information after `stat`; it's ignored.
pub fn registration_line(line: &str) -> Option<(u32, u32)> {
    match parse_creg(line.as_bytes()) {
        IResult::Done(rest, ret) => {
            if rest.is_empty() || rest[0] == b',' {
                Some(ret)
            }
            else {
                None
            }
        },
        _ => None
    }
}
/// Parse a `+CMS ERROR: <code>` line, returning the code.
pub fn cms_error_line(line: &str) -> Option<u32> {
    whole_line(parse_cms_error(line.as_bytes()))
}
/// Parse a `+CMGS: <mr>` line, returning the message reference.
pub fn cmgs_line(line: &str) -> Option<u32> {
    whole_line(parse_cmgs(line.as_bytes()))
}
fn whole_line<T>(res: IResult<&[u8], T>) -> Option<T> {
    match res {
        IResult::Done(rest, ret) if rest.is_empty() => Some(ret),
        _ => None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integer() {
        assert_eq!(parse_integer(b"9001"), IResult::Done(&[] as &[_], 9001));
        assert_eq!(parse_integer(b"38,1"), IResult::Done(&b",1"[..], 38));
        assert!(parse_integer(b"x1").is_err());
    }
    #[test]
    fn registration() {
        assert_eq!(registration_line("+CREG: 0,1"), Some((0, 1)));
        assert_eq!(registration_line("+CREG: 0,5"), Some((0, 5)));
        assert_eq!(registration_line("+CREG: 2,1,\"00C3\",\"0F1A\""), Some((2, 1)));
        assert_eq!(registration_line("+CREG: 0,"), None);
        assert_eq!(registration_line("+CREG: 0 1"), None);
        assert_eq!(registration_line("CREG: 0,1"), None);
        assert_eq!(registration_line("+CREG"), None);
        assert_eq!(registration_line(""), None);
    }
    #[test]
    fn cms_error() {
        assert_eq!(cms_error_line("+CMS ERROR: 38"), Some(38));
        assert_eq!(cms_error_line("+CMS ERROR: 500"), Some(500));
        assert_eq!(cms_error_line("+CMS ERROR: unknown"), None);
        assert_eq!(cms_error_line("+CME ERROR: 10"), None);
    }
    #[test]
    fn message_reference() {
        assert_eq!(cmgs_line("+CMGS: 12"), Some(12));
        assert_eq!(cmgs_line("+CMGS: 12 "), None);
        assert_eq!(cmgs_line("OK"), None);
    }
}
