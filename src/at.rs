//! The AT commands this library sends.
use std::fmt;

/// Line ending sent after an ordinary command.
pub const COMMAND_TERMINATOR: &str = "\r\n";
/// Character that ends the PDU given to `AT+CMGS` (Ctrl-Z).
pub const SUBMIT_CHARACTER: char = '\x1A';

#[derive(Debug, Clone, PartialEq, Eq, is_enum_variant)]
pub enum AtCommand {
    /// Either execute a non-basic command named `param` with `value` as
    /// argument, or set the current value of `param` to `value`.
    ///
    /// Corresponds to `AT<param>=<value>`.
    Equals {
        param: String,
        value: u32,
    },
    /// Read the current value of `param`.
    ///
    /// Corresponds to `AT<param>?`.
    Read {
        param: String
    }
}
impl AtCommand {
    pub fn equals(param: &str, value: u32) -> Self {
        AtCommand::Equals { param: param.into(), value }
    }
    pub fn read(param: &str) -> Self {
        AtCommand::Read { param: param.into() }
    }
    /// `AT+CMGF=<mode>`: text mode (`true`) or PDU mode (`false`).
    pub fn message_format(text: bool) -> Self {
        Self::equals("+CMGF", if text { 1 } else { 0 })
    }
    /// `AT+COPS=0`: select an operator automatically.
    pub fn automatic_operator() -> Self {
        Self::equals("+COPS", 0)
    }
    /// `AT+CMGS=<length>`: announce a PDU of `length` octets.
    pub fn send_message(length: usize) -> Self {
        Self::equals("+CMGS", length as u32)
    }
}
impl fmt::Display for AtCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::AtCommand::*;
        match *self {
            Equals { ref param, value } => write!(f, "AT{}={}", param, value)?,
            Read { ref param } => write!(f, "AT{}?", param)?
        }
        Ok(())
    }
}
