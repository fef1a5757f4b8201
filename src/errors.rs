//! Error handling.
use std::io;
use crate::cmd::network::RegistrationState;

/// Everything that can go wrong while talking to the modem.
///
/// None of these are retried internally; a failed operation is reported as-is and the caller
/// decides what to do next. After an `UnexpectedResponse`, the state of the modem conversation is
/// unknown, and the session should be thrown away.
#[derive(Fail, Debug, is_enum_variant)]
pub enum GatewayError {
    #[fail(display = "The maximum length for an SMS is {}, but the given SMS has a length of {}", max, len)]
    InputTooLong {
        len: usize,
        max: usize
    },
    #[fail(display = "Invalid phone number: {:?}", _0)]
    InvalidNumber(String),
    #[fail(display = "Invalid PDU: {}", _0)]
    InvalidPdu(&'static str),
    #[fail(display = "A PIN is required (modem said {:?}); it must be entered before using this library", _0)]
    PinNotReady(String),
    #[fail(display = "Network connection is missing: {}", _0)]
    NotConnected(#[cause] RegistrationState),
    #[fail(display = "Expected {:?}, but got {:?}", expected, got)]
    UnexpectedResponse {
        expected: String,
        got: String
    },
    #[fail(display = "Sending SMS failed. Error code: {}", _0)]
    ModemReportedError(u32),
    #[fail(display = "An I/O error occurred: {}", _0)]
    IoError(#[cause] io::Error)
}
impl GatewayError {
    pub(crate) fn unexpected<E: Into<String>, G: Into<String>>(expected: E, got: G) -> Self {
        GatewayError::UnexpectedResponse {
            expected: expected.into(),
            got: got.into()
        }
    }
}
impl From<io::Error> for GatewayError {
    fn from(e: io::Error) -> GatewayError {
        GatewayError::IoError(e)
    }
}
pub type GatewayResult<T> = Result<T, GatewayError>;
