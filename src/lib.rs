//! The `sms-gateway` library sends SMS messages through a cellular modem that speaks the
//! Hayes/AT command set, such as the USB 3G sticks and GSM modules commonly found attached to
//! small servers.
//!
//! Messages are sent in PDU mode, using PDUs built by this library (see the `pdu` module) with
//! text packed into the GSM 7-bit alphabet (see `gsm_encoding`). Only single-segment, 7-bit
//! messages are supported; receiving messages isn't.
//!
//! Everything is synchronous: a `ModemSession` owns the channel to the modem, and each operation
//! blocks until the modem has answered.
//!
//! ```no_run
//! use sms_gateway::{ModemSession, SessionConfig};
//! use sms_gateway::pdu::SmsType;
//!
//! let mut modem = ModemSession::open("/dev/ttyUSB2", SessionConfig::default())?;
//! modem.auto_select_network()?;
//! modem.send("+4912345678", "Hello from the modem!", SmsType::Default, false, false)?;
//! # Ok::<(), sms_gateway::errors::GatewayError>(())
//! ```

#[macro_use] extern crate log;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate nom;
#[macro_use] extern crate derive_is_enum_variant;
#[macro_use] extern crate num_derive;

/// Logs at `info` level if the session is verbose, and at `$quiet` level otherwise.
macro_rules! verbose {
    ($session:expr, $quiet:ident, $($arg:tt)*) => {
        if $session.config.verbose {
            info!($($arg)*);
        }
        else {
            $quiet!($($arg)*);
        }
    }
}

pub mod errors;
pub mod gsm_encoding;
pub mod at;
pub mod pdu;
pub mod parse;
pub mod codec;
pub mod session;
pub mod cmd;

pub use crate::errors::{GatewayError, GatewayResult};
pub use crate::session::{ModemSession, SessionConfig};
