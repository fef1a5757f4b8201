//! Checking that the modem is usable: network registration, and PIN state.
use std::io::{Read, Write};
use num::FromPrimitive;
use crate::ModemSession;
use crate::at::AtCommand;
use crate::errors::*;
use crate::parse;

/// The reply to `AT+CPIN?` when no PIN (or PUK) is needed.
pub const PIN_READY: &str = "+CPIN: READY";

/// The current registration state of the modem (from `AT+CREG`).
///
/// Modems have to be 'registered' (i.e. connected to) a given cellular network to be able to do
/// anything useful (text, call, etc.). Therefore, checking the registration state can be useful to
/// figure out why your modem isn't working.
#[repr(u8)]
#[derive(Fail, Debug, FromPrimitive, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationState {
    /// Not registered, and not searching for a new operator at present.
    #[fail(display = "Not registered; not searching for a new operator")]
    NotRegisteredAndDisabled = 0,
    /// Registered, and on our 'home' network (i.e. not roaming)
    #[fail(display = "Registered; on home network")]
    RegisteredHome = 1,
    /// Not registered, and searching for a new operator.
    #[fail(display = "Not registered; searching for a new operator")]
    NotRegisteredSearching = 2,
    /// Registration denied.
    #[fail(display = "Registration denied")]
    RegistrationDenied = 3,
    /// Registration state unknown.
    ///
    /// Values of `stat` that aren't listed here end up as this, too.
    #[fail(display = "Unknown registration state")]
    Unknown = 4,
    /// Registered, and on a 'roaming' network.
    #[fail(display = "Registered; roaming")]
    RegisteredRoaming = 5
}
impl RegistrationState {
    /// If the `RegistrationState` is either `RegisteredHome` or `RegisteredRoaming`, returns
    /// `true`. Otherwise, returns `false`.
    pub fn is_registered(&self) -> bool {
        use self::RegistrationState::*;

        match *self {
            RegisteredHome => true,
            RegisteredRoaming => true,
            _ => false
        }
    }
    /// Interpret the `stat` field of a `+CREG` response.
    pub fn from_stat(stat: u32) -> Self {
        RegistrationState::from_u32(stat).unwrap_or_else(|| {
            warn!("unknown registration state {}, treating it as unknown", stat);
            RegistrationState::Unknown
        })
    }
}
impl<T: Read + Write> ModemSession<T> {
    /// Let the modem pick a network operator by itself (`AT+COPS=0`).
    ///
    /// Switches the modem to text mode first.
    pub fn auto_select_network(&mut self) -> GatewayResult<()> {
        self.set_text_mode(true)?;
        verbose!(self, debug, "Enable auto selection for networks");
        self.command_ok(&AtCommand::automatic_operator())
    }
    /// Get the modem's current registration state (`AT+CREG?`).
    ///
    /// Switches the modem to text mode first. A reply that isn't of the form `+CREG: <n>,<stat>`
    /// is an `UnexpectedResponse`.
    pub fn registration(&mut self) -> GatewayResult<RegistrationState> {
        self.set_text_mode(true)?;
        verbose!(self, debug, "Query connection state");
        let line = self.command_info(&AtCommand::read("+CREG"))?;
        let (_, stat) = parse::registration_line(&line)
            .ok_or_else(|| GatewayError::unexpected(format!("{}<n>,<stat>", parse::CREG_PREFIX), line))?;
        Ok(RegistrationState::from_stat(stat))
    }
    /// Whether the modem is registered on a network, either at home or roaming.
    pub fn is_connected(&mut self) -> GatewayResult<bool> {
        let state = self.registration()?;
        let connected = state.is_registered();
        verbose!(self, debug, "Modem has a network connection: {} ({})", connected, state);
        Ok(connected)
    }
    /// Get the raw reply to `AT+CPIN?`, e.g. `+CPIN: SIM PIN`.
    pub fn pin_state(&mut self) -> GatewayResult<String> {
        verbose!(self, debug, "Check if PIN is ready");
        self.command_info(&AtCommand::read("+CPIN"))
    }
    /// Whether the SIM is ready for use, i.e. no PIN needs to be entered.
    ///
    /// This library never enters a PIN; if one is required, it has to be dealt with elsewhere.
    pub fn is_pin_ready(&mut self) -> GatewayResult<bool> {
        let ready = self.pin_state()? == PIN_READY;
        verbose!(self, debug, "PIN is ready: {}", ready);
        Ok(ready)
    }
}
