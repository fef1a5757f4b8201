//! Sending SMS messages, in PDU mode (`AT+CMGS`).
use std::io::{Read, Write};
use crate::ModemSession;
use crate::at::{AtCommand, SUBMIT_CHARACTER};
use crate::errors::*;
use crate::parse;
use crate::pdu::{self, SmsType, SubmitPdu};

impl<T: Read + Write> ModemSession<T> {
    /// Send `text` to `destination`.
    ///
    /// `destination` is a phone number, optionally starting with `+` for the international
    /// format. `text` may be at most 160 characters long; characters that don't exist in the GSM
    /// 7-bit alphabet are silently left out.
    ///
    /// Before anything is sent, the SIM must be ready (`PinNotReady` otherwise) and the modem
    /// must be registered on a network (`NotConnected` otherwise). Invalid input is rejected
    /// without talking to the modem at all.
    ///
    /// Returns the message reference, if the modem reported one.
    pub fn send(
        &mut self,
        destination: &str,
        text: &str,
        sms_type: SmsType,
        flash: bool,
        delivery_report: bool
    ) -> GatewayResult<Option<u32>> {
        let pdu = SubmitPdu::new(destination, text)?
            .sms_type(sms_type)
            .flash(flash)
            .delivery_report(delivery_report);
        self.send_pdu(&pdu)
    }
    /// Send a prepared `SubmitPdu`; see `send`.
    pub fn send_pdu(&mut self, pdu: &SubmitPdu) -> GatewayResult<Option<u32>> {
        let pdu_hex = pdu.to_hex()?;
        let pin = self.pin_state()?;
        if pin != crate::cmd::network::PIN_READY {
            return Err(GatewayError::PinNotReady(pin));
        }
        let state = self.registration()?;
        if !state.is_registered() {
            return Err(GatewayError::NotConnected(state));
        }
        debug!("sending {:?} to {}", pdu.text, pdu.destination);
        self.send_pdu_cmd(&pdu_hex)
    }
    /// Hand a hex-encoded PDU to the modem, without any checks first.
    pub fn send_pdu_cmd(&mut self, pdu_hex: &str) -> GatewayResult<Option<u32>> {
        self.set_text_mode(false)?;
        verbose!(self, debug, "Send PDU message");
        let cmd = AtCommand::send_message(pdu::cmgs_length(pdu_hex));
        self.write(&format!("{}\r", cmd))?;
        self.expect_empty_line()?;
        self.write(&format!("{}{}\n", pdu_hex, SUBMIT_CHARACTER))?;
        self.expect_string(">", false)?;
        self.expect_empty_line()?;
        let res = self.read_line()?;
        if res.starts_with(parse::CMS_ERROR_PREFIX) {
            let code = parse::cms_error_line(&res)
                .ok_or_else(|| GatewayError::unexpected(format!("{}<code>", parse::CMS_ERROR_PREFIX), res.clone()))?;
            warn!("modem refused to send message: +CMS ERROR {}", code);
            return Err(GatewayError::ModemReportedError(code));
        }
        let reference = parse::cmgs_line(&res);
        self.expect_ok()?;
        verbose!(self, debug, "Message sent (reference: {:?})", reference);
        Ok(reference)
    }
}
