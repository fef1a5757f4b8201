//! Types for building SMS-SUBMIT PDUs (Protocol Data Units).
//!
//! A PDU is what actually gets handed to the modem in PDU mode: a hex string that contains the
//! destination address, a few flag octets, and the packed message text. Only the subset needed
//! for sending a single, 7-bit-encoded segment is modelled here.
//!
//! The layout of a `SubmitPdu`, in order:
//!
//! | field                 | value                                                  |
//! |-----------------------|--------------------------------------------------------|
//! | SMSC                  | `00` (use the one stored on the SIM)                   |
//! | first octet           | `21` with a status report requested, `01` otherwise    |
//! | message reference     | `00` (let the modem pick)                              |
//! | destination           | see `PduAddress::as_bytes`                             |
//! | protocol identifier   | the `SmsType`                                          |
//! | data coding scheme    | `10` for flash (class 0) messages, `00` otherwise      |
//! | user data length      | number of characters in the text                       |
//! | user data             | the packed GSM 7-bit text                              |
use std::fmt;
use std::str::FromStr;
use crate::errors::*;
use crate::gsm_encoding::{gsm_encode_septets, pack_septets};

/// The maximum number of characters in a single SMS.
pub const MAX_MESSAGE_LEN: usize = 160;
/// The maximum number of digits in a destination address.
pub const MAX_ADDRESS_DIGITS: usize = 20;

/// Type-of-number bits of the type-of-address octet. Only the two kinds of number we send.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypeOfNumber {
    Unknown = 0b0_000_0000,
    International = 0b0_001_0000
}
/// Numbering-plan bits of the type-of-address octet.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumberingPlanIdentification {
    IsdnTelephone = 0b0_000_0001
}
/// The type-of-address octet of a `PduAddress`.
///
/// Numbers written with a leading `+` are `International`; everything else is sent as `Unknown`,
/// which networks treat as a national number. Both use the ISDN numbering plan, giving `91` and
/// `81` on the wire respectively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressType {
    pub type_of_number: TypeOfNumber,
    pub numbering_plan_identification: NumberingPlanIdentification
}
impl Default for AddressType {
    fn default() -> Self {
        AddressType {
            type_of_number: TypeOfNumber::International,
            numbering_plan_identification: NumberingPlanIdentification::IsdnTelephone
        }
    }
}
impl Into<u8> for AddressType {
    fn into(self) -> u8 {
        let mut ret: u8 = 0b1_000_0000;
        ret |= self.type_of_number as u8;
        ret |= self.numbering_plan_identification as u8;
        ret
    }
}
/// A phone number, as a list of decimal digits (one per `u8`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(pub Vec<u8>);
impl PhoneNumber {
    /// Pack the digits two to an octet, low nibble first, padding an odd-length number with `F`.
    ///
    /// This is the "swap every pair of digits" encoding: `12345` becomes `21 43 F5`.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut ret = vec![];
        let mut cur = 0b0000_0000;
        for (i, b) in self.0.iter().enumerate() {
            let mut b = *b;
            if i % 2 == 0 {
                cur |= b;
            }
            else {
                b = b << 4;
                cur |= b;
                ret.push(cur);
                cur = 0b0000_0000;
            }
        }
        if self.0.len() % 2 != 0 {
            cur |= 0b1111_0000;
            ret.push(cur);
        }
        ret
    }
}
/// A destination address: a phone number and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduAddress {
    pub type_addr: AddressType,
    pub number: PhoneNumber
}
impl fmt::Display for PduAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.type_addr.type_of_number == TypeOfNumber::International {
            write!(f, "+")?;
        }
        for b in self.number.0.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
impl FromStr for PduAddress {
    type Err = GatewayError;
    /// Parse a phone number: one or more decimal digits, optionally preceded by a `+` to mark it
    /// as international.
    fn from_str(st: &str) -> GatewayResult<Self> {
        let (int, digits) = if st.starts_with('+') {
            (true, &st[1..])
        }
        else {
            (false, st)
        };
        if digits.is_empty()
            || digits.len() > MAX_ADDRESS_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GatewayError::InvalidNumber(st.into()));
        }
        let ton = if int {
            TypeOfNumber::International
        }
        else {
            TypeOfNumber::Unknown
        };
        Ok(PduAddress {
            type_addr: AddressType {
                type_of_number: ton,
                numbering_plan_identification: NumberingPlanIdentification::IsdnTelephone
            },
            number: PhoneNumber(digits.bytes().map(|b| b - b'0').collect())
        })
    }
}
impl PduAddress {
    /// Encode the address as it appears in a PDU: digit count, type-of-address, then the packed
    /// digits.
    ///
    /// The length is the number of digits (not octets), and doesn't count the `F` filler.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut ret = vec![self.number.0.len() as u8, self.type_addr.into()];
        ret.extend(self.number.as_bytes());
        ret
    }
}
/// The kind of message being sent (the TP-PID octet).
///
/// This only affects how the receiving phone treats the message; it has no effect on encoding.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
pub enum SmsType {
    /// A normal message.
    Default = 0x00,
    /// A "silent" message: acknowledged by the phone, but neither shown nor stored.
    Type0 = 0x40,
    /// Replaces any stored message of the same replace type from the same sender.
    ReplaceType1 = 0x41,
    ReplaceType2 = 0x42,
    ReplaceType3 = 0x43,
    ReplaceType4 = 0x44,
    ReplaceType5 = 0x45,
    ReplaceType6 = 0x46,
    ReplaceType7 = 0x47,
    /// Asks the recipient to call back.
    ReturnCallMessage = 0x5F
}
impl Default for SmsType {
    fn default() -> Self {
        SmsType::Default
    }
}
/// An outgoing (SMS-SUBMIT) message, containing one segment of GSM 7-bit text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPdu {
    pub destination: PduAddress,
    pub text: String,
    pub sms_type: SmsType,
    /// Whether to display the message immediately, without storing it (message class 0).
    pub flash: bool,
    /// Whether to request a status report from the SMSC.
    pub delivery_report: bool
}
impl SubmitPdu {
    /// Make a normal message to `destination`.
    ///
    /// Fails if `destination` isn't a phone number, or if `text` is more than `MAX_MESSAGE_LEN`
    /// characters long.
    pub fn new(destination: &str, text: &str) -> GatewayResult<Self> {
        check_message_len(text)?;
        Ok(SubmitPdu {
            destination: destination.parse()?,
            text: text.into(),
            sms_type: SmsType::Default,
            flash: false,
            delivery_report: false
        })
    }
    pub fn sms_type(mut self, sms_type: SmsType) -> Self {
        self.sms_type = sms_type;
        self
    }
    pub fn flash(mut self, flash: bool) -> Self {
        self.flash = flash;
        self
    }
    pub fn delivery_report(mut self, delivery_report: bool) -> Self {
        self.delivery_report = delivery_report;
        self
    }
    /// Serialize the PDU to octets.
    ///
    /// The fields are public, so the text length is checked again here: it has to fit the
    /// one-octet length field.
    pub fn as_bytes(&self) -> GatewayResult<Vec<u8>> {
        check_message_len(&self.text)?;
        let mut ret = vec![];
        ret.push(0x00);
        ret.push(if self.delivery_report { 0x21 } else { 0x01 });
        ret.push(0x00);
        ret.extend(self.destination.as_bytes());
        ret.push(self.sms_type as u8);
        ret.push(if self.flash { 0x10 } else { 0x00 });
        // Characters, not septets or octets: an extension character still counts once here.
        ret.push(self.text.chars().count() as u8);
        ret.extend(pack_septets(&gsm_encode_septets(&self.text)));
        Ok(ret)
    }
    /// Serialize the PDU to the uppercase hex string given to the modem.
    pub fn to_hex(&self) -> GatewayResult<String> {
        Ok(HexData(&self.as_bytes()?).to_string())
    }
}
/// Reject message text longer than `MAX_MESSAGE_LEN` characters.
pub fn check_message_len(text: &str) -> GatewayResult<()> {
    let len = text.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(GatewayError::InputTooLong {
            len,
            max: MAX_MESSAGE_LEN
        });
    }
    Ok(())
}
/// The length announced in `AT+CMGS=<length>` for a hex-encoded PDU.
///
/// This is `(hex length - 1) / 2`, which (since the PDU always has an even number of hex digits)
/// comes out one short of the octet count: the leading SMSC octet isn't counted.
pub fn cmgs_length(pdu_hex: &str) -> usize {
    pdu_hex.len().saturating_sub(1) / 2
}
/// Displays a byte slice as uppercase hex.
pub struct HexData<'a>(pub &'a [u8]);
impl<'a> fmt::Display for HexData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
impl<'a> HexData<'a> {
    pub fn decode(data: &str) -> GatewayResult<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(GatewayError::InvalidPdu("odd-length hex string"));
        }
        data.as_bytes()
            .chunks(2)
            .map(::std::str::from_utf8)
            .map(|x| {
                match x {
                    // from_str_radix would take a sign, too.
                    Ok(x) if x.chars().all(|c| c.is_ascii_hexdigit()) => u8::from_str_radix(x, 16)
                        .map_err(|_| GatewayError::InvalidPdu("invalid hex string")),
                    _ => Err(GatewayError::InvalidPdu("invalid hex string"))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;
    use super::*;

    fn address_hex(st: &str) -> String {
        let addr: PduAddress = st.parse().unwrap();
        HexData(&addr.as_bytes()).to_string()
    }
    #[test]
    fn national_even_number() {
        assert_eq!(address_hex("123456"), "0681214365");
    }
    #[test]
    fn international_odd_number() {
        assert_eq!(address_hex("+12345"), "05912143F5");
        assert_eq!(address_hex("+4912345"), "0791942143F5");
    }
    #[test]
    fn address_display() {
        let addr: PduAddress = "+4912345".parse().unwrap();
        assert_eq!(addr.to_string(), "+4912345");
        assert_eq!(addr.type_addr, AddressType::default());
    }
    #[test]
    fn invalid_numbers() {
        for st in &["", "+", "12a45", "++123", "+12 34", "123456789012345678901"] {
            let res = st.parse::<PduAddress>();
            assert!(res.unwrap_err().is_invalid_number(), "{:?}", st);
        }
    }
    #[test]
    fn address_type_octet() {
        let ty: u8 = AddressType::default().into();
        assert_eq!(ty, 0x91);
        let ty: u8 = AddressType {
            type_of_number: TypeOfNumber::Unknown,
            ..AddressType::default()
        }.into();
        assert_eq!(ty, 0x81);
    }
    #[test]
    fn sms_type_values() {
        assert_eq!(SmsType::default() as u8, 0x00);
        assert_eq!(SmsType::Type0 as u8, 0x40);
        assert_eq!(SmsType::ReplaceType7 as u8, 0x47);
        assert_eq!(SmsType::from_u8(0x5F), Some(SmsType::ReturnCallMessage));
        assert_eq!(SmsType::from_u8(0x48), None);
    }
    #[test]
    fn simple_pdu() {
        let pdu = SubmitPdu::new("+4912345", "hello").unwrap();
        let hex = pdu.to_hex().unwrap();
        assert_eq!(hex, "0001000791942143F5000005E8329BFD06");
        assert_eq!(cmgs_length(&hex), 16);
    }
    #[test]
    fn pdu_with_all_options() {
        let pdu = SubmitPdu::new("0123456789", "Hi there!").unwrap()
            .sms_type(SmsType::ReplaceType1)
            .flash(true)
            .delivery_report(true);
        assert_eq!(pdu.to_hex().unwrap(), "0021000A811032547698411009C834888E2ECBCB21");
    }
    #[test]
    fn length_counts_characters_not_septets() {
        let pdu = SubmitPdu::new("123456", "{x}").unwrap();
        assert_eq!(pdu.to_hex().unwrap(), "00010006812143650000031B147E9302");
    }
    #[test]
    fn maximum_length() {
        let text = "a".repeat(160);
        let pdu = SubmitPdu::new("+447700900123", &text).unwrap();
        let hex = pdu.to_hex().unwrap();
        assert!(hex.starts_with("0001000C914477000910320000A0E170381C0E87C3"));
        assert_eq!(cmgs_length(&hex), 153);
        let err = SubmitPdu::new("+447700900123", &"a".repeat(161)).unwrap_err();
        match err {
            GatewayError::InputTooLong { len, max } => {
                assert_eq!(len, 161);
                assert_eq!(max, 160);
            },
            e => panic!("unexpected error: {}", e)
        }
    }
    #[test]
    fn length_is_checked_in_characters() {
        assert!(check_message_len(&"\u{00E9}".repeat(160)).is_ok());
        assert!(check_message_len(&"\u{00E9}".repeat(161)).is_err());
    }
    #[test]
    fn hex_decode() {
        assert_eq!(HexData::decode("00FF1a").unwrap(), vec![0x00, 0xFF, 0x1A]);
        assert!(HexData::decode("0").is_err());
        assert!(HexData::decode("ZZ").is_err());
        assert!(HexData::decode("+1").is_err());
        assert!(HexData::decode("-1").is_err());
    }
    #[test]
    fn text_changed_after_new_is_checked() {
        let mut pdu = SubmitPdu::new("+4912345", "hello").unwrap();
        pdu.text = "x".repeat(300);
        assert!(pdu.as_bytes().unwrap_err().is_input_too_long());
        match pdu.to_hex().unwrap_err() {
            GatewayError::InputTooLong { len, .. } => assert_eq!(len, 300),
            e => panic!("unexpected error: {}", e)
        }
    }
}
