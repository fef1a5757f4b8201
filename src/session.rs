//! The modem session: sole owner of the channel to the modem, and the primitive line-based
//! operations everything else is built on.
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;
use crate::at::{AtCommand, COMMAND_TERMINATOR};
use crate::codec::LineCodec;
use crate::errors::*;

/// Delay between two written characters, giving slow modems time to keep up.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(10);

/// Options for a `ModemSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Log every step, and every line read and written, at `info` level.
    pub verbose: bool,
    /// How long to wait after writing each character.
    pub char_delay: Duration
}
impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            verbose: false,
            char_delay: DEFAULT_CHAR_DELAY
        }
    }
}
/// A conversation with a modem, over some channel (usually a serial device).
///
/// The session owns the channel for as long as it exists, and only ever does one thing with it
/// at a time: every operation writes a command and reads its reply before returning. Dropping
/// the session closes the channel; `into_inner` gives it back instead.
///
/// The channel must already be configured (baud rate, etc.). No timeouts are imposed here: if the
/// modem never answers, reads block for as long as the channel lets them.
pub struct ModemSession<T> {
    channel: T,
    codec: LineCodec,
    pub(crate) config: SessionConfig
}
impl ModemSession<File> {
    /// Open the modem device at `path` for reading and writing.
    pub fn open<P: AsRef<Path>>(path: P, config: SessionConfig) -> GatewayResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)?;
        Ok(Self::with_config(file, config))
    }
}
impl<T: Read + Write> ModemSession<T> {
    /// Start a session on `channel`, with the default character delay.
    pub fn new(channel: T, verbose: bool) -> Self {
        Self::with_config(channel, SessionConfig {
            verbose,
            ..SessionConfig::default()
        })
    }
    pub fn with_config(channel: T, config: SessionConfig) -> Self {
        Self {
            channel,
            codec: LineCodec::new(),
            config
        }
    }
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    /// End the session, handing back the channel.
    pub fn into_inner(self) -> T {
        self.channel
    }
    /// Write `data`, one character at a time, waiting `char_delay` after each.
    pub fn write(&mut self, data: &str) -> GatewayResult<()> {
        verbose!(self, trace, "WRITE: {:?}", data);
        for b in data.as_bytes() {
            self.channel.write_all(&[*b])?;
            self.channel.flush()?;
            if self.config.char_delay > Duration::from_millis(0) {
                thread::sleep(self.config.char_delay);
            }
        }
        Ok(())
    }
    /// Write an AT command, followed by `\r\n`.
    pub fn write_command(&mut self, cmd: &AtCommand) -> GatewayResult<()> {
        self.write(&format!("{}{}", cmd, COMMAND_TERMINATOR))
    }
    /// Read the next line, with surrounding whitespace removed.
    pub fn read_line(&mut self) -> GatewayResult<String> {
        self.read_line_raw(true)
    }
    /// Read the next line. If `strip` is `false`, the line ending is kept, too.
    pub fn read_line_raw(&mut self, strip: bool) -> GatewayResult<String> {
        let mut buf = [0; 256];
        let line = loop {
            if let Some(line) = self.codec.decode_line(strip) {
                break line;
            }
            match self.channel.read(&mut buf) {
                Ok(0) => {
                    match self.codec.decode_eof(strip) {
                        Some(line) => break line,
                        None => {
                            return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                                                      "modem channel closed").into());
                        }
                    }
                },
                Ok(n) => self.codec.extend(&buf[..n]),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e.into())
            }
        };
        verbose!(self, trace, "READ: {:?}", line);
        Ok(line)
    }
    /// Read a line, failing unless it's empty.
    pub fn expect_empty_line(&mut self) -> GatewayResult<()> {
        let line = self.read_line()?;
        if !line.is_empty() {
            return Err(GatewayError::unexpected("", line));
        }
        Ok(())
    }
    /// Read a line, failing unless it's exactly `expected`.
    ///
    /// If `blank_before` is set, an empty line is expected first (modems usually send one before
    /// each response).
    pub fn expect_string(&mut self, expected: &str, blank_before: bool) -> GatewayResult<()> {
        if blank_before {
            self.expect_empty_line()?;
        }
        let line = self.read_line()?;
        if line != expected {
            return Err(GatewayError::unexpected(expected, line));
        }
        Ok(())
    }
    /// Expect an empty line followed by `OK`.
    pub fn expect_ok(&mut self) -> GatewayResult<()> {
        self.expect_string("OK", true)
    }
    /// Write `cmd`, and expect a bare `OK` in reply.
    pub(crate) fn command_ok(&mut self, cmd: &AtCommand) -> GatewayResult<()> {
        self.write_command(cmd)?;
        self.expect_ok()
    }
    /// Write `cmd`, and return the single information line that comes before the `OK`.
    pub(crate) fn command_info(&mut self, cmd: &AtCommand) -> GatewayResult<String> {
        self.write_command(cmd)?;
        self.expect_empty_line()?;
        let line = self.read_line()?;
        self.expect_ok()?;
        Ok(line)
    }
    /// Switch between text mode and PDU mode (`AT+CMGF`).
    pub fn set_text_mode(&mut self, text: bool) -> GatewayResult<()> {
        if text {
            verbose!(self, debug, "Change to text mode");
        }
        else {
            verbose!(self, debug, "Change to PDU mode");
        }
        self.command_ok(&AtCommand::message_format(text))
    }
}
