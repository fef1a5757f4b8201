//! Send one message: `send_sms <device> <recipient> <message>`.
//!
//! Set `RUST_LOG=sms_gateway=debug` to see what's going on.
use sms_gateway::{ModemSession, SessionConfig};
use sms_gateway::pdu::SmsType;

fn main() {
    env_logger::init().unwrap();
    let args = ::std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        eprintln!("usage: {} <device> <recipient> <message>", args[0]);
        ::std::process::exit(1);
    }
    let config = SessionConfig {
        verbose: true,
        ..SessionConfig::default()
    };
    let mut modem = ModemSession::open(&args[1], config).unwrap();
    println!("PIN ready: {:?}", modem.is_pin_ready());
    println!("Selecting network...");
    println!("Result: {:?}", modem.auto_select_network());
    println!("Connected: {:?}", modem.is_connected());
    println!("Sending \"{}\" to {}...", args[3], args[2]);
    println!("Result: {:?}", modem.send(&args[2], &args[3], SmsType::Default, false, false));
}
