//! The high-level operations of a `ModemSession`.
//!
//! Each submodule adds methods to `ModemSession` that send a short, fixed sequence of AT
//! commands, and turn the replies into typed results.
pub mod network;
pub mod sms;
