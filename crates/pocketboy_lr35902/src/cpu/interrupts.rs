//! Interrupt-master-enable handling and interrupt entry.
//!
//! The core owns only the master enable bit and the entry sequence; which
//! sources are pending lives on the bus in the IE ($FFFF) and IF ($FF0F)
//! registers, maintained by the external interrupt controller.

mod ime;
mod poll;
mod service;
