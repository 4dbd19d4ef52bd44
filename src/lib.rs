//! Bit-banged interface for the MAX31855 thermocouple-to-digital converter.
//!
//! The MAX31855 speaks a read-only 3-wire protocol: while chip-select is
//! held low it shifts out a 32-bit frame MSB-first on its serial-out line.
//! This crate drives that protocol over plain `embedded-hal` digital pins,
//! so it works on any target that can toggle a GPIO and wait a microsecond;
//! no SPI peripheral is required.
//!
//! The caller owns pin configuration and the timing source. Construct a
//! [`Max31855`] from the clock output, serial-out input and chip-select
//! output pins plus a `DelayUs<u16>` implementation, then call
//! `read_temperature()`. Faults reported by the chip (open thermocouple,
//! short to GND, short to VCC) come back as `f32::NAN`.

#![cfg_attr(not(test), no_std)]

mod chip_select;
mod delay;
mod frame;
mod sensor;

pub use delay::DelayTimer;
pub use frame::Frame;
pub use sensor::Max31855;
