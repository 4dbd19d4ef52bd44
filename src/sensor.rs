use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::chip_select::ChipSelect;
use crate::frame::Frame;

/// Hold time on each clock phase. The chip is good to 5MHz; 1us per
/// phase keeps us well inside that on any target.
const BIT_DELAY_US: u16 = 1;

/// Driver for one MAX31855, bit-banging its read-only serial protocol
/// over three digital lines.
pub struct Max31855<Sck, So, Cs, D>
    where
        Sck: OutputPin,
        So: InputPin,
        Cs: OutputPin,
        D: DelayUs<u16>,
{
    sck: Sck,
    so: So,
    cs: ChipSelect<Cs>,
    delay: D,
}

impl<Sck, So, Cs, D> Max31855<Sck, So, Cs, D>
    where
        Sck: OutputPin,
        So: InputPin,
        Cs: OutputPin,
        D: DelayUs<u16>,
{
    /// Take ownership of the three lines wired to the chip's SCK, SO and
    /// CS pins, plus a delay source. CS is driven high straight away so
    /// the chip converts until the first read; nothing else is touched.
    pub fn new(sck: Sck, so: So, cs: Cs, delay: D) -> Self {
        Self {
            sck,
            so,
            cs: ChipSelect::new(cs),
            delay,
        }
    }

    /// Read the thermocouple temperature in degrees Celsius, at the
    /// chip's quarter-degree resolution.
    ///
    /// Blocks for the duration of one 32-bit transfer, around 100us.
    /// A fault reported by the chip comes back as `f32::NAN`; retrying
    /// is up to the caller.
    pub fn read_temperature(&mut self) -> f32 {
        self.read_frame().thermocouple_celsius()
    }

    /// Acquire one raw frame, for callers that want the undecoded word.
    ///
    /// Each call is a complete transfer: CS is released again before
    /// returning, which starts the chip on its next conversion.
    pub fn read_frame(&mut self) -> Frame {
        // Clock idles low before the chip is addressed.
        self.sck.set_low().ok();
        self.delay.delay_us(BIT_DELAY_US);

        let mut raw = 0 as u32;

        {
            let _selected = self.cs.select(&mut self.delay);

            // D31 first. The chip presents each bit while the clock is
            // low, so sample on the low phase.
            for bit in (0..32).rev() {
                self.sck.set_low().ok();
                self.delay.delay_us(BIT_DELAY_US);
                if self.so.is_high().unwrap_or(false) {
                    raw |= 1 << bit;
                }

                self.sck.set_high().ok();
                self.delay.delay_us(BIT_DELAY_US);
            }
        }

        log::debug!("frame {:#010x}", raw);
        Frame(raw)
    }
}
