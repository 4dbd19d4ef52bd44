use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

/// CS setup time before the first clock edge. The datasheet asks for
/// 100ns; 1us is the shortest delay we can request portably.
const SETTLE_US: u16 = 1;

pub(crate) struct ChipSelect<Pin>
    where Pin: OutputPin,
{
    pin: Pin,
}

impl<Pin> ChipSelect<Pin>
    where Pin: OutputPin,
{
    /// Construct a new CS pin controller and set it high (unselected),
    /// which also tells the chip to run conversions until the next read.
    pub(crate) fn new(mut pin: Pin) -> Self {
        pin.set_high().ok();
        Self {
            pin,
        }
    }

    pub(crate) fn select<'pin, D>(&'pin mut self, delay: &mut D) -> Selected<'pin, Pin>
        where D: DelayUs<u16>,
    {
        Selected::new(self, delay)
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
    }

    fn set_high(&mut self) {
        self.pin.set_high().ok();
    }
}

pub(crate) struct Selected<'pin, Pin>
    where Pin: OutputPin,
{
    cs: &'pin mut ChipSelect<Pin>,
}

impl<'pin, Pin> Selected<'pin, Pin>
    where Pin: OutputPin,
{
    fn new<D>(cs: &'pin mut ChipSelect<Pin>, delay: &mut D) -> Self
        where D: DelayUs<u16>,
    {
        cs.set_low();
        delay.delay_us(SETTLE_US);
        Self {
            cs
        }
    }
}

impl<Pin> Drop for Selected<'_, Pin>
    where Pin: OutputPin,
{
    fn drop(&mut self) {
        self.cs.set_high();
    }
}
