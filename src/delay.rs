use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::timer::CountDown;

use embedded_time::duration::{Duration, Microseconds};
use nb::block;

/// Adapts any `CountDown` timer into the `DelayUs` source the driver
/// wants, for targets that expose timers but no blocking delay.
pub struct DelayTimer<CD>
    where
        CD: CountDown,
        CD::Time: Duration + From<Microseconds>,
{
    count_down: CD,
}

impl<CD> DelayTimer<CD>
    where
        CD: CountDown,
        CD::Time: Duration + From<Microseconds>,
{
    pub fn new(count_down: CD) -> Self {
        Self {
            count_down,
        }
    }
}

impl<CD> DelayUs<u16> for DelayTimer<CD>
    where
        CD: CountDown,
        CD::Time: Duration + From<Microseconds>,
{
    fn delay_us(&mut self, us: u16) {
        let duration = Microseconds(us as u32);
        self.count_down.start(duration);
        block!(self.count_down.wait()).ok();
    }
}
