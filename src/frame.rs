/// D2..D0 flag short-to-VCC, short-to-GND and open-circuit faults.
const FAULT_MASK: u32 = 0x0000_0007;

/// The thermocouple temperature occupies D31..D18; everything below is
/// cold-junction data and fault detail, which this driver discards.
const TEMP_SHIFT: u32 = 18;
const TEMP_MASK: u32 = 0x3FFF;

/// Sign bit of the 14-bit temperature field.
const SIGN_BIT: u32 = 0x2000;

/// Set the two high bits to widen 14-bit two's complement to 16.
const SIGN_EXTEND: u16 = 0xC000;

/// One raw 32-bit word as shifted out by the chip, MSB first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame(pub(crate) u32);

impl Frame {
    /// The raw word, for callers that want the fields the decoder ignores.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Did the chip report a thermocouple fault? The cause (open circuit,
    /// short to GND, short to VCC) is not distinguished here.
    pub fn is_fault(&self) -> bool {
        self.0 & FAULT_MASK != 0
    }

    /// Thermocouple temperature in degrees Celsius, quarter-degree
    /// resolution, or NaN when any fault bit is set.
    pub fn thermocouple_celsius(&self) -> f32 {
        if self.is_fault() {
            log::warn!("thermocouple fault, frame {:#010x}", self.0);
            return f32::NAN;
        }

        let field = ((self.0 >> TEMP_SHIFT) & TEMP_MASK) as u16;

        // Value from the chip is 14-bit two's complement.
        let quarters = if u32::from(field) & SIGN_BIT != 0 {
            (field | SIGN_EXTEND) as i16
        } else {
            field as i16
        };

        f32::from(quarters) / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place a quarter-degree count in D31..D18, fault bits clear.
    fn frame_for(quarters: i16) -> Frame {
        Frame((u32::from(quarters as u16) & TEMP_MASK) << TEMP_SHIFT)
    }

    #[test]
    fn zero_frame_is_zero_celsius() {
        assert_eq!(Frame(0x0000_0000).thermocouple_celsius(), 0.0);
    }

    #[test]
    fn one_quarter_degree_steps() {
        assert_eq!(frame_for(1).thermocouple_celsius(), 0.25);
        assert_eq!(frame_for(-1).thermocouple_celsius(), -0.25);
    }

    #[test]
    fn all_ones_field_is_negative_quarter() {
        // 0x3FFF is -1 in 14-bit two's complement
        assert_eq!(Frame(0xFFFF_C000).thermocouple_celsius(), -0.25);
    }

    #[test]
    fn round_trips_known_temperatures() {
        for celsius in [-55.0f32, -0.25, 0.0, 0.25, 25.75, 100.0, 1023.75] {
            let frame = frame_for((celsius * 4.0) as i16);
            assert_eq!(frame.thermocouple_celsius(), celsius);
        }
    }

    #[test]
    fn any_fault_bit_yields_nan() {
        for fault in 1..8u32 {
            let frame = Frame(fault);
            assert!(frame.is_fault());
            assert!(frame.thermocouple_celsius().is_nan());
        }
    }

    #[test]
    fn fault_takes_priority_over_temperature_field() {
        // open-circuit bit set alongside a plausible 100C reading
        let frame = Frame(frame_for(400).bits() | 0x0000_0001);
        assert!(frame.thermocouple_celsius().is_nan());
    }

    #[test]
    fn fault_detail_bits_alone_do_not_fault() {
        // D16..D3 hold cold-junction data and the fault-detail summary;
        // only D2..D0 mark a fault
        let frame = Frame(0x0001_FFF8);
        assert!(!frame.is_fault());
        assert_eq!(frame.thermocouple_celsius(), 0.0);
    }

    #[test]
    fn decode_matches_shift_and_sign_extend() {
        for raw in [0x0000_0000u32, 0x6400_0000, 0x8000_0000, 0xFFFF_C000, 0x0004_0000] {
            let field = (raw >> 18) & 0x3FFF;
            let expect = if field & 0x2000 != 0 {
                (field as i32 - 0x4000) as f32 / 4.0
            } else {
                field as f32 / 4.0
            };
            assert_eq!(Frame(raw).thermocouple_celsius(), expect);
        }
    }
}
