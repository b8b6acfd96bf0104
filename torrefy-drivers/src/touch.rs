//! FT6236 capacitive touch controller
//!
//! FocalTech FT6236 on the panel glass, I2C address 0x38. The panel only
//! ever wants the first touch point, so the driver reads the touch-data
//! block in one burst and decodes point 1; a second finger is ignored.
//!
//! Coordinates come back in the controller's native frame. Mapping into
//! panel space (rotation, mirroring) is the embedding's job, done before
//! the sample reaches the dispatcher.

use embedded_hal::i2c::I2c;

use torrefy_core::traits::TouchScreen;
use torrefy_core::ui::TouchPoint;

/// Stock 7-bit address of the FT6236.
pub const FT6236_ADDRESS: u8 = 0x38;

/// Vendor ID a FocalTech part reports from [`reg::VENDOR_ID`].
pub const FOCALTECH_VENDOR: u8 = 0x11;

/// FT6236 register addresses
pub mod reg {
    /// Active touch point count (low nibble).
    pub const TD_STATUS: u8 = 0x02;
    /// Point 1 X high bits plus event flag.
    pub const P1_XH: u8 = 0x03;
    /// Point 1 X low byte.
    pub const P1_XL: u8 = 0x04;
    /// Point 1 Y high bits plus touch ID.
    pub const P1_YH: u8 = 0x05;
    /// Point 1 Y low byte.
    pub const P1_YL: u8 = 0x06;
    /// Touch detection threshold.
    pub const THRESHOLD: u8 = 0x80;
    /// Vendor ID.
    pub const VENDOR_ID: u8 = 0xA8;
}

/// Driver for the FT6236 touch controller.
pub struct Ft6236<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ft6236<I2C> {
    /// Driver at the stock controller address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, FT6236_ADDRESS)
    }

    /// Driver at a non-stock address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check the vendor ID register for a FocalTech part.
    pub fn probe(&mut self) -> Result<bool, I2C::Error> {
        let mut vendor = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg::VENDOR_ID], &mut vendor)?;
        Ok(vendor[0] == FOCALTECH_VENDOR)
    }

    /// Set the touch detection threshold. Lower is more sensitive; the
    /// power-on default is 128.
    pub fn set_threshold(&mut self, threshold: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[reg::THRESHOLD, threshold])
    }
}

impl<I2C: I2c> TouchScreen for Ft6236<I2C> {
    type Error = I2C::Error;

    fn touch_point(&mut self) -> Result<Option<TouchPoint>, Self::Error> {
        // TD_STATUS through P1_YL in one burst.
        let mut data = [0u8; 5];
        self.i2c
            .write_read(self.address, &[reg::TD_STATUS], &mut data)?;

        // The count nibble reads 0x0F while the controller has nothing
        // valid to report (e.g. right after power-on).
        let touches = data[0] & 0x0F;
        if touches == 0 || touches > 2 {
            return Ok(None);
        }

        let x = (u16::from(data[1] & 0x0F) << 8) | u16::from(data[2]);
        let y = (u16::from(data[3] & 0x0F) << 8) | u16::from(data[4]);
        Ok(Some(TouchPoint::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    /// Scripted I2C bus: one reply per transaction, every write recorded.
    struct MockBus {
        replies: Vec<Result<Vec<u8, 8>, ErrorKind>, 4>,
        reply_index: usize,
        writes: Vec<Vec<u8, 4>, 4>,
        addresses: Vec<u8, 4>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                replies: Vec::new(),
                reply_index: 0,
                writes: Vec::new(),
                addresses: Vec::new(),
            }
        }

        fn reply(mut self, bytes: &[u8]) -> Self {
            let _ = self.replies.push(Ok(Vec::from_slice(bytes).unwrap()));
            self
        }

        fn fail(mut self) -> Self {
            let _ = self.replies.push(Err(ErrorKind::Bus));
            self
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let _ = self.addresses.push(address);
            let reply = self
                .replies
                .get(self.reply_index)
                .cloned()
                .unwrap_or(Err(ErrorKind::Other));
            self.reply_index += 1;
            let reply = reply?;

            let mut remaining = reply.as_slice();
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => {
                        let _ = self.writes.push(Vec::from_slice(bytes).unwrap());
                    }
                    Operation::Read(buf) => {
                        let n = buf.len().min(remaining.len());
                        buf[..n].copy_from_slice(&remaining[..n]);
                        remaining = &remaining[n..];
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_no_touch() {
        let bus = MockBus::new().reply(&[0x00, 0x00, 0x00, 0x00, 0x00]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.touch_point(), Ok(None));

        let bus = touch.release();
        assert_eq!(bus.addresses.as_slice(), &[0x38]);
        assert_eq!(bus.writes[0].as_slice(), &[reg::TD_STATUS]);
    }

    #[test]
    fn test_single_touch_decodes() {
        // One finger at (300, 200).
        let bus = MockBus::new().reply(&[0x01, 0x01, 0x2C, 0x00, 0xC8]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.touch_point(), Ok(Some(TouchPoint::new(300, 200))));
    }

    #[test]
    fn test_event_bits_are_masked() {
        // Event flag in XH[7:6] and touch ID in YH[7:4] must not leak
        // into the coordinates.
        let bus = MockBus::new().reply(&[0x01, 0xC1, 0x2C, 0xB0, 0xC8]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.touch_point(), Ok(Some(TouchPoint::new(300, 200))));
    }

    #[test]
    fn test_powerup_count_reads_as_no_touch() {
        let bus = MockBus::new().reply(&[0x0F, 0xFF, 0xFF, 0xFF, 0xFF]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.touch_point(), Ok(None));
    }

    #[test]
    fn test_bus_error_propagates() {
        let bus = MockBus::new().fail();
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.touch_point(), Err(ErrorKind::Bus));
    }

    #[test]
    fn test_probe_checks_vendor() {
        let bus = MockBus::new().reply(&[FOCALTECH_VENDOR]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.probe(), Ok(true));

        let bus = MockBus::new().reply(&[0x00]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.probe(), Ok(false));
    }

    #[test]
    fn test_set_threshold_writes_register() {
        let bus = MockBus::new().reply(&[]);
        let mut touch = Ft6236::new(bus);
        assert_eq!(touch.set_threshold(64), Ok(()));

        let bus = touch.release();
        assert_eq!(bus.writes[0].as_slice(), &[reg::THRESHOLD, 64]);
    }
}
