//! Resistive touch panel input.
//!
//! [`Xpt2046`] samples the raw 12-bit plate readings over SPI,
//! [`ResistiveTouch`] filters and calibrates them into panel coordinates for
//! the active orientation. [`PenLatch`] is the flag an interrupt handler sets
//! when the pen line goes low.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::InputPin;
use embedded_hal::spi::SpiDevice;

use crate::ili9325::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::orientation::Orientation;

/// XPT2046 command: 12-bit differential X measurement.
pub const CMD_READ_X: u8 = 0xD0;
/// XPT2046 command: 12-bit differential Y measurement.
pub const CMD_READ_Y: u8 = 0x90;

/// Upper bound for [`TouchConfig::samples`].
pub const MAX_SAMPLES: usize = 32;

/// A calibrated touch position in logical display coordinates.
///
/// `y` equals the panel height when the strip below the visible area is
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

/// Anything that reports touch positions.
pub trait TouchSource {
    type Error;

    /// Current touch position, `None` while the panel is not pressed.
    fn point(&mut self) -> Result<Option<TouchPoint>, Self::Error>;
}

/// Raw access to a touch controller.
pub trait TouchSampler {
    type Error;

    /// Whether the pen is on the panel.
    fn pen_down(&mut self) -> Result<bool, Self::Error>;

    /// Runs one conversion and returns its 12-bit result.
    fn sample(&mut self, command: u8) -> Result<u16, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchError<S, P> {
    Spi(S),
    Pen(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for TouchError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchError::Spi(e) => write!(f, "SPI error: {e:?}"),
            TouchError::Pen(e) => write!(f, "Pen line error: {e:?}"),
        }
    }
}

impl<S: fmt::Debug, P: fmt::Debug> core::error::Error for TouchError<S, P> {}

/// XPT2046 (ADS7843 compatible) touch controller.
pub struct Xpt2046<SPI, PEN> {
    spi: SPI,
    /// PENIRQ, low while pressed
    pen: PEN,
}

impl<SPI, PEN> Xpt2046<SPI, PEN>
where
    SPI: SpiDevice,
    PEN: InputPin,
{
    pub fn new(spi: SPI, pen: PEN) -> Self {
        Self { spi, pen }
    }

    pub fn release(self) -> (SPI, PEN) {
        (self.spi, self.pen)
    }
}

impl<SPI, PEN> TouchSampler for Xpt2046<SPI, PEN>
where
    SPI: SpiDevice,
    PEN: InputPin,
{
    type Error = TouchError<SPI::Error, PEN::Error>;

    fn pen_down(&mut self) -> Result<bool, Self::Error> {
        self.pen.is_low().map_err(TouchError::Pen)
    }

    fn sample(&mut self, command: u8) -> Result<u16, Self::Error> {
        // command byte out, then 16 clocks carrying the MSB-first result
        // followed by three zero bits
        let mut frame = [command, 0, 0];
        self.spi
            .transfer_in_place(&mut frame)
            .map_err(TouchError::Spi)?;
        Ok(u16::from_be_bytes([frame[1], frame[2]]) >> 3)
    }
}

/// Filtering and calibration parameters of [`ResistiveTouch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchConfig {
    /// Readings per point, at most [`MAX_SAMPLES`]
    pub samples: usize,
    /// Readings dropped at each end of the sorted run
    pub skip: usize,
    /// Raw units per pixel
    pub x_scale: f32,
    pub y_scale: f32,
    /// Raw reading at pixel 0
    pub x_min: f32,
    pub y_min: f32,
    /// Panel size in its native orientation
    pub width: u16,
    pub height: u16,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            samples: 15,
            skip: 5,
            x_scale: 7.7,
            y_scale: 5.7,
            x_min: 90.0,
            y_min: 90.0,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        }
    }
}

/// Averaged, calibrated and rotated touch input.
pub struct ResistiveTouch<S> {
    sampler: S,
    config: TouchConfig,
    orientation: Orientation,
}

impl<S: TouchSampler> ResistiveTouch<S> {
    pub fn new(sampler: S, config: TouchConfig) -> Self {
        Self {
            sampler,
            config,
            orientation: Orientation::Portrait,
        }
    }

    pub fn release(self) -> S {
        self.sampler
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Follows the display rotation, taken modulo 4.
    pub fn set_rotation(&mut self, rotation: u8) {
        self.orientation = Orientation::from_index(rotation);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_touched(&mut self) -> Result<bool, S::Error> {
        self.sampler.pen_down()
    }

    // Panel coordinates in the native orientation. The pen has to stay down
    // for the whole run or the point is dropped.
    fn raw_point(&mut self) -> Result<Option<(u16, u16)>, S::Error> {
        let TouchConfig { skip, .. } = self.config;
        let samples = self.config.samples.min(MAX_SAMPLES);
        if samples <= 2 * skip {
            return Ok(None);
        }

        let mut xs = [0u16; MAX_SAMPLES];
        let mut ys = [0u16; MAX_SAMPLES];
        let mut reads = 0;
        while reads < samples && self.sampler.pen_down()? {
            xs[reads] = self.sampler.sample(CMD_READ_X)?;
            ys[reads] = self.sampler.sample(CMD_READ_Y)?;
            reads += 1;
        }
        if reads < samples {
            log::trace!("touch: pen lifted after {reads} of {samples} readings");
            return Ok(None);
        }

        let mean = |values: &mut [u16]| {
            values.sort_unstable();
            let kept = &values[skip..values.len() - skip];
            kept.iter().map(|&v| f32::from(v)).sum::<f32>() / kept.len() as f32
        };
        let (avg_x, avg_y) = (mean(&mut xs[..samples]), mean(&mut ys[..samples]));

        let c = &self.config;
        let x = ((avg_x - c.x_min) / c.x_scale).clamp(0.0, f32::from(c.width - 1));
        let y = ((avg_y - c.y_min) / c.y_scale).clamp(0.0, f32::from(c.height));
        Ok(Some((x as u16, y as u16)))
    }

    fn rotate(&self, x: u16, y: u16) -> TouchPoint {
        let (w, h) = (self.config.width, self.config.height);
        // y == h is the strip below the visible area and stays put
        let flip_y = if y == h { h } else { h - 1 - y };
        let (x, y) = match self.orientation {
            Orientation::Portrait => (x, y),
            Orientation::Landscape => (flip_y, x),
            Orientation::PortraitSwapped => (w - 1 - x, flip_y),
            Orientation::LandscapeSwapped => (y, w - 1 - x),
        };
        TouchPoint { x, y }
    }
}

impl<S: TouchSampler> TouchSource for ResistiveTouch<S> {
    type Error = S::Error;

    fn point(&mut self) -> Result<Option<TouchPoint>, Self::Error> {
        let point = self.raw_point()?.map(|(x, y)| self.rotate(x, y));
        if let Some(p) = point {
            log::trace!("touch: ({}, {})", p.x, p.y);
        }
        Ok(point)
    }
}

/// Pending-sample flag shared with the pen interrupt.
#[derive(Debug, Default)]
pub struct PenLatch {
    pending: AtomicBool,
}

impl PenLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Called from the pen interrupt.
    pub fn on_interrupt(&self) {
        self.pending.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};
    use std::vec::Vec;

    /// Scripted sampler: the pen stays down for `down` readings.
    struct Script {
        xs: Vec<u16>,
        ys: Vec<u16>,
        down: usize,
        read: usize,
    }

    impl Script {
        fn new(xs: &[u16], ys: &[u16]) -> Self {
            Self {
                xs: xs.to_vec(),
                ys: ys.to_vec(),
                down: usize::MAX,
                read: 0,
            }
        }
    }

    impl TouchSampler for Script {
        type Error = Infallible;

        fn pen_down(&mut self) -> Result<bool, Self::Error> {
            Ok(self.read < self.down)
        }

        fn sample(&mut self, command: u8) -> Result<u16, Self::Error> {
            let i = self.read % self.xs.len();
            Ok(match command {
                CMD_READ_X => self.xs[i],
                _ => {
                    self.read += 1;
                    self.ys[i]
                }
            })
        }
    }

    // 864 and 1233 land in the middle of pixel 100 and 200 with the default
    // calibration; the outliers fall into the skipped ends.
    fn steady() -> Script {
        let mut xs = std::vec![864; 9];
        xs.extend([0, 0, 0, 4095, 4095, 4095]);
        let mut ys = std::vec![1233; 9];
        ys.extend([4095, 4095, 4095, 0, 0, 0]);
        Script::new(&xs, &ys)
    }

    #[test]
    fn averages_inner_readings() {
        let mut touch = ResistiveTouch::new(steady(), TouchConfig::default());
        assert_eq!(touch.point(), Ok(Some(TouchPoint { x: 100, y: 200 })));
    }

    #[test]
    fn rotation_remaps_point() {
        let mut touch = ResistiveTouch::new(steady(), TouchConfig::default());
        for (r, expected) in [(1, (119, 100)), (2, (139, 119)), (3, (200, 139)), (4, (100, 200))] {
            touch.set_rotation(r);
            let p = touch.point().unwrap().unwrap();
            assert_eq!((p.x, p.y), expected, "rotation {r}");
        }
    }

    #[test]
    fn readings_are_constrained() {
        let mut touch = ResistiveTouch::new(Script::new(&[4095], &[4095]), TouchConfig::default());
        assert_eq!(touch.point(), Ok(Some(TouchPoint { x: 239, y: 320 })));

        // the strip below the panel keeps its marker value when rotated
        touch.set_rotation(1);
        assert_eq!(touch.point(), Ok(Some(TouchPoint { x: 320, y: 239 })));

        let mut touch = ResistiveTouch::new(Script::new(&[10], &[10]), TouchConfig::default());
        assert_eq!(touch.point(), Ok(Some(TouchPoint { x: 0, y: 0 })));
    }

    #[test]
    fn early_pen_lift_gives_no_point() {
        let mut script = steady();
        script.down = 10;
        let mut touch = ResistiveTouch::new(script, TouchConfig::default());
        assert_eq!(touch.point(), Ok(None));
        assert_eq!(touch.is_touched(), Ok(false));
    }

    #[test]
    fn degenerate_config_gives_no_point() {
        let config = TouchConfig {
            samples: 10,
            ..TouchConfig::default()
        };
        let mut touch = ResistiveTouch::new(steady(), config);
        assert_eq!(touch.point(), Ok(None));
    }

    #[test]
    fn latch_is_taken_once() {
        let latch = PenLatch::new();
        assert!(!latch.take());
        latch.on_interrupt();
        assert!(latch.is_pending());
        assert!(latch.take());
        assert!(!latch.take());
    }

    struct Spi {
        commands: Vec<u8>,
        value: u16,
    }

    impl SpiErrorType for Spi {
        type Error = Infallible;
    }

    impl SpiDevice for Spi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            for op in operations {
                if let Operation::TransferInPlace(frame) = op {
                    self.commands.push(frame[0]);
                    let [hi, lo] = (self.value << 3).to_be_bytes();
                    frame[1] = hi;
                    frame[2] = lo;
                }
            }
            Ok(())
        }
    }

    struct Pen(bool);

    impl PinErrorType for Pen {
        type Error = Infallible;
    }

    impl InputPin for Pen {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn xpt2046_frames() {
        let spi = Spi {
            commands: Vec::new(),
            value: 0x0ABC,
        };
        let mut xpt = Xpt2046::new(spi, Pen(false));
        assert_eq!(xpt.pen_down(), Ok(true));
        assert_eq!(xpt.sample(CMD_READ_X), Ok(0x0ABC));
        assert_eq!(xpt.sample(CMD_READ_Y), Ok(0x0ABC));
        let (spi, _) = xpt.release();
        assert_eq!(spi.commands, [0xD0, 0x90]);
    }
}
