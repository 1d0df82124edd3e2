//! ILI9325 controller driver.

use crate::bitmap::Bitmap;
use crate::bus::BusTransport;
use crate::error::{Diagnostics, Error};
use crate::orientation::Orientation;
use crate::register::Register;
use crate::PanelDriver;

/// Native panel width in pixels.
pub const PANEL_WIDTH: u16 = 240;
/// Native panel height in pixels.
pub const PANEL_HEIGHT: u16 = 320;
/// Driver code answered by R00h.
pub const ILI9325_ID: u16 = 0x9325;

const PIXEL_COUNT: u32 = PANEL_WIDTH as u32 * PANEL_HEIGHT as u32;

// Entry mode per orientation, BGR=1:
//   I/D[1:0] (D5:D4) selects horizontal/vertical increment (1) or decrement (0)
//   AM (D3) selects vertical (1) or horizontal (0) address update
const ENTRY_MODE: [u16; 4] = [0x1030, 0x1018, 0x1000, 0x1028];
const ENTRY_MODE_AM: u16 = 0x0008;

const INIT_SEQUENCE: [(Register, u16); 35] = [
    (Register::StartOsc, 0x0001),
    // SS and SM bits
    (Register::DriverOutputCtrl, 0x0100),
    // 1 line inversion
    (Register::DrivingCtrl, 0x0700),
    (Register::ResizeCtrl, 0x0000),
    // Back porch and front porch
    (Register::DisplayCtrl2, 0x0202),
    // Non-display area refresh cycle ISC[3:0]
    (Register::DisplayCtrl3, 0x0000),
    (Register::DisplayCtrl4, 0x0000),
    (Register::RgbCtrl1, 0x0001),
    (Register::FrameMarker, 0x0000),
    (Register::RgbCtrl2, 0x0000),
    // Gamma curve
    (Register::Gamma1, 0x0007),
    (Register::Gamma2, 0x0302),
    (Register::Gamma3, 0x0105),
    (Register::Gamma4, 0x0206),
    (Register::Gamma5, 0x0808),
    (Register::Gamma6, 0x0206),
    (Register::Gamma7, 0x0504),
    (Register::Gamma8, 0x0007),
    (Register::Gamma9, 0x0105),
    (Register::Gamma10, 0x0808),
    // Gate scan line, GS=1: G320 to G1
    (Register::GateScanCtrl, 0xA700),
    // NDL, VLE, REV
    (Register::BaseImageCtrl, 0x0001),
    (Register::VerticalScroll, 0x0000),
    (Register::PartialImage1Pos, 0x0000),
    (Register::PartialImage1Start, 0x0000),
    (Register::PartialImage1End, 0x0000),
    (Register::PartialImage2Pos, 0x0000),
    (Register::PartialImage2Start, 0x0000),
    (Register::PartialImage2End, 0x0000),
    (Register::PanelCtrl1, 0x0010),
    (Register::PanelCtrl2, 0x0000),
    (Register::PanelCtrl3, 0x0003),
    (Register::PanelCtrl4, 0x0110),
    (Register::PanelCtrl5, 0x0000),
    (Register::PanelCtrl6, 0x0000),
];

const POWER_ON_SEQUENCE: [(Register, u16); 10] = [
    // SAP, BT[3:0], AP, DSTB, SLP, STB
    (Register::PowerCtrl1, 0x0000),
    // DC1[2:0], DC0[2:0], VC[2:0]
    (Register::PowerCtrl2, 0x0000),
    // VREG1OUT
    (Register::PowerCtrl3, 0x0000),
    // VDV[4:0] for VCOM amplitude
    (Register::PowerCtrl4, 0x0000),
    (Register::PowerCtrl1, 0x17B0),
    (Register::PowerCtrl2, 0x0137),
    (Register::PowerCtrl3, 0x0139),
    (Register::PowerCtrl4, 0x1D00),
    // VCM[4:0] for VCOMH
    (Register::PowerCtrl7, 0x0013),
    // 262K color, display on
    (Register::DisplayCtrl1, 0x0173),
];

const POWER_OFF_SEQUENCE: [(Register, u16); 6] = [
    (Register::PowerCtrl1, 0x0000),
    (Register::PowerCtrl2, 0x0000),
    (Register::PowerCtrl3, 0x0000),
    (Register::PowerCtrl4, 0x0000),
    (Register::PowerCtrl7, 0x0000),
    (Register::DisplayCtrl1, 0x0000),
];

/// Clips the span `[start, start + length)` to `[0, limit)`.
///
/// Returns the clipped start and length, or `None` when nothing is left.
fn clip_span(start: i32, length: u16, limit: u16) -> Option<(u16, u16)> {
    let limit = i32::from(limit);
    if start >= limit {
        return None;
    }
    let mut start = start;
    let mut length = i32::from(length);
    if start < 0 {
        length += start;
        start = 0;
    }
    length = length.min(limit - start);
    if length <= 0 {
        return None;
    }
    Some((start as u16, length as u16))
}

/// ILI9325 driver over a register bus.
///
/// Keeps the current orientation; every coordinate it accepts is logical and
/// remapped to the GRAM address before it reaches the bus.
pub struct Ili9325<B> {
    bus: B,
    orientation: Orientation,
    diagnostics: Diagnostics,
}

impl<B> Ili9325<B> {
    /// Creates a driver without touching the bus.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            orientation: Orientation::Portrait,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Releases the bus.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: BusTransport> Ili9325<B> {
    fn write(&mut self, reg: Register, data: u16) -> Result<(), Error<B::Error>> {
        self.bus.write_reg(reg.index(), data).map_err(Error::Bus)
    }

    fn read(&mut self, reg: Register) -> Result<u16, Error<B::Error>> {
        self.bus.read_reg(reg.index()).map_err(Error::Bus)
    }

    fn write_sequence(&mut self, sequence: &[(Register, u16)]) -> Result<(), Error<B::Error>> {
        for &(reg, data) in sequence {
            self.write(reg, data)?;
        }
        Ok(())
    }

    fn fill(&mut self, color: u16, count: u32) -> Result<(), Error<B::Error>> {
        self.bus
            .write_reg_burst(Register::GramData.index(), color, count)
            .map_err(Error::Bus)
    }

    fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.orientation.width() && y < self.orientation.height()
    }

    fn entry_mode(&self) -> u16 {
        ENTRY_MODE[usize::from(self.orientation.index())]
    }
}

impl<B: BusTransport> PanelDriver for Ili9325<B> {
    type Error = Error<B::Error>;

    fn width(&self) -> u16 {
        self.orientation.width()
    }

    fn height(&self) -> u16 {
        self.orientation.height()
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn connect(&mut self) -> Result<(), Self::Error> {
        self.bus.init().map_err(Error::Bus)
    }

    fn probe(&mut self) -> Result<(), Self::Error> {
        self.connect()?;
        let id = self.read_id()?;
        if id != ILI9325_ID {
            log::warn!("ILI9325 probe: unexpected controller id {id:#06x}");
            return Err(Error::UnknownController { id });
        }
        log::debug!("ILI9325 probe: found controller {id:#06x}");
        Ok(())
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        log::debug!("ILI9325 init");
        self.write_sequence(&INIT_SEQUENCE)?;
        self.set_rotation(0)?;
        self.set_display_window(0, 0, self.width(), self.height())?;
        self.set_cursor(0, 0)?;
        self.display_on()
    }

    fn read_id(&mut self) -> Result<u16, Self::Error> {
        self.write(Register::StartOsc, 0x0001)?;
        self.read(Register::StartOsc)
    }

    fn clear(&mut self, color: u16) -> Result<(), Self::Error> {
        self.set_display_window(0, 0, self.width(), self.height())?;
        self.set_cursor(0, 0)?;
        self.fill(color, PIXEL_COUNT)
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        self.write_sequence(&POWER_ON_SEQUENCE)
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        self.write_sequence(&POWER_OFF_SEQUENCE)
    }

    fn set_rotation(&mut self, rotation: u8) -> Result<(), Self::Error> {
        self.orientation = Orientation::from_index(rotation);
        log::debug!("ILI9325 orientation {:?}", self.orientation);
        self.write(Register::EntryMode, self.entry_mode())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), Self::Error> {
        if !self.in_bounds(x, y) {
            self.diagnostics.reject("set_cursor");
            return Ok(());
        }
        let (px, py) = self.orientation.to_physical(x, y);
        self.write(Register::GramHorizontalAddr, px)?;
        self.write(Register::GramVerticalAddr, py)
    }

    fn set_display_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), Self::Error> {
        let fits = u32::from(x) + u32::from(width) <= u32::from(self.width())
            && u32::from(y) + u32::from(height) <= u32::from(self.height());
        if !self.in_bounds(x, y) || !fits || width == 0 || height == 0 {
            self.diagnostics.reject("set_display_window");
            return Ok(());
        }
        let (x1, y1, x2, y2) = self.orientation.window_to_physical(x, y, width, height);
        self.write(Register::WindowHorizontalStart, x1)?;
        self.write(Register::WindowHorizontalEnd, x2 - 1)?;
        self.write(Register::WindowVerticalStart, y1)?;
        self.write(Register::WindowVerticalEnd, y2 - 1)
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error> {
        if !self.in_bounds(x, y) {
            self.diagnostics.reject("write_pixel");
            return Ok(());
        }
        self.set_cursor(x, y)?;
        self.write(Register::GramData, color)
    }

    fn read_pixel(&mut self, x: u16, y: u16) -> Result<u16, Self::Error> {
        if !self.in_bounds(x, y) {
            self.diagnostics.reject("read_pixel");
            return Ok(0);
        }
        self.set_cursor(x, y)?;
        self.read(Register::GramData)
    }

    fn draw_hline(&mut self, x: i32, y: i32, length: u16, color: u16) -> Result<(), Self::Error> {
        let row = u16::try_from(y).ok().filter(|&y| y < self.height());
        let span = clip_span(x, length, self.width());
        let (Some(y), Some((x, length))) = (row, span) else {
            self.diagnostics.reject("draw_hline");
            return Ok(());
        };
        self.set_cursor(x, y)?;
        self.fill(color, u32::from(length))
    }

    fn draw_vline(&mut self, x: i32, y: i32, length: u16, color: u16) -> Result<(), Self::Error> {
        let column = u16::try_from(x).ok().filter(|&x| x < self.width());
        let span = clip_span(y, length, self.height());
        let (Some(x), Some((y, length))) = (column, span) else {
            self.diagnostics.reject("draw_vline");
            return Ok(());
        };
        self.set_cursor(x, y)?;

        // GRAM bursts advance along the entry-mode direction; flipping AM
        // turns the logical row direction into a column.
        let entry_mode = self.entry_mode();
        self.write(Register::EntryMode, entry_mode ^ ENTRY_MODE_AM)?;
        let burst = self.fill(color, u32::from(length));
        let restore = self.write(Register::EntryMode, entry_mode);
        burst.and(restore)
    }

    fn draw_bitmap(&mut self, x: u16, y: u16, bitmap: &[u8]) -> Result<(), Self::Error> {
        let bitmap = match Bitmap::parse(bitmap) {
            Some(bitmap) if self.in_bounds(x, y) => bitmap,
            _ => {
                self.diagnostics.reject("draw_bitmap");
                return Ok(());
            }
        };
        self.set_cursor(x, y)?;
        self.bus
            .write_reg_array(Register::GramData.index(), bitmap.pixels())
            .map_err(Error::Bus)
    }

    fn draw_rgb_image(&mut self, x: u16, y: u16, pixels: &[u16]) -> Result<(), Self::Error> {
        if !self.in_bounds(x, y) {
            self.diagnostics.reject("draw_rgb_image");
            return Ok(());
        }
        self.set_cursor(x, y)?;
        self.bus
            .write_reg_array(Register::GramData.index(), pixels.iter().copied())
            .map_err(Error::Bus)
    }

    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}
