#![no_std]

//! This crate provides an ILI9325 driver for 240x320 TFT panels on the 16-bit
//! parallel bus, plus a drawing engine with lines, circles, ellipses,
//! polygons, bitmaps and text.
//!
//! ```ignore
//! let bus = ParallelBus::new(cs, rs, wr, rd, data_port);
//! let mut lcd = GraphicsEngine::new(Ili9325::new(bus));
//! if lcd.init() != Status::Ok {
//!     panic!("no display");
//! }
//! lcd.set_rotation(1)?;
//! lcd.clear(color::BLACK)?;
//! lcd.display_string_at(0, 0, "Hello", TextAlign::Center)?;
//! ```
//!
//! Coordinates passed to the driver and the engine are logical: they follow
//! the active rotation. Calls that fall outside the panel are ignored; see
//! [`Diagnostics`] for counting them.

pub mod bitmap;
pub mod bus;
pub mod color;
pub mod engine;
pub mod error;
pub mod font;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod ili9325;
pub mod orientation;
pub mod register;
pub mod touch;

#[cfg(test)]
mod testing;

pub use crate::bus::{BusError, BusErrorKind, BusTransport, DataPort, ParallelBus};
pub use crate::engine::{DrawState, GraphicsEngine, Point, TextAlign};
pub use crate::error::{Diagnostics, Error, Status};
pub use crate::font::{Font, FONT8X16, FONT8X8};
pub use crate::ili9325::Ili9325;
pub use crate::orientation::Orientation;

/// Operations a panel controller driver offers to the [`GraphicsEngine`].
///
/// All coordinates are logical, in the space of the current orientation.
/// Out-of-bounds geometry is a silent no-op, recorded in [`Diagnostics`]
/// when enabled; only transport and identification failures are errors.
pub trait PanelDriver {
    type Error;

    /// Width in the current orientation.
    fn width(&self) -> u16;

    /// Height in the current orientation.
    fn height(&self) -> u16;

    fn orientation(&self) -> Orientation;

    /// Brings up the bus transport.
    fn connect(&mut self) -> Result<(), Self::Error>;

    /// Connects and checks the controller identity.
    fn probe(&mut self) -> Result<(), Self::Error>;

    /// Runs the register setup and power-on sequence.
    fn init(&mut self) -> Result<(), Self::Error>;

    fn read_id(&mut self) -> Result<u16, Self::Error>;

    /// Fills the whole screen with `color`, resetting window and cursor.
    fn clear(&mut self, color: u16) -> Result<(), Self::Error>;

    fn display_on(&mut self) -> Result<(), Self::Error>;

    fn display_off(&mut self) -> Result<(), Self::Error>;

    /// Selects orientation `rotation % 4`. Window and cursor are not
    /// recomputed.
    fn set_rotation(&mut self, rotation: u8) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), Self::Error>;

    /// Restricts subsequent bursts to the given rectangle.
    fn set_display_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), Self::Error>;

    fn write_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error>;

    /// Returns 0 outside the panel.
    fn read_pixel(&mut self, x: u16, y: u16) -> Result<u16, Self::Error>;

    /// Horizontal run, clipped at both screen edges.
    fn draw_hline(&mut self, x: i32, y: i32, length: u16, color: u16) -> Result<(), Self::Error>;

    /// Vertical run, clipped at both screen edges.
    fn draw_vline(&mut self, x: i32, y: i32, length: u16, color: u16) -> Result<(), Self::Error>;

    /// Streams the pixels of a bitmap blob (see [`bitmap`]) from (`x`, `y`)
    /// on. The caller sets the window.
    fn draw_bitmap(&mut self, x: u16, y: u16, bitmap: &[u8]) -> Result<(), Self::Error>;

    /// Streams raw RGB565 pixels from (`x`, `y`) on. The caller sets the
    /// window.
    fn draw_rgb_image(&mut self, x: u16, y: u16, pixels: &[u16]) -> Result<(), Self::Error>;

    fn diagnostics(&self) -> &Diagnostics;

    fn diagnostics_mut(&mut self) -> &mut Diagnostics;
}
