//! Register-level bus transport.
//!
//! The ILI9325 is addressed through an index register: every access first
//! latches a register index (RS low), then moves one or more 16-bit words
//! (RS high). [`BusTransport`] is that contract; [`ParallelBus`] implements it
//! over GPIO for the 16-bit 8080-style interface:
//!
//! ```text
//! nCS       ----\__________________________________________/-------
//! RS        ------\____________/-----------------------------------
//! nRD       -------------------------\_____/-----------------------   (read)
//! nWR       --------\_______/--------\_____/-----------------------   (write)
//! DB[0:15]  ---------[index]----------[data]-----------------------
//! ```

use core::convert::Infallible;
use core::fmt::Debug;

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

/// Coarse classification of a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusErrorKind {
    /// The transfer did not complete in time.
    Timeout,
    /// Any other fault.
    Other,
}

/// Error type of a [`BusTransport`].
pub trait BusError: Debug {
    fn kind(&self) -> BusErrorKind {
        BusErrorKind::Other
    }
}

impl BusError for Infallible {}

impl BusError for ErrorKind {}

/// Register read/write primitives of the panel bus.
///
/// Every call blocks until the transfer completes.
pub trait BusTransport {
    type Error: BusError;

    /// Puts the interface lines into their idle state.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Reads one word from register `reg`.
    fn read_reg(&mut self, reg: u8) -> Result<u16, Self::Error>;

    /// Writes one word to register `reg`.
    fn write_reg(&mut self, reg: u8, data: u16) -> Result<(), Self::Error> {
        self.write_reg_burst(reg, data, 1)
    }

    /// Writes `data` to register `reg` `count` times without re-addressing.
    fn write_reg_burst(&mut self, reg: u8, data: u16, count: u32) -> Result<(), Self::Error>;

    /// Streams a sequence of words to register `reg` without re-addressing.
    fn write_reg_array<I>(&mut self, reg: u8, data: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u16, Self::Error> {
        T::read_reg(self, reg)
    }

    fn write_reg(&mut self, reg: u8, data: u16) -> Result<(), Self::Error> {
        T::write_reg(self, reg, data)
    }

    fn write_reg_burst(&mut self, reg: u8, data: u16, count: u32) -> Result<(), Self::Error> {
        T::write_reg_burst(self, reg, data, count)
    }

    fn write_reg_array<I>(&mut self, reg: u8, data: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        T::write_reg_array(self, reg, data)
    }
}

/// The 16 data lines DB[0:15].
///
/// Implementations drive the lines as outputs and only turn them around for
/// the duration of [`DataPort::read`].
pub trait DataPort: ErrorType {
    /// Drives `word` onto the data lines.
    fn write(&mut self, word: u16) -> Result<(), Self::Error>;

    /// Switches the lines to input, samples them and switches back to output.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// GPIO implementation of the 16-bit 8080-style bus.
pub struct ParallelBus<CS, RS, WR, RD, DB> {
    /// Chip select (active low)
    cs: CS,
    /// Register select: low for the index cycle, high for data
    rs: RS,
    /// Write strobe (active low)
    wr: WR,
    /// Read strobe (active low)
    rd: RD,
    /// Data lines
    data: DB,
}

fn kind<E: digital::Error>(e: E) -> ErrorKind {
    e.kind()
}

impl<CS, RS, WR, RD, DB> ParallelBus<CS, RS, WR, RD, DB>
where
    CS: OutputPin,
    RS: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    DB: DataPort,
{
    pub fn new(cs: CS, rs: RS, wr: WR, rd: RD, data: DB) -> Self {
        Self {
            cs,
            rs,
            wr,
            rd,
            data,
        }
    }

    /// Returns the pins and the data port.
    pub fn release(self) -> (CS, RS, WR, RD, DB) {
        (self.cs, self.rs, self.wr, self.rd, self.data)
    }

    fn strobe_write(&mut self) -> Result<(), ErrorKind> {
        self.wr.set_low().map_err(kind)?;
        self.wr.set_high().map_err(kind)
    }

    // Leaves CS asserted and RS high, ready for data cycles.
    fn select(&mut self, reg: u8) -> Result<(), ErrorKind> {
        self.cs.set_low().map_err(kind)?;
        self.rs.set_low().map_err(kind)?;
        self.rd.set_high().map_err(kind)?;
        self.data.write(u16::from(reg)).map_err(kind)?;
        self.strobe_write()?;
        self.rs.set_high().map_err(kind)
    }

    fn write_word(&mut self, word: u16) -> Result<(), ErrorKind> {
        self.data.write(word).map_err(kind)?;
        self.strobe_write()
    }
}

impl<CS, RS, WR, RD, DB> BusTransport for ParallelBus<CS, RS, WR, RD, DB>
where
    CS: OutputPin,
    RS: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    DB: DataPort,
{
    type Error = ErrorKind;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(kind)?;
        self.rs.set_high().map_err(kind)?;
        self.wr.set_high().map_err(kind)?;
        self.rd.set_high().map_err(kind)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u16, Self::Error> {
        self.select(reg)?;
        self.rd.set_low().map_err(kind)?;
        let value = self.data.read().map_err(kind)?;
        self.rd.set_high().map_err(kind)?;
        self.cs.set_high().map_err(kind)?;
        Ok(value)
    }

    fn write_reg_burst(&mut self, reg: u8, data: u16, count: u32) -> Result<(), Self::Error> {
        self.select(reg)?;
        for _ in 0..count {
            self.write_word(data)?;
        }
        self.cs.set_high().map_err(kind)
    }

    fn write_reg_array<I>(&mut self, reg: u8, data: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        self.select(reg)?;
        for word in data {
            self.write_word(word)?;
        }
        self.cs.set_high().map_err(kind)
    }
}
