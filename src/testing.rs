//! Register-level ILI9325 model for unit tests.
//!
//! Emulates GRAM, the address counter with its window wrap-around and the
//! entry-mode I/D and AM bits, which is enough to check what a draw call
//! leaves on the glass.

extern crate std;

use std::vec;
use std::vec::Vec;

use crate::bus::{BusError, BusErrorKind, BusTransport};
use crate::ili9325::{ILI9325_ID, PANEL_HEIGHT, PANEL_WIDTH};
use crate::orientation::Orientation;

const ENTRY_MODE: u8 = 0x03;
const GRAM_X: u8 = 0x20;
const GRAM_Y: u8 = 0x21;
const GRAM_DATA: u8 = 0x22;
const H_START: u8 = 0x50;
const H_END: u8 = 0x51;
const V_START: u8 = 0x52;
const V_END: u8 = 0x53;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    Timeout,
    Nak,
}

impl BusError for FakeError {
    fn kind(&self) -> BusErrorKind {
        match self {
            FakeError::Timeout => BusErrorKind::Timeout,
            FakeError::Nak => BusErrorKind::Other,
        }
    }
}

/// One bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read { reg: u8 },
    Write { reg: u8, data: u16 },
    Burst { reg: u8, data: u16, count: u32 },
    Array { reg: u8, len: usize },
}

pub struct FakeController {
    /// Physical GRAM, row-major
    pub gram: Vec<u16>,
    pub log: Vec<Access>,
    /// Value answered by R00h
    pub id: u16,
    /// Fails every transaction when set
    pub fail: Option<FakeError>,
    /// Fails the next register write to this index, once
    pub fail_on: Option<u8>,
    registers: [u16; 256],
    x: u16,
    y: u16,
}

impl FakeController {
    pub fn new() -> Self {
        let mut registers = [0; 256];
        registers[usize::from(ENTRY_MODE)] = 0x1030;
        registers[usize::from(H_END)] = PANEL_WIDTH - 1;
        registers[usize::from(V_END)] = PANEL_HEIGHT - 1;
        Self {
            gram: vec![0; usize::from(PANEL_WIDTH) * usize::from(PANEL_HEIGHT)],
            log: Vec::new(),
            id: ILI9325_ID,
            fail: None,
            fail_on: None,
            registers,
            x: 0,
            y: 0,
        }
    }

    pub fn register(&self, reg: u8) -> u16 {
        self.registers[usize::from(reg)]
    }

    /// Pixel shown at logical (`x`, `y`) in orientation `o`.
    pub fn pixel(&self, o: Orientation, x: u16, y: u16) -> u16 {
        let (px, py) = o.to_physical(x, y);
        self.gram[usize::from(py) * usize::from(PANEL_WIDTH) + usize::from(px)]
    }

    /// Sorted logical coordinates of every non-black pixel in orientation `o`.
    pub fn lit(&self, o: Orientation) -> Vec<(u16, u16)> {
        let mut lit: Vec<(u16, u16)> = self
            .gram
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != 0)
            .map(|(i, _)| {
                let px = (i % usize::from(PANEL_WIDTH)) as u16;
                let py = (i / usize::from(PANEL_WIDTH)) as u16;
                o.to_logical(px, py)
            })
            .collect();
        lit.sort_unstable();
        lit
    }

    /// Number of GRAM pixels holding `color`.
    pub fn count(&self, color: u16) -> usize {
        self.gram.iter().filter(|&&p| p == color).count()
    }

    fn check(&self) -> Result<(), FakeError> {
        match self.fail {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn store(&mut self, reg: u8, data: u16) {
        match reg {
            GRAM_X => self.x = data,
            GRAM_Y => self.y = data,
            GRAM_DATA => {
                if self.x < PANEL_WIDTH && self.y < PANEL_HEIGHT {
                    let at = usize::from(self.y) * usize::from(PANEL_WIDTH) + usize::from(self.x);
                    self.gram[at] = data;
                }
                self.advance();
            }
            _ => self.registers[usize::from(reg)] = data,
        }
    }

    // Moves the address counter the way the controller does after a GRAM
    // access: along the AM axis first, wrapping inside the window.
    fn advance(&mut self) {
        fn step(v: u16, increment: bool, lo: u16, hi: u16) -> (u16, bool) {
            match (increment, v) {
                (true, v) if v >= hi => (lo, true),
                (true, v) => (v + 1, false),
                (false, v) if v <= lo => (hi, true),
                (false, v) => (v - 1, false),
            }
        }

        let mode = self.register(ENTRY_MODE);
        let vertical = mode & 0x0008 != 0;
        let h_inc = mode & 0x0010 != 0;
        let v_inc = mode & 0x0020 != 0;
        let (hs, he) = (self.register(H_START), self.register(H_END));
        let (vs, ve) = (self.register(V_START), self.register(V_END));

        if vertical {
            let (y, wrapped) = step(self.y, v_inc, vs, ve);
            self.y = y;
            if wrapped {
                self.x = step(self.x, h_inc, hs, he).0;
            }
        } else {
            let (x, wrapped) = step(self.x, h_inc, hs, he);
            self.x = x;
            if wrapped {
                self.y = step(self.y, v_inc, vs, ve).0;
            }
        }
    }
}

impl BusTransport for FakeController {
    type Error = FakeError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.check()
    }

    fn read_reg(&mut self, reg: u8) -> Result<u16, Self::Error> {
        self.check()?;
        self.log.push(Access::Read { reg });
        Ok(match reg {
            0x00 => self.id,
            GRAM_DATA => {
                let at = usize::from(self.y) * usize::from(PANEL_WIDTH) + usize::from(self.x);
                self.gram.get(at).copied().unwrap_or(0)
            }
            _ => self.register(reg),
        })
    }

    fn write_reg(&mut self, reg: u8, data: u16) -> Result<(), Self::Error> {
        self.check()?;
        if self.fail_on == Some(reg) {
            self.fail_on = None;
            return Err(FakeError::Nak);
        }
        self.log.push(Access::Write { reg, data });
        self.store(reg, data);
        Ok(())
    }

    fn write_reg_burst(&mut self, reg: u8, data: u16, count: u32) -> Result<(), Self::Error> {
        self.check()?;
        self.log.push(Access::Burst { reg, data, count });
        for _ in 0..count {
            self.store(reg, data);
        }
        Ok(())
    }

    fn write_reg_array<I>(&mut self, reg: u8, data: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        self.check()?;
        let mut len = 0;
        for word in data {
            self.store(reg, word);
            len += 1;
        }
        self.log.push(Access::Array { reg, len });
        Ok(())
    }
}
