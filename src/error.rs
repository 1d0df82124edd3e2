//! Error, status and diagnostic types.
//!
//! Only two things are reported as errors: transport faults and a controller
//! that does not identify as an ILI9325. Geometry violations (coordinates or
//! windows outside the panel) are ignored silently; [`Diagnostics`] can be
//! switched on to count them.

use core::fmt;

use crate::bus::{BusError, BusErrorKind};

/// Errors returned by the panel driver and the graphics engine.
///
/// Generic over the transport error so callers can match on the underlying
/// hardware fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transport failed.
    Bus(E),
    /// The identity register did not return the expected controller code.
    UnknownController {
        /// Value read from the identity register
        id: u16,
    },
}

impl<E> Error<E>
where
    E: BusError,
{
    /// Collapses the error into the coarse initialization status.
    pub fn status(&self) -> Status {
        match self {
            Error::Bus(e) if e.kind() == BusErrorKind::Timeout => Status::Timeout,
            Error::Bus(_) | Error::UnknownController { .. } => Status::Error,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {e:?}"),
            Error::UnknownController { id } => {
                write!(f, "Unknown controller id: {id:#06x}")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Outcome of panel initialization.
///
/// The caller is expected to halt on anything other than [`Status::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    Timeout,
}

impl<E: BusError> From<Result<(), Error<E>>> for Status {
    fn from(result: Result<(), Error<E>>) -> Self {
        match result {
            Ok(()) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

/// Opt-in counter of draw calls rejected for geometry reasons.
///
/// Disabled by default: a rejected call is then only traced through `log`.
/// Enabling it never changes what is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    enabled: bool,
    rejected: u32,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            rejected: 0,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of calls ignored since the counter was enabled or reset.
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    pub fn reset(&mut self) {
        self.rejected = 0;
    }

    pub(crate) fn reject(&mut self, operation: &'static str) {
        log::trace!("{operation}: outside the panel, ignored");
        if self.enabled {
            self.rejected = self.rejected.saturating_add(1);
        }
    }
}
