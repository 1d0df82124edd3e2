//! Logical display orientations and their GRAM addressing transforms.
//!
//! Logical coordinates are always expressed in the current orientation's
//! space (origin top-left as the viewer sees it). The controller's GRAM is
//! addressed in the panel's native portrait frame, [`PANEL_WIDTH`] x
//! [`PANEL_HEIGHT`].

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::ili9325::{PANEL_HEIGHT, PANEL_WIDTH};

/// Display rotation, clockwise in 90 degree steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Orientation {
    #[default]
    Portrait = 0,
    Landscape = 1,
    PortraitSwapped = 2,
    LandscapeSwapped = 3,
}

impl Orientation {
    /// Orientation for a raw rotation value, taken modulo 4.
    pub fn from_index(rotation: u8) -> Self {
        Self::from_u8(rotation % 4).unwrap_or_default()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether width and height are exchanged with respect to the panel.
    pub fn is_swapped(self) -> bool {
        self.index() % 2 == 1
    }

    /// Logical width in pixels.
    pub fn width(self) -> u16 {
        if self.is_swapped() {
            PANEL_HEIGHT
        } else {
            PANEL_WIDTH
        }
    }

    /// Logical height in pixels.
    pub fn height(self) -> u16 {
        if self.is_swapped() {
            PANEL_WIDTH
        } else {
            PANEL_HEIGHT
        }
    }

    /// Maps an in-bounds logical point to its GRAM address.
    pub fn to_physical(self, x: u16, y: u16) -> (u16, u16) {
        match self {
            Orientation::Portrait => (x, y),
            Orientation::Landscape => (y, PANEL_HEIGHT - 1 - x),
            Orientation::PortraitSwapped => (PANEL_WIDTH - 1 - x, PANEL_HEIGHT - 1 - y),
            Orientation::LandscapeSwapped => (PANEL_WIDTH - 1 - y, x),
        }
    }

    /// Maps a GRAM address back to the logical point it displays.
    pub fn to_logical(self, px: u16, py: u16) -> (u16, u16) {
        match self {
            Orientation::Portrait => (px, py),
            Orientation::Landscape => (PANEL_HEIGHT - 1 - py, px),
            Orientation::PortraitSwapped => (PANEL_WIDTH - 1 - px, PANEL_HEIGHT - 1 - py),
            Orientation::LandscapeSwapped => (py, PANEL_WIDTH - 1 - px),
        }
    }

    /// Maps an in-bounds logical window to GRAM bounds `(x1, y1, x2, y2)`,
    /// end coordinates exclusive.
    ///
    /// The quarter turns mirror one axis as well as exchanging them, so every
    /// orientation has its own corner formula.
    pub fn window_to_physical(self, x: u16, y: u16, w: u16, h: u16) -> (u16, u16, u16, u16) {
        match self {
            Orientation::Portrait => (x, y, x + w, y + h),
            Orientation::Landscape => (y, PANEL_HEIGHT - w - x, y + h, PANEL_HEIGHT - x),
            Orientation::PortraitSwapped => (
                PANEL_WIDTH - w - x,
                PANEL_HEIGHT - h - y,
                PANEL_WIDTH - x,
                PANEL_HEIGHT - y,
            ),
            Orientation::LandscapeSwapped => (PANEL_WIDTH - h - y, x, PANEL_WIDTH - y, x + w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::PortraitSwapped,
        Orientation::LandscapeSwapped,
    ];

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Orientation::from_index(0), Orientation::Portrait);
        assert_eq!(Orientation::from_index(5), Orientation::Landscape);
        assert_eq!(Orientation::from_index(14), Orientation::PortraitSwapped);
        assert_eq!(Orientation::from_index(255), Orientation::LandscapeSwapped);
    }

    #[test]
    fn area_is_preserved() {
        let portrait = Orientation::Portrait;
        for o in ALL {
            assert_eq!(
                u32::from(o.width()) * u32::from(o.height()),
                u32::from(portrait.width()) * u32::from(portrait.height())
            );
            assert_eq!(o.width() == portrait.height(), o.is_swapped());
        }
    }

    #[test]
    fn mapping_is_a_bijection() {
        for o in ALL {
            for y in 0..o.height() {
                for x in 0..o.width() {
                    let (px, py) = o.to_physical(x, y);
                    assert!(px < PANEL_WIDTH && py < PANEL_HEIGHT, "{o:?} ({x}, {y})");
                    assert_eq!(o.to_logical(px, py), (x, y), "{o:?}");
                }
            }
        }
    }

    #[test]
    fn window_corners_match_point_mapping() {
        let (x, y, w, h) = (10, 20, 30, 40);
        for o in ALL {
            let (x1, y1, x2, y2) = o.window_to_physical(x, y, w, h);
            assert_eq!(u32::from(x2 - x1) * u32::from(y2 - y1), u32::from(w) * u32::from(h));
            for (cx, cy) in [(x, y), (x + w - 1, y), (x, y + h - 1), (x + w - 1, y + h - 1)] {
                let (px, py) = o.to_physical(cx, cy);
                assert!((x1..x2).contains(&px) && (y1..y2).contains(&py), "{o:?}");
            }
        }
    }

    #[test]
    fn full_screen_window_covers_panel() {
        for o in ALL {
            assert_eq!(
                o.window_to_physical(0, 0, o.width(), o.height()),
                (0, 0, PANEL_WIDTH, PANEL_HEIGHT)
            );
        }
    }
}
