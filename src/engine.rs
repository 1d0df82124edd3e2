//! Drawing engine on top of a [`PanelDriver`].
//!
//! Shapes are drawn in the current text color; glyph cells additionally use
//! the back color for unset bits. Everything is rasterized on the fly into
//! single-pixel writes and line bursts, so the engine needs no frame buffer.

use num_derive::FromPrimitive;

use crate::bitmap::{BitmapHeader, HEADER_LEN};
use crate::color;
use crate::error::Status;
use crate::font::{Font, FONT8X8, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH};
use crate::PanelDriver;

const GLYPH_BLOB_LEN: usize =
    HEADER_LEN + 2 * MAX_GLYPH_WIDTH as usize * MAX_GLYPH_HEIGHT as usize;

/// Horizontal placement of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum TextAlign {
    Center = 1,
    Right = 2,
    Left = 3,
}

/// A polygon vertex.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Colors and font used by the drawing calls.
#[derive(Debug, Clone, Copy)]
pub struct DrawState {
    pub text_color: u16,
    pub back_color: u16,
    pub font: &'static Font,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            text_color: color::WHITE,
            back_color: color::BLACK,
            font: &FONT8X8,
        }
    }
}

// Span lengths are computed signed; anything wider than the bus burst
// counter can express is clipped by the driver anyway.
fn span(length: i64) -> u16 {
    u16::try_from(length.max(0)).unwrap_or(u16::MAX)
}

/// Drawing engine owning a panel driver and its draw state.
pub struct GraphicsEngine<D> {
    driver: D,
    state: DrawState,
}

impl<D: PanelDriver> GraphicsEngine<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: DrawState::default(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Releases the driver.
    pub fn release(self) -> D {
        self.driver
    }

    /// Resets the draw state, checks the controller identity and runs the
    /// panel power-up sequence.
    pub fn try_init(&mut self) -> Result<(), D::Error> {
        self.state = DrawState::default();
        self.driver.probe()?;
        self.driver.init()
    }

    /// [`GraphicsEngine::try_init`] collapsed into a [`Status`].
    pub fn init(&mut self) -> Status
    where
        Status: From<Result<(), D::Error>>,
    {
        Status::from(self.try_init())
    }

    pub fn clear(&mut self, color: u16) -> Result<(), D::Error> {
        self.driver.clear(color)
    }

    pub fn display_on(&mut self) -> Result<(), D::Error> {
        self.driver.display_on()
    }

    pub fn display_off(&mut self) -> Result<(), D::Error> {
        self.driver.display_off()
    }

    pub fn set_rotation(&mut self, rotation: u8) -> Result<(), D::Error> {
        self.driver.set_rotation(rotation)
    }

    pub fn set_display_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), D::Error> {
        self.driver.set_display_window(x, y, width, height)
    }

    pub fn width(&self) -> u16 {
        self.driver.width()
    }

    pub fn height(&self) -> u16 {
        self.driver.height()
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn text_color(&self) -> u16 {
        self.state.text_color
    }

    pub fn set_text_color(&mut self, color: u16) {
        self.state.text_color = color;
    }

    pub fn back_color(&self) -> u16 {
        self.state.back_color
    }

    pub fn set_back_color(&mut self, color: u16) {
        self.state.back_color = color;
    }

    pub fn font(&self) -> &'static Font {
        self.state.font
    }

    pub fn set_font(&mut self, font: &'static Font) {
        self.state.font = font;
    }

    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), D::Error> {
        self.driver.write_pixel(x, y, color)
    }

    pub fn read_pixel(&mut self, x: u16, y: u16) -> Result<u16, D::Error> {
        self.driver.read_pixel(x, y)
    }

    // Pixels with a negative coordinate are skipped, not clamped.
    fn plot(&mut self, x: i32, y: i32) -> Result<(), D::Error> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.driver.write_pixel(x, y, self.state.text_color),
            _ => Ok(()),
        }
    }

    // Cuts the part left of column 0 before the length is narrowed to the
    // driver's u16.
    fn hline(&mut self, x: i64, y: i32, length: i64) -> Result<(), D::Error> {
        let start = x.max(0);
        let length = span(x + length - start);
        let start = i32::try_from(start).unwrap_or(i32::MAX);
        self.driver.draw_hline(start, y, length, self.state.text_color)
    }

    pub fn draw_hline(&mut self, x: i16, y: i16, length: u16) -> Result<(), D::Error> {
        self.hline(x.into(), y.into(), length.into())
    }

    pub fn draw_vline(&mut self, x: i16, y: i16, length: u16) -> Result<(), D::Error> {
        self.driver
            .draw_vline(x.into(), y.into(), length, self.state.text_color)
    }

    /// Bresenham line from (`x1`, `y1`) to (`x2`, `y2`), both ends included.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) -> Result<(), D::Error> {
        let (x1, y1, x2, y2) = (i32::from(x1), i32::from(y1), i32::from(x2), i32::from(y2));
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 >= x1 { 1 } else { -1 };
        let sy = if y2 >= y1 { 1 } else { -1 };

        // The major axis advances every pixel, the minor one whenever the
        // error term overflows.
        let ((major_x, major_y), (minor_x, minor_y), den, add) = if dx >= dy {
            ((sx, 0), (0, sy), dx, dy)
        } else {
            ((0, sy), (sx, 0), dy, dx)
        };

        let (mut x, mut y) = (x1, y1);
        let mut num = den / 2;
        for _ in 0..=den {
            self.plot(x, y)?;
            num += add;
            if num >= den {
                num -= den;
                x += minor_x;
                y += minor_y;
            }
            x += major_x;
            y += major_y;
        }
        Ok(())
    }

    /// Outline of the `width` x `height` rectangle at (`x`, `y`).
    ///
    /// The bottom edge lies on row `y + height`, the right edge on column
    /// `x + width - 1`.
    pub fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), D::Error> {
        let (x, y) = (i32::from(x), i32::from(y));
        let color = self.state.text_color;
        self.hline(x.into(), y, width.into())?;
        self.hline(x.into(), y + i32::from(height), width.into())?;
        self.driver.draw_vline(x, y, height, color)?;
        self.driver.draw_vline(x + i32::from(width) - 1, y, height, color)
    }

    /// Fills the area outlined by [`GraphicsEngine::draw_rect`] with the same
    /// arguments.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), D::Error> {
        let (x, y) = (i32::from(x), i32::from(y));
        for row in 0..=i32::from(height) {
            self.hline(x.into(), y + row, width.into())?;
        }
        Ok(())
    }

    pub fn draw_circle(&mut self, x: i16, y: i16, radius: u16) -> Result<(), D::Error> {
        let (x, y) = (i32::from(x), i32::from(y));
        let mut d = 3 - 2 * i32::from(radius);
        let mut cur_x = 0;
        let mut cur_y = i32::from(radius);
        while cur_x <= cur_y {
            for (px, py) in [
                (x + cur_x, y - cur_y),
                (x - cur_x, y - cur_y),
                (x + cur_y, y - cur_x),
                (x - cur_y, y - cur_x),
                (x + cur_x, y + cur_y),
                (x - cur_x, y + cur_y),
                (x + cur_y, y + cur_x),
                (x - cur_y, y + cur_x),
            ] {
                self.plot(px, py)?;
            }
            if d < 0 {
                d += 4 * cur_x + 6;
            } else {
                d += 4 * (cur_x - cur_y) + 10;
                cur_y -= 1;
            }
            cur_x += 1;
        }
        Ok(())
    }

    pub fn fill_circle(&mut self, x: i16, y: i16, radius: u16) -> Result<(), D::Error> {
        let (cx, cy) = (x, y);
        let (x, y) = (i32::from(x), i32::from(y));
        let mut d = 3 - 2 * i32::from(radius);
        let mut cur_x = 0;
        let mut cur_y = i32::from(radius);
        while cur_x <= cur_y {
            if cur_y > 0 {
                self.hline((x - cur_y).into(), y + cur_x, (2 * cur_y).into())?;
                self.hline((x - cur_y).into(), y - cur_x, (2 * cur_y).into())?;
            }
            if cur_x > 0 {
                self.hline((x - cur_x).into(), y - cur_y, (2 * cur_x).into())?;
                self.hline((x - cur_x).into(), y + cur_y, (2 * cur_x).into())?;
            }
            if d < 0 {
                d += 4 * cur_x + 6;
            } else {
                d += 4 * (cur_x - cur_y) + 10;
                cur_y -= 1;
            }
            cur_x += 1;
        }
        self.draw_circle(cx, cy, radius)
    }

    // Walks one quadrant of the ellipse, handing each step's x extent and y
    // offset to `step`. The x extent saturates for very flat ellipses.
    fn walk_ellipse<F>(&mut self, rx: u16, ry: u16, mut step: F) -> Result<(), D::Error>
    where
        F: FnMut(&mut Self, i32, i32) -> Result<(), D::Error>,
    {
        let k = f32::from(ry) / f32::from(rx);
        let mut x: i32 = 0;
        let mut y = -i32::from(ry);
        let mut err = 2 - 2 * i32::from(rx);
        loop {
            let dx = (x as f32 / k) as i32;
            step(self, dx, y)?;

            let mut e2 = err;
            if e2 <= x {
                x += 1;
                err += 2 * x + 1;
                if -y == x && e2 <= y {
                    e2 = 0;
                }
            }
            if e2 > y {
                y += 1;
                err += 2 * y + 1;
            }
            if y > 0 {
                return Ok(());
            }
        }
    }

    pub fn draw_ellipse(&mut self, x: i16, y: i16, rx: u16, ry: u16) -> Result<(), D::Error> {
        let (x, y) = (i32::from(x), i32::from(y));
        self.walk_ellipse(rx, ry, |engine, dx, dy| {
            let (left, right) = (x.saturating_sub(dx), x.saturating_add(dx));
            engine.plot(left, y + dy)?;
            engine.plot(right, y + dy)?;
            engine.plot(right, y - dy)?;
            engine.plot(left, y - dy)
        })
    }

    pub fn fill_ellipse(&mut self, x: i16, y: i16, rx: u16, ry: u16) -> Result<(), D::Error> {
        let (x, y) = (i64::from(x), i32::from(y));
        self.walk_ellipse(rx, ry, |engine, dx, dy| {
            let (left, length) = (x - i64::from(dx), 2 * i64::from(dx) + 1);
            engine.hline(left, y + dy, length)?;
            engine.hline(left, y - dy, length)
        })
    }

    /// Closed outline through `points`; fewer than two points draw nothing.
    pub fn draw_polygon(&mut self, points: &[Point]) -> Result<(), D::Error> {
        if points.len() < 2 {
            return Ok(());
        }
        let (first, last) = (points[0], points[points.len() - 1]);
        self.draw_line(first.x, first.y, last.x, last.y)?;
        for pair in points.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y)?;
        }
        Ok(())
    }

    fn fits(&self, x: u16, y: u16, width: u32, height: u32) -> bool {
        width > 0
            && height > 0
            && u32::from(x) + width <= u32::from(self.width())
            && u32::from(y) + height <= u32::from(self.height())
    }

    // Runs `draw` inside a window matching the image, then always puts the
    // full-screen window back, also when setting the image window failed
    // halfway through its registers.
    fn windowed<F>(&mut self, x: u16, y: u16, width: u16, height: u16, draw: F) -> Result<(), D::Error>
    where
        F: FnOnce(&mut D) -> Result<(), D::Error>,
    {
        let result = self
            .driver
            .set_display_window(x, y, width, height)
            .and_then(|()| draw(&mut self.driver));
        let (w, h) = (self.width(), self.height());
        let restore = self.driver.set_display_window(0, 0, w, h);
        result.and(restore)
    }

    /// Draws a bitmap blob with its top-left corner at (`x`, `y`).
    ///
    /// Blobs that are malformed or do not fit on the screen are ignored.
    pub fn draw_bitmap(&mut self, x: u16, y: u16, bitmap: &[u8]) -> Result<(), D::Error> {
        let header = match BitmapHeader::parse(bitmap) {
            Some(header) if self.fits(x, y, header.width, header.height) => header,
            _ => {
                self.driver.diagnostics_mut().reject("draw_bitmap");
                return Ok(());
            }
        };
        // fits() bounds both sides by the u16 panel size
        let (width, height) = (header.width as u16, header.height as u16);
        self.windowed(x, y, width, height, |driver| driver.draw_bitmap(x, y, bitmap))
    }

    /// Draws `width` x `height` RGB565 pixels in row order.
    pub fn draw_rgb_image(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u16],
    ) -> Result<(), D::Error> {
        if !self.fits(x, y, u32::from(width), u32::from(height)) {
            self.driver.diagnostics_mut().reject("draw_rgb_image");
            return Ok(());
        }
        let count = pixels.len().min(usize::from(width) * usize::from(height));
        self.windowed(x, y, width, height, |driver| {
            driver.draw_rgb_image(x, y, &pixels[..count])
        })
    }

    /// Renders one printable ASCII character cell at (`x`, `y`).
    pub fn display_char(&mut self, x: u16, y: u16, ch: u8) -> Result<(), D::Error> {
        let font = self.state.font;
        let Some(glyph) = font.glyph(ch) else {
            self.driver.diagnostics_mut().reject("display_char");
            return Ok(());
        };
        let (width, height) = (font.width(), font.height());

        let mut blob = [0u8; GLYPH_BLOB_LEN];
        BitmapHeader::new(width, height).write(&mut blob);
        let cells = blob[HEADER_LEN..].chunks_exact_mut(2);
        let coords = (0..height).flat_map(|row| (0..width).map(move |col| (col, row)));
        for (cell, (col, row)) in cells.zip(coords) {
            let color = if font.is_set(glyph, col, row) {
                self.state.text_color
            } else {
                self.state.back_color
            };
            cell.copy_from_slice(&color.to_le_bytes());
        }

        let len = HEADER_LEN + 2 * usize::from(width) * usize::from(height);
        self.draw_bitmap(x, y, &blob[..len])
    }

    /// Renders `text` on row `y`, placed according to `align`.
    ///
    /// Stops at the first character that would not fit entirely.
    pub fn display_string_at(&mut self, x: u16, y: u16, text: &str, align: TextAlign) -> Result<(), D::Error> {
        let fw = i32::from(self.state.font.width());
        let width = i32::from(self.width());
        let len = i32::try_from(text.len()).unwrap_or(i32::MAX);
        let cols = width / fw;
        let free = cols.saturating_sub(len).saturating_mul(fw);
        let x = i32::from(x);

        let start = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + free / 2,
            TextAlign::Right => free - x,
        };

        let mut column = start.max(0);
        for (n, ch) in (0i32..).zip(text.bytes()) {
            if width.saturating_sub(n.saturating_mul(fw)) < fw {
                break;
            }
            if let Ok(cx) = u16::try_from(column) {
                self.display_char(cx, y, ch)?;
            }
            column += fw;
        }
        Ok(())
    }

    /// Renders `text` left-aligned on text line `line`.
    pub fn display_string_at_line(&mut self, line: u16, text: &str) -> Result<(), D::Error> {
        let y = line.saturating_mul(self.state.font.height());
        self.display_string_at(0, y, text, TextAlign::Left)
    }

    /// Paints text line `line` in the back color.
    pub fn clear_string_line(&mut self, line: u16) -> Result<(), D::Error> {
        let text_color = self.state.text_color;
        self.state.text_color = self.state.back_color;
        let fh = self.state.font.height();
        let result = self.fill_rect(0, line.saturating_mul(fh), self.width(), fh);
        self.state.text_color = text_color;
        result
    }
}
