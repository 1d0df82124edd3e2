//! `embedded-graphics` support for [`GraphicsEngine`].

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::{
        raw::{RawData, RawU16},
        Rgb565,
    },
    prelude::*,
    primitives::Rectangle,
};

use crate::engine::GraphicsEngine;
use crate::PanelDriver;

fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

impl<D: PanelDriver> DrawTarget for GraphicsEngine<D> {
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.width(), self.height());
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(coord.x), u16::try_from(coord.y)) {
                if x < width && y < height {
                    self.draw_pixel(x, y, raw(color))?;
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        // intersected with the screen, so both sizes fit a u16
        let length = area.size.width as u16;
        let color = raw(color);
        for row in 0..area.size.height as i32 {
            self.driver_mut()
                .draw_hline(area.top_left.x, area.top_left.y + row, length, color)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.driver_mut().clear(raw(color))
    }
}

impl<D: PanelDriver> OriginDimensions for GraphicsEngine<D> {
    fn size(&self) -> Size {
        Size::new(self.width().into(), self.height().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ili9325::Ili9325;
    use crate::testing::FakeController;
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};

    #[test]
    fn size_follows_rotation() {
        let mut fake = FakeController::new();
        let mut engine = GraphicsEngine::new(Ili9325::new(&mut fake));
        assert_eq!(engine.size(), Size::new(240, 320));
        engine.set_rotation(1).unwrap();
        assert_eq!(engine.size(), Size::new(320, 240));
    }

    #[test]
    fn fill_solid_is_clipped() {
        let mut fake = FakeController::new();
        let mut engine = GraphicsEngine::new(Ili9325::new(&mut fake));
        engine.init();
        engine
            .fill_solid(&Rectangle::new(Point::new(230, -5), Size::new(20, 10)), Rgb565::RED)
            .unwrap();
        assert_eq!(engine.driver().bus().count(0xF800), 10 * 5);
        assert_eq!(engine.read_pixel(239, 4), Ok(0xF800));
        assert_eq!(engine.read_pixel(229, 4), Ok(0));
    }

    #[test]
    fn primitives_draw_through_the_engine() {
        let mut fake = FakeController::new();
        let mut engine = GraphicsEngine::new(Ili9325::new(&mut fake));
        engine.init();
        Circle::new(Point::new(-4, -4), 9)
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut engine)
            .unwrap();
        assert_eq!(engine.read_pixel(0, 0), Ok(0x07E0));
        assert_eq!(engine.read_pixel(10, 10), Ok(0));
    }

    #[test]
    fn clear_uses_raw_color() {
        let mut fake = FakeController::new();
        let mut engine = GraphicsEngine::new(Ili9325::new(&mut fake));
        engine.init();
        DrawTarget::clear(&mut engine, Rgb565::BLUE).unwrap();
        assert_eq!(engine.driver().bus().count(0x001F), 240 * 320);
    }
}
