use std::path::Path;

use image::{Rgb, RgbImage};

use crate::errors::*;
use crate::renderers::{Colour, DrawCommand, PixelRect, Point};
use crate::units::{Height, Width};

/// Something the draw commands can be played onto.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: PixelRect, colour: Colour);
    fn line(&mut self, from: Point, to: Point, colour: Colour);
}

/// Replay commands onto a surface, in order.
pub fn draw<S: DrawSurface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match *command {
            DrawCommand::FillRect { rect, colour } => surface.fill_rect(rect, colour),
            DrawCommand::Line { from, to, colour } => surface.line(from, to, colour),
        }
    }
}

/// Pull a line end point onto a `width` x `height` surface.
///
/// The edge walls of the last column and row sit one pixel past the canvas, clamping
/// keeps them on its border.
pub(crate) fn clamp_to_surface(point: Point, width: u32, height: u32) -> Point {
    let max_x = i64::from(width.saturating_sub(1));
    let max_y = i64::from(height.saturating_sub(1));
    Point::new(i64::from(point.x).max(0).min(max_x) as i32,
               i64::from(point.y).max(0).min(max_y) as i32)
}

/// An in memory RGB raster. Anything outside the canvas is clipped.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    pub fn new(width: Width, height: Height, background: Colour) -> ImageCanvas {
        ImageCanvas { image: RgbImage::from_pixel(width.0, height.0, to_rgb(background)) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn clear(&mut self, colour: Colour) {
        let rgb = to_rgb(colour);
        for pixel in self.image.pixels_mut() {
            *pixel = rgb;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.image.width() && y < self.image.height() {
            let Rgb([r, g, b]) = *self.image.get_pixel(x, y);
            Some(Colour::rgb(r, g, b))
        } else {
            None
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .chain_err(|| format!("Failed to write maze image to {}", path.display()))
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, rgb: Rgb<u8>) {
        if x >= 0 && y >= 0 && x < i64::from(self.image.width()) &&
           y < i64::from(self.image.height()) {
            self.image.put_pixel(x as u32, y as u32, rgb);
        }
    }
}

impl DrawSurface for ImageCanvas {
    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        let rgb = to_rgb(colour);
        let x_start = i64::from(rect.x).max(0);
        let y_start = i64::from(rect.y).max(0);
        let x_end = (i64::from(rect.x) + i64::from(rect.w)).min(i64::from(self.image.width()));
        let y_end = (i64::from(rect.y) + i64::from(rect.h)).min(i64::from(self.image.height()));

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.image.put_pixel(x as u32, y as u32, rgb);
            }
        }
    }

    /// Bresenham line, both end points included after clamping them onto the canvas.
    fn line(&mut self, from: Point, to: Point, colour: Colour) {
        let (width, height) = (self.image.width(), self.image.height());
        if width == 0 || height == 0 {
            return;
        }
        let from = clamp_to_surface(from, width, height);
        let to = clamp_to_surface(to, width, height);
        let rgb = to_rgb(colour);
        let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
        let (x_end, y_end) = (i64::from(to.x), i64::from(to.y));
        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let sx = if x < x_end { 1 } else { -1 };
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, rgb);
            if x == x_end && y == y_end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[inline]
fn to_rgb(colour: Colour) -> Rgb<u8> {
    Rgb([colour.r, colour.g, colour.b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{recursive_backtracker, RandomChooser};
    use crate::renderers::{render, RenderOptionsBuilder};
    use crate::state::MazeState;
    use crate::units::{ColumnsCount, RowsCount};

    const BLACK: Colour = Colour::rgb(0, 0, 0);
    const RED: Colour = Colour::rgb(0xff, 0, 0);
    const WHITE: Colour = Colour::rgb(0xff, 0xff, 0xff);

    #[derive(Default)]
    struct Recorder {
        calls: Vec<DrawCommand>,
    }

    impl DrawSurface for Recorder {
        fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
            self.calls.push(DrawCommand::FillRect { rect, colour });
        }
        fn line(&mut self, from: Point, to: Point, colour: Colour) {
            self.calls.push(DrawCommand::Line { from, to, colour });
        }
    }

    #[test]
    fn replay_keeps_command_order() {
        let mut state = MazeState::new(RowsCount(3), ColumnsCount(3)).unwrap();
        recursive_backtracker(&mut state, &mut RandomChooser::from_seed(3));
        let commands = render(&state, &Default::default());
        let mut recorder = Recorder::default();
        draw(&commands, &mut recorder);
        assert_eq!(recorder.calls, commands);
    }

    #[test]
    fn fill_is_clipped_to_the_canvas() {
        let mut canvas = ImageCanvas::new(Width(4), Height(4), BLACK);
        canvas.fill_rect(PixelRect::new(-2, 2, 10, 10), RED);
        assert_eq!(canvas.pixel(0, 1), Some(BLACK));
        assert_eq!(canvas.pixel(0, 2), Some(RED));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(4, 4), None);
    }

    #[test]
    fn lines_include_both_ends() {
        let mut canvas = ImageCanvas::new(Width(5), Height(5), BLACK);
        canvas.line(Point::new(0, 0), Point::new(4, 0), WHITE);
        canvas.line(Point::new(4, 4), Point::new(4, 1), RED);
        canvas.line(Point::new(0, 0), Point::new(4, 4), RED);
        for x in 1..4 {
            assert_eq!(canvas.pixel(x, 0), Some(WHITE));
        }
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(4, 0), Some(WHITE));
        for y in 1..5 {
            assert_eq!(canvas.pixel(4, y), Some(RED));
            assert_eq!(canvas.pixel(y, y), Some(RED));
        }
        assert_eq!(canvas.pixel(0, 4), Some(BLACK));
    }

    #[test]
    fn outer_walls_stay_on_the_canvas() {
        let mut state = MazeState::new(RowsCount(20), ColumnsCount(20)).unwrap();
        recursive_backtracker(&mut state, &mut RandomChooser::from_seed(5));
        let options = RenderOptionsBuilder::new().canvas_size(Width(600), Height(600)).build();
        let mut canvas = ImageCanvas::new(Width(600), Height(600), BLACK);
        draw(&render(&state, &options), &mut canvas);

        let wall = options.palette().wall;
        assert_eq!(canvas.pixel(599, 315), Some(wall));
        assert_eq!(canvas.pixel(315, 599), Some(wall));
        assert_eq!(canvas.pixel(599, 599), Some(wall));
    }

    #[test]
    fn off_canvas_end_points_are_clamped() {
        assert_eq!(clamp_to_surface(Point::new(600, -3), 600, 400), Point::new(599, 0));
        assert_eq!(clamp_to_surface(Point::new(10, 400), 600, 400), Point::new(10, 399));

        let mut canvas = ImageCanvas::new(Width(4), Height(4), BLACK);
        canvas.line(Point::new(4, 0), Point::new(4, 4), RED);
        for y in 0..4 {
            assert_eq!(canvas.pixel(3, y), Some(RED));
        }
    }

    #[test]
    fn rendered_single_cell_shows_active_colour_over_walls() {
        let state = MazeState::new(RowsCount(1), ColumnsCount(1)).unwrap();
        let options = RenderOptionsBuilder::new().canvas_size(Width(8), Height(8)).build();
        let mut canvas = ImageCanvas::new(Width(8), Height(8), WHITE);
        draw(&render(&state, &options), &mut canvas);
        let active = options.palette().active;
        assert_eq!(canvas.pixel(0, 0), Some(active));
        assert_eq!(canvas.pixel(4, 4), Some(active));
        canvas.clear(WHITE);
        assert_eq!(canvas.pixel(4, 4), Some(WHITE));
    }
}
