use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{info, warn};

use crate::canvas::{clamp_to_surface, draw, DrawSurface};
use crate::driver::{Driver, TickClock};
use crate::errors::*;
use crate::generators::NeighbourChooser;
use crate::renderers::{Colour, PixelRect, Point};
use crate::units::{Height, Width};

/// A window the draw commands go straight to.
pub struct SdlCanvas {
    canvas: Canvas<Window>,
    events: EventPump,
    // Keeps the SDL library initialised for as long as the window lives.
    _sdl_context: sdl2::Sdl,
}

impl SdlCanvas {
    pub fn open(title: &str, width: Width, height: Height) -> Result<SdlCanvas> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let window = video_subsystem.window(title, width.0, height.0)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas()
            .present_vsync()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        let events = sdl_context.event_pump()?;

        Ok(SdlCanvas {
            canvas,
            events,
            _sdl_context: sdl_context,
        })
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Drain pending events, true when the window was closed or `q`/`Escape` pressed.
    pub fn quit_requested(&mut self) -> bool {
        let mut quit = false;
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. } |
                Event::KeyDown { keycode: Some(Keycode::Q), .. } |
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => quit = true,
                _ => continue,
            }
        }
        quit
    }
}

impl DrawSurface for SdlCanvas {
    fn fill_rect(&mut self, r: PixelRect, colour: Colour) {
        self.canvas.set_draw_color(to_sdl_colour(colour));
        if let Err(e) = self.canvas.fill_rect(rect::Rect::new(r.x, r.y, r.w, r.h)) {
            warn!(error = %e, "sdl fill_rect failed");
        }
    }

    fn line(&mut self, from: Point, to: Point, colour: Colour) {
        let (width, height) = match self.canvas.output_size() {
            Ok(size) => size,
            Err(e) => {
                warn!(error = %e, "sdl output_size failed");
                return;
            }
        };
        let from = clamp_to_surface(from, width, height);
        let to = clamp_to_surface(to, width, height);
        self.canvas.set_draw_color(to_sdl_colour(colour));
        let result = self.canvas.draw_line(rect::Point::new(from.x, from.y),
                                           rect::Point::new(to.x, to.y));
        if let Err(e) = result {
            warn!(error = %e, "sdl draw_line failed");
        }
    }
}

#[inline]
fn to_sdl_colour(colour: Colour) -> Color {
    Color::RGB(colour.r, colour.g, colour.b)
}

/// Tick the driver in a window until it is closed. Generation stops stepping when
/// complete but the finished maze stays on screen.
pub fn show<C: NeighbourChooser>(driver: &mut Driver<C>, clock: &mut TickClock) -> Result<()> {
    let options = *driver.render_options();
    let mut window = SdlCanvas::open("Mazes", options.canvas_width(), options.canvas_height())?;
    let mut announced = false;

    while !window.quit_requested() {
        let commands = driver.tick();
        draw(&commands, &mut window);
        window.present();

        if driver.is_finished() && !announced {
            info!(ticks = driver.ticks(), "maze complete, close the window to exit");
            announced = true;
        }
        clock.wait_for_next_tick();
    }
    Ok(())
}
