// Renderer struct that handles 2d canvas calls: clearing the surface,
// filling particle dots, and stroking the proximity links between them

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::color::Color;
use crate::particle::{Particle, ParticleField};
use crate::Timer;

const PARTICLE_COLOR: Color = Color::from_u32(0x1e90ffff);
const LINK_WIDTH: f64 = 0.5;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Renderer {
        Renderer { canvas, context }
    }

    // Matches the canvas's pixel size to the viewport. Called once at
    // startup and again from the window's resize listener; the simulation
    // reads the bounds back from the canvas on every frame.
    pub fn fit_to_window(canvas: &HtmlCanvasElement, window: &Window) -> Result<(), JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        Ok(())
    }

    // One full repaint: advance each particle, fill its dot, then stroke
    // links to every later particle still within range. Particle `i` has
    // already moved this frame while `j > i` has not, same as the pass the
    // backdrop was designed around.
    pub fn render_frame(&self, field: &mut ParticleField) -> Result<(), JsValue> {
        let _timer = Timer::new("Renderer::render_frame");
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);

        let mut rng = rand::thread_rng();
        for i in 0..field.len() {
            field.advance(i, &mut rng, width, height);
            let p = field.get(i);
            self.fill_particle(&p)?;
            for (j, alpha) in field.links_from(i) {
                self.stroke_link(&p, &field.get(j), alpha);
            }
        }
        Ok(())
    }

    fn fill_particle(&self, p: &Particle) -> Result<(), JsValue> {
        self.context
            .set_fill_style(&JsValue::from_str(&PARTICLE_COLOR.to_css()));
        self.context.begin_path();
        self.context
            .arc(p.pos[0], p.pos[1], p.radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_link(&self, p: &Particle, other: &Particle, alpha: f64) {
        self.context.set_stroke_style(&JsValue::from_str(
            &PARTICLE_COLOR.to_css_with_alpha(alpha),
        ));
        self.context.set_line_width(LINK_WIDTH);
        self.context.begin_path();
        self.context.move_to(p.pos[0], p.pos[1]);
        self.context.line_to(other.pos[0], other.pos[1]);
        self.context.stroke();
    }
}
