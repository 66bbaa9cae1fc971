mod color;
mod particle;
mod renderer;
mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use particle::ParticleField;
use renderer::Renderer;

pub use particle::{link_alpha, Particle, LINK_DISTANCE, PARTICLE_COUNT};

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Starts the animated backdrop on `canvas` and runs it for the lifetime of
/// the page. Fails (and schedules nothing) if the window or the canvas's 2d
/// context is unavailable; once the loop is armed it never stops.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    Renderer::fit_to_window(&canvas, &window)?;
    register_resize_listener(&canvas, &window)?;

    let renderer = Renderer::new(canvas.clone(), context);
    let field = Rc::new(RefCell::new(ParticleField::new(
        PARTICLE_COUNT,
        canvas.width() as f64,
        canvas.height() as f64,
    )));

    console::log_1(&format!("backdrop running with {} particles", PARTICLE_COUNT).into());
    run_frame_loop(window, renderer, field);
    Ok(())
}

// Pushes viewport size changes into the canvas. The backdrop runs for the
// lifetime of the page, so the listener is registered once and never removed.
fn register_resize_listener(canvas: &HtmlCanvasElement, window: &Window) -> Result<(), JsValue> {
    let canvas = canvas.clone();
    let listener = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            if let Err(err) = Renderer::fit_to_window(&canvas, &window) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

// Self-rescheduling requestAnimationFrame loop: the closure re-arms itself
// at the end of every invocation and never blocks in between. A failed frame
// is logged and the loop keeps going.
fn run_frame_loop(window: Window, renderer: Renderer, field: Rc<RefCell<ParticleField>>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = holder.clone();

    let scheduler = window.clone();
    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = renderer.render_frame(&mut field.borrow_mut()) {
            console::error_1(&err);
        }
        schedule_frame(&scheduler, first.borrow().as_ref());
    }) as Box<dyn FnMut()>));

    schedule_frame(&window, holder.borrow().as_ref());
}

fn schedule_frame(window: &Window, callback: Option<&Closure<dyn FnMut()>>) {
    if let Some(callback) = callback {
        if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            console::error_1(&err);
        }
    }
}
