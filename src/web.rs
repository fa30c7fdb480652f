//! Browser host: mounts a field on a `<canvas>` and drives it from
//! `requestAnimationFrame` until stopped.

mod canvas;

pub use canvas::CanvasSurface;

use crate::{
    animation::{Animation, FrameStatus},
    config::FieldConfig,
    event_dispatcher::EventDispatcher,
    renderer::surface::Surface,
    simulator::ressources::{events::SimulatorEvent, simulator_vars::SurfaceSize},
};
use anyhow::{anyhow, Context};
use log::{error, info};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// JavaScript-side handle of a mounted field.
#[wasm_bindgen]
pub struct FieldHandle {
    events: EventDispatcher,
    window: Window,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Ends the frame loop and detaches the resize listener.
    pub fn stop(&mut self) {
        self.events.send(SimulatorEvent::Stopped);
        if let Some(on_resize) = self.on_resize.take() {
            self.window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .ok();
        }
    }

    pub fn pause(&self) {
        self.events.send(SimulatorEvent::Paused);
    }

    pub fn resume(&self) {
        self.events.send(SimulatorEvent::Resumed);
    }
}

/// Freeing the handle from JavaScript tears the field down as well.
impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts a particle field on the canvas with id `canvas_id`.
///
/// `config_json` may hold any subset of the [`FieldConfig`] keys. Returns
/// `undefined` without doing anything when the canvas does not exist.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, config_json: Option<String>) -> Result<Option<FieldHandle>, JsError> {
    mount_field(canvas_id, config_json.as_deref()).map_err(|e| JsError::new(&format!("{e:#}")))
}

fn mount_field(canvas_id: &str, config_json: Option<&str>) -> anyhow::Result<Option<FieldHandle>> {
    let window = web_sys::window().context("no window")?;
    let Some(canvas) = find_canvas(&window, canvas_id) else {
        return Ok(None);
    };

    let config = match config_json {
        Some(json) => FieldConfig::from_json(json)?,
        None => FieldConfig::default(),
    };

    let size = viewport_size(&window);
    canvas.set_width(size.width);
    canvas.set_height(size.height);

    let surface = CanvasSurface::new(canvas.clone())?;
    let mut animation = Animation::seeded(&config, size, surface, &mut config.rng());
    animation.start();

    let events = animation.handle();
    let on_resize = listen_for_resize(&window, canvas, events.clone())?;
    run_frames(&window, animation)?;
    info!("Particle field mounted on #{canvas_id}");

    Ok(Some(FieldHandle {
        events,
        window,
        on_resize: Some(on_resize),
    }))
}

fn find_canvas(window: &Window, canvas_id: &str) -> Option<HtmlCanvasElement> {
    window
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn viewport_size(window: &Window) -> SurfaceSize {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32
    };
    SurfaceSize::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// Keeps the canvas at viewport size and forwards the new bounds to the simulator.
fn listen_for_resize(
    window: &Window,
    canvas: HtmlCanvasElement,
    events: EventDispatcher,
) -> anyhow::Result<Closure<dyn FnMut()>> {
    let viewport = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let size = viewport_size(&viewport);
        canvas.set_width(size.width);
        canvas.set_height(size.height);
        events.send(SimulatorEvent::Resized {
            width: size.width,
            height: size.height,
        });
    });

    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("failed to listen for resize: {e:?}"))?;
    Ok(on_resize)
}

/// Schedules `animation` on every display refresh until it reports
/// [`FrameStatus::Stopped`].
fn run_frames<S: Surface + 'static>(window: &Window, mut animation: Animation<S>) -> anyhow::Result<()> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let scheduler = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        tick(&mut animation, &next, &scheduler);
    }));

    let first = callback.borrow();
    let cb = first.as_ref().context("frame callback missing")?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("requestAnimationFrame failed: {e:?}"))?;
    Ok(())
}

/// Draws one frame and requests the next, or drops `next` once stopped.
fn tick<S: Surface>(animation: &mut Animation<S>, next: &FrameCallback, scheduler: &Window) {
    if animation.frame() == FrameStatus::Stopped {
        // Dropping the closure releases the animation and ends the loop.
        let _ = next.borrow_mut().take();
        return;
    }
    if let Some(cb) = next.borrow().as_ref() {
        if let Err(e) = scheduler.request_animation_frame(cb.as_ref().unchecked_ref()) {
            error!("requestAnimationFrame failed: {e:?}");
        }
    }
}
