use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that owns its callback.
///
/// The pending frame is cancelled on `stop` and on drop, so no callback
/// fires after the owner lets go.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Start calling `on_frame(dt_seconds)` once per display frame.
    /// The first frame reports a delta of zero.
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> Result<Self, JsValue> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let mut last: Option<f64> = None;

        let h = handle.clone();
        let cb = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            // Stopped between scheduling and firing.
            if h.get().is_none() {
                return;
            }
            let dt = last.replace(now).map_or(0.0, |prev| ((now - prev) / 1000.0) as f32);
            on_frame(dt);

            match schedule(&cb) {
                Ok(id) => h.set(Some(id)),
                Err(e) => {
                    error!("frame loop halted: {:?}", e);
                    h.set(None);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = schedule(&callback)?;
        handle.set(Some(id));
        Ok(Self { handle, callback })
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    error!("cancel_animation_frame failed: {:?}", e);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's reference back to its own slot.
        self.callback.borrow_mut().take();
    }
}

fn schedule(callback: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let slot = callback.borrow();
    let closure = slot
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback released"))?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())
}
