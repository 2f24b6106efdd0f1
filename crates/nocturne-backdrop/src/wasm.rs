//! WASM exports for the smoke backdrop
//!
//! This module provides the wasm-bindgen surface the host page talks to:
//! attach to a canvas, run the animation loop at the display's cadence,
//! track viewport resizes, and tear everything down on unmount.
//!
//! If the graphics stack is unavailable the backdrop fails silently: the
//! error goes to the console, the returned handle is inert, and the page
//! keeps working with no background.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::background::BackgroundRenderer;
use crate::frame::{FrameLoop, Viewport};

/// Shared mutable state behind the controller.
///
/// Everything lives on the main thread; `Rc` + interior mutability is the
/// whole concurrency story.
struct BackdropState {
    canvas: HtmlCanvasElement,
    renderer: RefCell<Option<BackgroundRenderer>>,
    frame_loop: RefCell<FrameLoop>,
    raf_id: Cell<Option<i32>>,
    raf_closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    resize_closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Backdrop controller for WASM - owns the render surface and frame loop
#[wasm_bindgen]
pub struct SmokeBackdrop {
    state: Rc<BackdropState>,
}

#[wasm_bindgen]
impl SmokeBackdrop {
    /// Attach a backdrop to the given canvas and start rendering.
    ///
    /// The canvas is first sized to the viewport. If bringing up the GPU
    /// fails, the failure is logged and the returned handle is inert -
    /// nothing is thrown across the boundary and nothing retries.
    pub async fn attach(canvas: HtmlCanvasElement) -> SmokeBackdrop {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        fit_canvas_to_viewport(&canvas);

        let renderer = match BackgroundRenderer::new(canvas.clone()).await {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                web_sys::console::error_1(&format!("backdrop init failed: {e}").into());
                None
            }
        };
        let active = renderer.is_some();

        let backdrop = SmokeBackdrop {
            state: Rc::new(BackdropState {
                canvas,
                renderer: RefCell::new(renderer),
                frame_loop: RefCell::new(FrameLoop::new()),
                raf_id: Cell::new(None),
                raf_closure: RefCell::new(None),
                resize_closure: RefCell::new(None),
            }),
        };

        if active {
            backdrop.install_resize_listener();
            backdrop.start_frame_loop();
        } else {
            // A loop that never starts still reports a clean teardown state.
            backdrop.state.frame_loop.borrow_mut().stop();
        }
        backdrop
    }

    /// Whether the GPU surface came up and the loop is running
    pub fn is_active(&self) -> bool {
        self.state.frame_loop.borrow().is_running()
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.state.frame_loop.borrow().frames()
    }

    /// Frame statistics as JSON
    pub fn stats_json(&self) -> String {
        let viewport = Viewport::new(self.state.canvas.width(), self.state.canvas.height());
        let stats = self.state.frame_loop.borrow().stats(viewport);
        serde_json::to_string(&stats).unwrap_or_else(|_| "{}".to_string())
    }

    /// Stop the frame loop and release the surface and listeners.
    ///
    /// Synchronous and final: no frame callback fires after this returns,
    /// and calling it again is a no-op.
    pub fn detach(&self) {
        self.state.frame_loop.borrow_mut().stop();

        if let Some(id) = self.state.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }

        if let Some(closure) = self.state.resize_closure.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let listener: &Function = closure.as_ref().unchecked_ref();
                let _ = window.remove_event_listener_with_callback("resize", listener);
            }
        }

        // Dropping the closure breaks the Rc cycle; dropping the renderer
        // releases the surface.
        self.state.raf_closure.borrow_mut().take();
        self.state.renderer.borrow_mut().take();
    }
}

impl SmokeBackdrop {
    /// Build the self-rescheduling frame callback and request the first frame
    fn start_frame_loop(&self) {
        let state = Rc::clone(&self.state);
        let closure = Closure::wrap(Box::new(move |now_ms: f64| {
            // Stopped loops produce nothing; do not reschedule.
            let Some(elapsed) = state.frame_loop.borrow_mut().tick(now_ms) else {
                return;
            };
            if let Some(renderer) = state.renderer.borrow_mut().as_mut() {
                if let Err(e) = renderer.render(elapsed) {
                    web_sys::console::warn_1(&format!("backdrop frame skipped: {e:?}").into());
                }
            }
            schedule_frame(&state);
        }) as Box<dyn FnMut(f64)>);

        *self.state.raf_closure.borrow_mut() = Some(closure);
        schedule_frame(&self.state);
    }

    /// Track viewport size changes for as long as the backdrop is attached
    fn install_resize_listener(&self) {
        let state = Rc::clone(&self.state);
        let closure = Closure::wrap(Box::new(move || {
            fit_canvas_to_viewport(&state.canvas);
            if let Some(renderer) = state.renderer.borrow_mut().as_mut() {
                renderer.resize(state.canvas.width(), state.canvas.height());
            }
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            let listener: &Function = closure.as_ref().unchecked_ref();
            if window
                .add_event_listener_with_callback("resize", listener)
                .is_err()
            {
                web_sys::console::warn_1(&"backdrop: resize listener rejected".into());
            }
        }
        *self.state.resize_closure.borrow_mut() = Some(closure);
    }
}

/// Request the next animation frame if the loop is still running
fn schedule_frame(state: &Rc<BackdropState>) {
    if !state.frame_loop.borrow().is_running() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure_ref = state.raf_closure.borrow();
    let Some(closure) = closure_ref.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => state.raf_id.set(Some(id)),
        Err(_) => {
            web_sys::console::warn_1(&"backdrop: requestAnimationFrame failed".into());
        }
    }
}

/// Size the canvas backing store to the current viewport
fn fit_canvas_to_viewport(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
