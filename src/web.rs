// Browser side of the particle background: a 2d canvas as the surface,
// requestAnimationFrame as the frame scheduler and the window's resize event.
// `ParticleBackground` ties them to an `Animator` and is what the page holds.

use crate::animator::Animator;
use crate::color::Color;
use crate::config::FieldConfig;
use crate::console;
use crate::surface::{FrameScheduler, ResizeSource, Surface, SurfaceProvider};
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>>;

type WebAnimator = Animator<CanvasSurface, RafScheduler, WindowResize>;

pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn viewport_size(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        (width, height)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue> {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_string()));
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        line_width: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), JsValue> {
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css_with_opacity(opacity)));
        self.context.set_line_width(line_width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}

pub struct CanvasProvider {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl CanvasProvider {
    fn context(&self) -> Result<Option<CanvasRenderingContext2d>, JsValue> {
        // no alpha channel: the browser can skip blending the canvas with the page
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::from_bool(false))?;
        let context = match self.canvas.get_context_with_context_options("2d", &options)? {
            Some(context) => context,
            None => return Ok(None),
        };
        let context = context.dyn_into::<CanvasRenderingContext2d>()?;
        context.set_image_smoothing_enabled(false);
        Ok(Some(context))
    }
}

impl SurfaceProvider for CanvasProvider {
    type Surface = CanvasSurface;

    fn acquire(&mut self) -> Option<CanvasSurface> {
        match self.context() {
            Ok(Some(context)) => Some(CanvasSurface {
                window: self.window.clone(),
                canvas: self.canvas.clone(),
                context,
            }),
            Ok(None) => None,
            Err(err) => {
                console::warn(&format!("2d context request failed: {:?}", err));
                None
            }
        }
    }
}

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            console::warn(&format!("cancelAnimationFrame failed: {:?}", err));
        }
    }
}

pub struct WindowResize {
    window: Window,
    callback: ResizeCallback,
}

impl ResizeSource for WindowResize {
    fn subscribe(&mut self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                console::warn(&format!("resize listener not added: {:?}", err));
            }
        }
    }

    fn unsubscribe(&mut self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                console::warn(&format!("resize listener not removed: {:?}", err));
            }
        }
    }
}

/// Animated particle field filling a canvas element. Free it (or call
/// `stop`) when the canvas leaves the page.
#[wasm_bindgen]
pub struct ParticleBackground {
    animator: Rc<RefCell<WebAnimator>>,
    provider: CanvasProvider,
    frame_callback: FrameCallback,
    resize_callback: ResizeCallback,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_config(canvas, FieldConfig::default())
    }

    pub fn with_config(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let resize_callback: ResizeCallback = Rc::new(RefCell::new(None));

        let scheduler = RafScheduler {
            window: window.clone(),
            callback: Rc::clone(&frame_callback),
        };
        let resize_source = WindowResize {
            window: window.clone(),
            callback: Rc::clone(&resize_callback),
        };
        let animator = Rc::new(RefCell::new(Animator::new(config, scheduler, resize_source)));

        // Both closures hold the animator, which holds them through its
        // scheduler and resize source. `teardown` breaks the cycle.
        let frame_target = Rc::clone(&animator);
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            frame_target.borrow_mut().frame(timestamp);
        }) as Box<dyn FnMut(f64)>));

        let resize_target = Rc::clone(&animator);
        *resize_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |event: Event| {
            resize_target.borrow_mut().resize_requested(event.time_stamp());
        }) as Box<dyn FnMut(Event)>));

        Ok(ParticleBackground {
            animator,
            provider: CanvasProvider { window, canvas },
            frame_callback,
            resize_callback,
        })
    }

    pub fn start(&mut self) {
        self.animator.borrow_mut().start(&mut self.provider);
    }

    pub fn stop(&mut self) {
        self.animator.borrow_mut().stop();
    }

    pub fn on_resize(&mut self) {
        self.animator.borrow_mut().on_resize();
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn particle_count(&self) -> u32 {
        self.animator.borrow().particle_count() as u32
    }
}

impl ParticleBackground {
    fn teardown(&mut self) {
        self.animator.borrow_mut().stop();
        self.frame_callback.borrow_mut().take();
        self.resize_callback.borrow_mut().take();
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.teardown();
    }
}
