//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use tribute_particles::{decor, together, FieldConfig, ParticleBackground};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn expected_count() -> u32 {
    let width = web_sys::window().unwrap().inner_width().unwrap().as_f64().unwrap();
    FieldConfig::default().particle_count(width)
}

#[wasm_bindgen_test]
fn start_fills_canvas_to_viewport() {
    let canvas = canvas();
    let mut background = ParticleBackground::new(canvas.clone()).unwrap();
    background.start();
    assert!(background.is_running());
    assert_eq!(background.particle_count(), expected_count());

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    background.stop();
}

#[wasm_bindgen_test]
fn start_twice_then_stop_is_clean() {
    let mut background = ParticleBackground::new(canvas()).unwrap();
    background.start();
    background.start();
    assert_eq!(background.particle_count(), expected_count());
    background.stop();
    background.stop();
    assert!(!background.is_running());
}

#[wasm_bindgen_test]
fn canvas_without_2d_context_stays_inert() {
    let canvas = canvas();
    // a canvas already bound to webgl refuses a 2d context
    let gl = canvas.get_context("webgl").unwrap();
    if gl.is_none() {
        return;
    }
    let mut background = ParticleBackground::new(canvas).unwrap();
    background.start();
    assert!(!background.is_running());
    assert_eq!(background.particle_count(), 0);
    background.stop();
}

#[wasm_bindgen_test]
fn custom_config_caps_particles() {
    let mut config = FieldConfig::new();
    config.max_particles = 3;
    let mut background = ParticleBackground::with_config(canvas(), config).unwrap();
    background.start();
    assert!(background.particle_count() <= 3);
}

#[wasm_bindgen_test]
fn decorations_come_back_as_arrays() {
    assert_eq!(decor::floating_hearts(decor::HEART_COUNT).length(), 15);
    assert_eq!(decor::sparkles(decor::SPARKLE_COUNT).length(), 20);
}

#[wasm_bindgen_test]
fn counter_runs_from_start_date() {
    assert!(together::time_together_now().years >= 3);
}
