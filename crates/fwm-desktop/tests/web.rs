//! Browser tests for the DOM surface
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use fwm_desktop::{
    init_logging, DesktopController, DesktopEngine, DomSurface, WindowDescriptor, WindowRegion,
    WINDOW_CLASS_IDENTIFIER,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn attached_element() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_geometry_is_mirrored_in_styles() {
    let element = attached_element();
    let mut engine = DesktopEngine::new();
    let id = engine.add_window(WindowDescriptor::new(10, 20, 50, 300), DomSurface::new(element.clone()));

    let style = element.style();
    assert_eq!(style.get_property_value("left").unwrap(), "10px");
    assert_eq!(style.get_property_value("top").unwrap(), "20px");
    assert_eq!(style.get_property_value("width").unwrap(), "100px");
    assert_eq!(style.get_property_value("height").unwrap(), "300px");
    assert_eq!(style.get_property_value("z-index").unwrap(), "0");
    assert!(element.class_list().contains("is-focused"));

    engine.pointer_down(id, WindowRegion::TitleBar, 15, 25);
    engine.pointer_move(115, 125);
    engine.pointer_up();
    assert_eq!(style.get_property_value("left").unwrap(), "110px");
}

#[wasm_bindgen_test]
fn test_destroy_removes_element() {
    let element = attached_element();
    let mut engine = DesktopEngine::new();
    let id = engine.add_window(WindowDescriptor::new(0, 0, 200, 200), DomSurface::new(element.clone()));

    assert!(element.is_connected());
    engine.destroy_window(id);
    assert!(!element.is_connected());
}

fn declared_window(attributes: &[(&str, &str)]) -> HtmlElement {
    let element = attached_element();
    element.set_class_name(WINDOW_CLASS_IDENTIFIER);
    let dataset = element.dataset();
    for (name, value) in attributes {
        dataset.set(name, value).unwrap();
    }
    element
}

#[wasm_bindgen_test]
fn test_scan_document_adopts_valid_windows() {
    let valid = declared_window(&[("x", "40"), ("y", "60"), ("width", "320"), ("height", "240")]);
    let invalid = declared_window(&[("x", "0"), ("y", "0"), ("width", "12px"), ("height", "240")]);

    let mut controller = DesktopController::new();
    assert_eq!(controller.scan_document().unwrap(), 1);

    let style = valid.style();
    assert_eq!(style.get_property_value("left").unwrap(), "40px");
    assert_eq!(style.get_property_value("width").unwrap(), "320px");
    assert!(valid.class_list().contains("is-focused"));

    assert_eq!(invalid.style().get_property_value("width").unwrap(), "");
    assert!(controller.get_focused_window().is_some());

    valid.remove();
    invalid.remove();
}

#[wasm_bindgen_test]
fn test_init_logging_installs_once() {
    assert!(init_logging("fwm_desktop=loudest").is_err());
    assert!(init_logging("fwm_desktop=debug").is_ok());
    assert!(init_logging("debug").is_err());
}
