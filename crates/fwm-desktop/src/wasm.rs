//! WASM exports for the window manager
//!
//! Binds the pure-Rust [`DesktopEngine`] to the DOM: each window is an
//! `HtmlElement` whose inline styles mirror the core geometry, and the
//! page's pre-declared `.js-window` elements are adopted at startup.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::engine::DesktopEngine;
use crate::surface::Surface;
use crate::window::{ResizeDirection, WindowDescriptor, WindowRegion};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// =============================================================================
// Logging
// =============================================================================

/// Buffers one formatted event and hands it to `console.log` when dropped
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            log(line);
        }
    }
}

/// `MakeWriter` routing `tracing` output to the browser console
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Install a console-backed `tracing` subscriber.
///
/// `filter` uses `EnvFilter` syntax, e.g. `"debug"` or `"fwm_desktop=trace"`.
/// Fails if the filter does not parse or a subscriber is already installed.
#[wasm_bindgen]
pub fn init_logging(filter: &str) -> Result<(), JsValue> {
    let filter = EnvFilter::try_new(filter).map_err(|e| JsValue::from_str(&e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// =============================================================================
// Surface
// =============================================================================

/// Class marking pre-declared windows in the page
pub const WINDOW_CLASS_IDENTIFIER: &str = "js-window";

/// Class toggled on the focused window element
const FOCUSED_CLASS: &str = "is-focused";

/// Surface backed by a DOM element
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log(&format!("[fwm] failed to set {}: {:?}", property, e));
        }
    }
}

impl Surface for DomSurface {
    fn apply_left(&mut self, x: i32) {
        self.set_style("left", &format!("{}px", x));
    }

    fn apply_top(&mut self, y: i32) {
        self.set_style("top", &format!("{}px", y));
    }

    fn apply_width(&mut self, width: i32) {
        self.set_style("width", &format!("{}px", width));
    }

    fn apply_height(&mut self, height: i32) {
        self.set_style("height", &format!("{}px", height));
    }

    fn apply_z_index(&mut self, z_index: u32) {
        self.set_style("z-index", &z_index.to_string());
    }

    fn apply_focused(&mut self, focused: bool) {
        if let Err(e) = self.element.class_list().toggle_with_force(FOCUSED_CLASS, focused) {
            log(&format!("[fwm] failed to toggle {}: {:?}", FOCUSED_CLASS, e));
        }
    }

    fn detach(&mut self) {
        self.element.remove();
    }
}

/// Parse a region name sent by the chrome (`"title"`, `"content"`,
/// `"close"` or a compass direction)
fn parse_region(name: &str) -> Option<WindowRegion> {
    match name {
        "title" => Some(WindowRegion::TitleBar),
        "content" => Some(WindowRegion::Content),
        "close" => Some(WindowRegion::CloseButton),
        other => ResizeDirection::parse(other).map(WindowRegion::Resize),
    }
}

/// Window manager controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            engine: DesktopEngine::new(),
        }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Adopt every `.js-window` element in the document.
    ///
    /// Elements with invalid geometry are skipped and reported on the
    /// console; returns the number of windows added.
    #[wasm_bindgen]
    pub fn scan_document(&mut self) -> Result<u32, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let collection = document.get_elements_by_class_name(WINDOW_CLASS_IDENTIFIER);
        // Collect first: the live collection must not be walked while windows change
        let elements: Vec<HtmlElement> = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect();

        let mut added = 0;
        for element in elements {
            let dataset = element.dataset();
            match self.engine.try_add_window(|field| dataset.get(field), DomSurface::new(element)) {
                Ok(_) => added += 1,
                Err(e) => log(&format!("[fwm] skipped window element: {}", e)),
            }
        }
        Ok(added)
    }

    /// Register an element built by the chrome from a JSON descriptor
    #[wasm_bindgen]
    pub fn add_window(&mut self, element: HtmlElement, descriptor_json: &str) -> Result<u64, JsValue> {
        let descriptor = WindowDescriptor::from_json(descriptor_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.engine.add_window(descriptor, DomSurface::new(element)))
    }

    /// Destroy a window
    #[wasm_bindgen]
    pub fn destroy_window(&mut self, id: u64) -> bool {
        self.engine.destroy_window(id)
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> bool {
        self.engine.focus_window(id)
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: i32, y: i32) {
        self.engine.move_window(id, x, y);
    }

    /// Resize a window (clamped to the minimum size)
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: u64, width: i32, height: i32) {
        self.engine.resize_window(id, width, height);
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.engine.windows.focused()
    }

    /// Get all windows (back to front) as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let windows: Vec<serde_json::Value> = self
            .engine
            .windows
            .windows_by_z()
            .iter()
            .map(|w| {
                serde_json::json!({
                    "id": w.id(),
                    "title": w.title(),
                    "x": w.x(),
                    "y": w.y(),
                    "width": w.width(),
                    "height": w.height(),
                    "zIndex": w.z_index(),
                    "focused": w.is_focused()
                })
            })
            .collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer down on a named region of a window
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: u64, region: &str, x: i32, y: i32) -> bool {
        match parse_region(region) {
            Some(region) => self.engine.pointer_down(id, region, x, y).is_handled(),
            None => false,
        }
    }

    /// Pointer down at a page position (hit tested)
    #[wasm_bindgen]
    pub fn pointer_down_at(&mut self, x: i32, y: i32) -> bool {
        self.engine.pointer_down_at(x, y).is_handled()
    }

    /// Pointer move anywhere on the page
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        self.engine.pointer_move(x, y).is_handled()
    }

    /// Pointer release anywhere on the page
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up().is_handled()
    }

    /// CSS cursor for a page position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: i32, y: i32) -> String {
        self.engine
            .windows
            .region_at(crate::math::Point::new(x, y))
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
            .to_string()
    }
}
