use thiserror::Error;
use wasm_bindgen::JsValue;

/// Tunables for the canvas surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Spacing of the background dot grid, in canvas units.
	pub grid_gap: f64,
	pub grid_color: String,
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Multiplier applied by the zoom buttons.
	pub zoom_step: f64,
	/// Fraction of the content size left as margin by fit-to-view.
	pub fit_padding: f64,
	/// Pointer travel (screen px) below which a press counts as a click.
	pub click_tolerance: f64,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			grid_gap: 16.0,
			grid_color: "#aaa".into(),
			min_zoom: 0.5,
			max_zoom: 2.0,
			zoom_step: 1.2,
			fit_padding: 0.1,
			click_tolerance: 3.0,
		}
	}
}

/// Failures while wiring the canvas element to the browser.
#[derive(Error, Debug)]
pub enum CanvasError {
	#[error("no browser window")]
	NoWindow,
	#[error("2d rendering context unavailable")]
	NoContext,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		Self::Js(format!("{value:?}"))
	}
}
