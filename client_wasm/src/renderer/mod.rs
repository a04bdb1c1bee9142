//! DOM rendering
//!
//! The target is a handful of absolutely positioned divs inside the game
//! container; CSS owns the look, this module only sets geometry and toggles
//! state classes.

pub mod effects;
pub mod target;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

pub use target::TargetElements;

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

pub fn set_px(el: &HtmlElement, property: &str, value: f32) -> Result<(), JsValue> {
    el.style().set_property(property, &format!("{}px", value))
}

pub fn set_percent(el: &HtmlElement, property: &str, value: f32) -> Result<(), JsValue> {
    el.style().set_property(property, &format!("{}%", value))
}

pub fn toggle_class(el: &HtmlElement, class: &str, on: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(class, on).map(|_| ())
}

/// Remove an element after `ms`
pub fn remove_later(el: HtmlElement, ms: i32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = Closure::once_into_js(move || el.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)?;
    Ok(())
}
