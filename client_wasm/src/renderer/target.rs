use game_core::TargetView;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{create_div, set_percent, set_px, toggle_class};

/// DOM nodes for the active target
pub struct TargetElements {
    root: HtmlElement,
    fill: HtmlElement,
    band: HtmlElement,
    ball: HtmlElement,
    last: Option<TargetView>,
}

impl TargetElements {
    pub fn create(document: &Document, container: &HtmlElement) -> Result<Self, JsValue> {
        let root = create_div(document, "target")?;
        let gauge = create_div(document, "frequency-progress-container")?;
        let band = create_div(document, "frequency-target-range")?;
        let fill = create_div(document, "frequency-progress-fill")?;
        let ball = create_div(document, "ball-visual")?;

        // Band sits behind the fill
        gauge.append_child(&band)?;
        gauge.append_child(&fill)?;
        root.append_child(&gauge)?;
        root.append_child(&ball)?;
        container.append_child(&root)?;

        Ok(Self {
            root,
            fill,
            band,
            ball,
            last: None,
        })
    }

    /// Push only what changed since the last frame
    pub fn update(&mut self, view: &TargetView) -> Result<(), JsValue> {
        let last = self.last;
        let changed = |f: fn(&TargetView) -> f32| last.map_or(true, |l| f(&l) != f(view));

        if last.is_none() {
            set_px(&self.root, "left", view.pos.x)?;
            set_px(&self.root, "top", view.pos.y)?;
            set_px(&self.root, "width", view.size)?;
            set_px(&self.root, "height", view.size)?;
            set_percent(&self.band, "left", view.band_left_percent)?;
            set_percent(&self.band, "width", view.band_width_percent)?;
        }
        if changed(|v: &TargetView| v.fill_percent) {
            set_percent(&self.fill, "width", view.fill_percent)?;
        }
        if changed(|v: &TargetView| v.scale) {
            self.ball
                .style()
                .set_property("transform", &format!("scale({})", view.scale))?;
        }
        if last.map_or(true, |l| l.in_band != view.in_band) {
            toggle_class(&self.fill, "sweet-spot", view.in_band)?;
            toggle_class(&self.ball, "correct-frequency", view.in_band)?;
        }
        if last.map_or(true, |l| l.pressed != view.pressed) {
            toggle_class(&self.root, "pressed", view.pressed)?;
        }

        self.last = Some(*view);
        Ok(())
    }

    pub fn remove(self) {
        self.root.remove();
    }
}
