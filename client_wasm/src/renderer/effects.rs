//! Short-lived overlays: floating points and the completion burst

use game_core::burst::PALETTE;
use game_core::presentation::floating_points_text;
use game_core::{Burst, HitEvent, StreakTier};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{create_div, remove_later, set_px};

const FLOATING_TEXT_MS: i32 = 800;
const FLOATING_TEXT_LIFT: f32 = 30.0; // px above the target's top edge

pub fn floating_points(
    document: &Document,
    container: &HtmlElement,
    hit: &HitEvent,
    tiers: &[StreakTier],
) -> Result<(), JsValue> {
    let el = create_div(document, "floating-text")?;
    el.set_text_content(Some(&floating_points_text(hit.points, hit.streak, tiers)));
    set_px(&el, "left", hit.top_center.x)?;
    set_px(&el, "top", hit.top_center.y - FLOATING_TEXT_LIFT)?;
    container.append_child(&el)?;
    remove_later(el, FLOATING_TEXT_MS)
}

pub fn confetti(
    document: &Document,
    container: &HtmlElement,
    burst: &Burst,
) -> Result<(), JsValue> {
    let holder = create_div(document, "confetti-container")?;
    set_px(&holder, "left", burst.center.x)?;
    set_px(&holder, "top", burst.center.y)?;

    for particle in &burst.particles {
        let el = create_div(document, "confetti-particle")?;
        let style = el.style();
        style.set_property("background-color", PALETTE[particle.color % PALETTE.len()])?;
        style.set_property("--tx", &format!("{}px", particle.offset.x))?;
        style.set_property("--ty", &format!("{}px", particle.offset.y))?;
        style.set_property(
            "animation",
            &format!("confetti-burst {}s ease-out forwards", particle.duration),
        )?;
        holder.append_child(&el)?;
    }

    container.append_child(&holder)?;
    remove_later(holder, (burst.lifetime() * 1000.0).ceil() as i32)
}
