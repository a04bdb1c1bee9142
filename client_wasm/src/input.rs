//! Pointer and touch input handling

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Viewport coordinates of a press-start event (first touch for touch input)
pub fn press_point(event: &Event) -> Option<Vec2> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        return Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32))
}

/// Convert a viewport point into the game container's coordinate space
pub fn to_container(point: Vec2, container: &web_sys::Element) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    point - Vec2::new(rect.left() as f32, rect.top() as f32)
}
