//! Browser event and clock helpers.

use canvas::geometry::Point;

/// Pointer position relative to the canvas element.
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Seed for the target-word generator. Differs across page loads.
pub fn session_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}
