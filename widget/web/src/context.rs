//! One-shot probe of the page environment.

use coralchat_settings::ApplyContext;
use web_sys::Window;

const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Capture the context the settings logic needs. Probed once at init; a
/// mid-session viewport change or hour rollover takes effect on the next
/// page load.
pub fn probe(window: &Window) -> ApplyContext {
    let local_hour = js_sys::Date::new_0().get_hours();
    let page_path = window.location().pathname().unwrap_or_default();
    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let is_mobile = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|width| width <= MOBILE_MAX_WIDTH)
        .unwrap_or(false);

    ApplyContext {
        local_hour,
        page_path,
        prefers_reduced_motion,
        is_mobile,
    }
}
