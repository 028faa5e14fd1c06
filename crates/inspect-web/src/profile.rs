// Start-up profile detection. Pure functions; the browser probing and the
// URL query decoding live in lib.rs.

use inspect_core::{PlatformCapabilities, ViewerConfig};

/// A browser counts as touch-first if it reports touch points or exposes
/// `ontouchstart` on the window.
#[inline]
pub fn capabilities(max_touch_points: i32, has_touch_start: bool) -> PlatformCapabilities {
    PlatformCapabilities {
        web: true,
        touch: max_touch_points > 0 || has_touch_start,
    }
}

/// Detected profile plus already-decoded `key=value` overrides.
pub fn resolve_config(caps: PlatformCapabilities, overrides: &[(String, String)]) -> ViewerConfig {
    let mut config = ViewerConfig::for_platform(caps);
    config.apply_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    config
}
