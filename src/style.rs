//! Inline-style values and the global style contract.
//!
//! The component only emits class names and a handful of inline style
//! properties; the actual looping transform lives in CSS keyframes that the
//! host must make available. [`stylesheet`] returns that CSS ready for
//! injection.

use crate::config::Direction;

/// CSS custom property consumed by the loop's translate distance.
pub const GAP_PROPERTY: &str = "--gap";

/// Default inter-copy gap when `--gap` is not set.
pub const DEFAULT_GAP: &str = "1rem";

/// CSS custom property controlling the duration of one loop.
pub const DURATION_PROPERTY: &str = "--duration";

/// Default loop duration when `--duration` is not set.
pub const DEFAULT_DURATION: &str = "40s";

/// Inline style property for the edge-fade mask.
pub const MASK_IMAGE: &str = "mask-image";

/// Vendor-prefixed twin of [`MASK_IMAGE`].
pub const WEBKIT_MASK_IMAGE: &str = "-webkit-mask-image";

/// Build the edge-fade mask gradient for a scroll direction.
///
/// The gradient runs along the scroll axis: fully transparent at 0%, fully
/// opaque from 10% to 90%, fully transparent again at 100%, so content fades
/// in and out at the container edges.
///
/// ## Example
///
/// ```rust
/// use marquee_view::{fade_mask, Direction};
///
/// let mask = fade_mask(Direction::Up);
/// assert!(mask.starts_with("linear-gradient(to bottom"));
/// ```
pub fn fade_mask(direction: Direction) -> String {
    let axis = if direction.is_horizontal() {
        "to right"
    } else {
        "to bottom"
    };
    format!(
        "linear-gradient({}, transparent 0%, rgba(0, 0, 0, 1.0) 10%, rgba(0, 0, 0, 1.0) 90%, transparent 100%)",
        axis
    )
}

/// Stylesheet the host must make available before mounting a marquee.
///
/// Defines every class the component emits plus the two loop animations.
/// Inject it once (e.g. in a `<style>` tag or a global CSS file); tune speed
/// and spacing per marquee through the `--duration` and `--gap` custom
/// properties.
pub fn stylesheet() -> &'static str {
    STYLESHEET
}

const STYLESHEET: &str = "\
.flex{display:flex}
.flex-row{flex-direction:row}
.flex-col{flex-direction:column}
.gap-marquee{gap:var(--gap,1rem)}
.overflow-hidden{overflow:hidden}
.justify-around{justify-content:space-around}
.shrink-0{flex-shrink:0}
.animate-marquee-left{animation:marquee-left var(--duration,40s) linear infinite}
.animate-marquee-up{animation:marquee-up var(--duration,40s) linear infinite}
.direction-reverse{animation-direction:reverse}
.group:hover .pause-on-hover{animation-play-state:paused}
@keyframes marquee-left{from{transform:translateX(0)}to{transform:translateX(calc(-100% - var(--gap,1rem)))}}
@keyframes marquee-up{from{transform:translateY(0)}to{transform:translateY(calc(-100% - var(--gap,1rem)))}}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_mask_axis() {
        assert!(fade_mask(Direction::Left).starts_with("linear-gradient(to right"));
        assert!(fade_mask(Direction::Right).starts_with("linear-gradient(to right"));
        assert!(fade_mask(Direction::Up).starts_with("linear-gradient(to bottom"));
        assert!(fade_mask(Direction::Down).starts_with("linear-gradient(to bottom"));
    }

    #[test]
    fn test_fade_mask_stops() {
        let mask = fade_mask(Direction::Left);
        assert!(mask.contains("transparent 0%"));
        assert!(mask.contains("rgba(0, 0, 0, 1.0) 10%"));
        assert!(mask.contains("rgba(0, 0, 0, 1.0) 90%"));
        assert!(mask.contains("transparent 100%"));
    }

    #[test]
    fn test_stylesheet_defines_animations() {
        let css = stylesheet();
        assert!(css.contains("@keyframes marquee-left"));
        assert!(css.contains("@keyframes marquee-up"));
        assert!(css.contains("var(--duration,40s)"));
        assert!(css.contains("calc(-100% - var(--gap,1rem))"));
    }

    #[test]
    fn test_stylesheet_defines_emitted_classes() {
        let css = stylesheet();
        for class in [
            ".flex",
            ".flex-row",
            ".flex-col",
            ".gap-marquee",
            ".overflow-hidden",
            ".justify-around",
            ".shrink-0",
            ".animate-marquee-left",
            ".animate-marquee-up",
            ".direction-reverse",
            ".pause-on-hover",
        ] {
            assert!(css.contains(class), "stylesheet missing {}", class);
        }
    }
}
