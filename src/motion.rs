//! Animation parameters and the bits of math behind the cosmetic effects.
//!
//! Nothing in `view_state` reads from here; changing a timing value can't
//! change what the page does, only how it looks while doing it.

use crate::view_state::PointerPosition;

pub const EASE_OUT_SOFT: &str = "cubic-bezier(0.2, 0.65, 0.3, 0.9)";
pub const EASE_OUT: &str = "ease-out";

/// Entrance transition for an element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub easing: &'static str,
}

impl Reveal {
    pub const fn fade_up(offset_y: i32) -> Self {
        Self {
            duration_ms: 800,
            delay_ms: 0,
            offset_x: 0,
            offset_y,
            easing: EASE_OUT_SOFT,
        }
    }

    pub const fn slide_x(offset_x: i32) -> Self {
        Self {
            duration_ms: 800,
            delay_ms: 0,
            offset_x,
            offset_y: 0,
            easing: EASE_OUT,
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn with_duration(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    /// Delay the `index`th child of a staggered group.
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        Self {
            delay_ms: self.delay_ms + step_ms * index as u32,
            ..self
        }
    }

    pub fn style(&self, shown: bool) -> String {
        let (opacity, x, y) = if shown {
            (1, 0, 0)
        } else {
            (0, self.offset_x, self.offset_y)
        };
        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px); \
             transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = self.duration_ms,
            e = self.easing,
            delay = self.delay_ms,
        )
    }
}

pub const HERO_TEXT: Reveal = Reveal::fade_up(30).with_delay(300);
pub const HERO_STAGGER_MS: u32 = 200;
pub const SECTION_HEADING: Reveal = Reveal::fade_up(20).with_duration(600);
pub const CARD_STAGGER_MS: u32 = 100;
pub const PROJECT_ENTRY: Reveal = Reveal::fade_up(50);

/// Resting tilt of the `index`th project polaroid, alternating sides.
pub fn polaroid_tilt(index: usize) -> i32 {
    if index % 2 == 0 {
        2
    } else {
        -2
    }
}

/// How far down the page the reader is, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Offset for a parallax layer, proportional to the pointer's distance from
/// the viewport centre. `strength` is the offset in px at the very edge.
pub fn parallax_offset(
    pointer: PointerPosition,
    viewport_width: f64,
    viewport_height: f64,
    strength: f64,
) -> (f64, f64) {
    // window size is unknown (infinite) during server rendering
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(viewport_width) || !usable(viewport_height) {
        return (0.0, 0.0);
    }
    let dx = (pointer.x / viewport_width - 0.5) * 2.0;
    let dy = (pointer.y / viewport_height - 0.5) * 2.0;
    (
        dx.clamp(-1.0, 1.0) * strength,
        dy.clamp(-1.0, 1.0) * strength,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_style() {
        let reveal = Reveal::fade_up(20).with_delay(100).with_duration(500);
        let hidden = reveal.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 20px);"));
        assert!(hidden.contains("opacity 500ms cubic-bezier(0.2, 0.65, 0.3, 0.9) 100ms"));
        let shown = reveal.style(true);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px);"));

        let side = Reveal::slide_x(-30).style(false);
        assert!(side.contains("translate(-30px, 0px)"));
        assert!(side.contains("ease-out"));
    }

    #[test]
    fn test_stagger() {
        let base = HERO_TEXT;
        assert_eq!(base.staggered(0, HERO_STAGGER_MS).delay_ms, 300);
        assert_eq!(base.staggered(3, HERO_STAGGER_MS).delay_ms, 900);
    }

    #[test]
    fn test_polaroid_tilt_alternates() {
        let tilts: Vec<i32> = (0..4).map(polaroid_tilt).collect();
        assert_eq!(tilts, vec![2, -2, 2, -2]);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // overscroll on mobile
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 0.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parallax_offset() {
        let centre = PointerPosition { x: 500.0, y: 400.0 };
        assert_eq!(parallax_offset(centre, 1000.0, 800.0, 10.0), (0.0, 0.0));

        let corner = PointerPosition { x: 0.0, y: 800.0 };
        assert_eq!(parallax_offset(corner, 1000.0, 800.0, 10.0), (-10.0, 10.0));

        let outside = PointerPosition { x: 5000.0, y: 0.0 };
        assert_eq!(parallax_offset(outside, 1000.0, 800.0, 10.0), (10.0, -10.0));

        assert_eq!(parallax_offset(corner, 0.0, 0.0, 10.0), (0.0, 0.0));
        assert_eq!(
            parallax_offset(corner, f64::INFINITY, f64::INFINITY, 10.0),
            (0.0, 0.0)
        );
    }
}
