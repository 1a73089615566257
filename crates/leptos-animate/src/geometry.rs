//! Layout geometry and keyframe builders.
//!
//! Everything here is plain data so it can be tested without a DOM.

use serde::{Deserialize, Serialize};

/// Offsets below this many pixels are treated as "did not move"
const MOVE_EPSILON_PX: f64 = 0.5;

/// Scale of entering/exiting elements at the invisible end of the animation
const ENTER_SCALE: f64 = 0.98;

/// Element box, usually relative to the animated parent
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Same box with its origin moved to `origin`'s top-left corner
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect {
            x: self.x - origin.x,
            y: self.y - origin.y,
            ..*self
        }
    }
}

/// One Web Animations API keyframe. Unset properties are left to the stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

fn translate(dx: f64, dy: f64) -> String {
    format!("translate({}px, {}px)", dx, dy)
}

fn scale(factor: f64) -> String {
    format!("scale({})", factor)
}

/// Transform that makes an element laid out at `last` appear at `first`.
/// Returns `None` when the element has not moved.
pub fn flip_transform(first: &Rect, last: &Rect) -> Option<String> {
    let dx = first.x - last.x;
    let dy = first.y - last.y;
    if dx.abs() < MOVE_EPSILON_PX && dy.abs() < MOVE_EPSILON_PX {
        return None;
    }
    Some(translate(dx, dy))
}

/// Box of an element whose animation was cut short by a new mutation.
///
/// `cached` is its layout before the mutation. `visual` and `layout` are
/// measured after it, with and without the running animation applied. The
/// difference is the offset the animation was contributing.
pub fn interrupted_rect(cached: &Rect, visual: &Rect, layout: &Rect) -> Rect {
    Rect {
        x: cached.x + (visual.x - layout.x),
        y: cached.y + (visual.y - layout.y),
        width: visual.width,
        height: visual.height,
    }
}

fn resized(first: &Rect, last: &Rect) -> bool {
    (first.width - last.width).abs() >= MOVE_EPSILON_PX
        || (first.height - last.height).abs() >= MOVE_EPSILON_PX
}

/// Keyframes for a child that stayed in the list but changed place or size
pub fn remain_keyframes(first: &Rect, last: &Rect) -> Option<Vec<Keyframe>> {
    let moved = flip_transform(first, last);
    let resized = resized(first, last);
    if moved.is_none() && !resized {
        return None;
    }

    let mut from = Keyframe {
        transform: Some(moved.unwrap_or_else(|| translate(0.0, 0.0))),
        ..Default::default()
    };
    let mut to = Keyframe {
        transform: Some(translate(0.0, 0.0)),
        ..Default::default()
    };
    if resized {
        from.width = Some(px(first.width));
        from.height = Some(px(first.height));
        to.width = Some(px(last.width));
        to.height = Some(px(last.height));
    }
    Some(vec![from, to])
}

/// Keyframes for a newly inserted child. Holds invisible for the first half.
pub fn enter_keyframes() -> Vec<Keyframe> {
    vec![
        Keyframe {
            transform: Some(scale(ENTER_SCALE)),
            opacity: Some(0.0),
            ..Default::default()
        },
        Keyframe {
            transform: Some(scale(ENTER_SCALE)),
            opacity: Some(0.0),
            offset: Some(0.5),
            ..Default::default()
        },
        Keyframe {
            transform: Some(scale(1.0)),
            opacity: Some(1.0),
            ..Default::default()
        },
    ]
}

/// Keyframes for a removed child played while it is re-inserted as a ghost
pub fn exit_keyframes() -> Vec<Keyframe> {
    vec![
        Keyframe {
            transform: Some(scale(1.0)),
            opacity: Some(1.0),
            ..Default::default()
        },
        Keyframe {
            transform: Some(scale(ENTER_SCALE)),
            opacity: Some(0.0),
            ..Default::default()
        },
    ]
}

/// Absolute `left/top/width/height` for a removed child's ghost.
///
/// `last` is relative to the parent's border box. Absolute positioning is
/// relative to the padding box and scrolls with the content, hence the
/// border and scroll corrections.
pub fn exit_placement(last: &Rect, border: (f64, f64), scroll: (f64, f64)) -> Rect {
    Rect {
        x: last.x - border.0 + scroll.0,
        y: last.y - border.1 + scroll.1,
        width: last.width,
        height: last.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relative_to_keeps_size() {
        let child = Rect::new(110.0, 240.0, 300.0, 40.0);
        let parent = Rect::new(100.0, 200.0, 320.0, 400.0);
        assert_eq!(child.relative_to(&parent), Rect::new(10.0, 40.0, 300.0, 40.0));
    }

    #[test]
    fn test_flip_transform_unmoved() {
        let r = Rect::new(0.0, 40.0, 300.0, 40.0);
        assert_eq!(flip_transform(&r, &r), None);
        // Sub-pixel jitter is not a move
        let jitter = Rect::new(0.2, 40.3, 300.0, 40.0);
        assert_eq!(flip_transform(&r, &jitter), None);
    }

    #[test]
    fn test_flip_transform_inverts_move() {
        let first = Rect::new(0.0, 0.0, 300.0, 40.0);
        let last = Rect::new(0.0, 80.0, 300.0, 40.0);
        assert_eq!(flip_transform(&first, &last).as_deref(), Some("translate(0px, -80px)"));
    }

    #[test]
    fn test_remain_keyframes_move_only() {
        let first = Rect::new(0.0, 40.0, 300.0, 40.0);
        let last = Rect::new(0.0, 0.0, 300.0, 40.0);
        let frames = remain_keyframes(&first, &last).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].transform.as_deref(), Some("translate(0px, 40px)"));
        assert_eq!(frames[1].transform.as_deref(), Some("translate(0px, 0px)"));
        assert!(frames.iter().all(|f| f.width.is_none() && f.height.is_none()));
    }

    #[test]
    fn test_remain_keyframes_resize_in_place() {
        let first = Rect::new(0.0, 0.0, 300.0, 40.0);
        let last = Rect::new(0.0, 0.0, 300.0, 64.0);
        let frames = remain_keyframes(&first, &last).unwrap();
        assert_eq!(frames[0].height.as_deref(), Some("40px"));
        assert_eq!(frames[1].height.as_deref(), Some("64px"));
        assert_eq!(frames[0].transform.as_deref(), Some("translate(0px, 0px)"));
    }

    #[test]
    fn test_remain_keyframes_none_when_static() {
        let r = Rect::new(0.0, 0.0, 300.0, 40.0);
        assert!(remain_keyframes(&r, &r).is_none());
    }

    #[test]
    fn test_keyframe_serializes_only_set_fields() {
        let frames = enter_keyframes();
        assert_eq!(
            serde_json::to_value(&frames[1]).unwrap(),
            json!({ "transform": "scale(0.98)", "opacity": 0.0, "offset": 0.5 })
        );
        assert_eq!(
            serde_json::to_value(&exit_keyframes()[0]).unwrap(),
            json!({ "transform": "scale(1)", "opacity": 1.0 })
        );
    }

    #[test]
    fn test_enter_and_exit_are_mirrored() {
        let enter = enter_keyframes();
        let exit = exit_keyframes();
        assert_eq!(enter.first().unwrap().opacity, exit.last().unwrap().opacity);
        assert_eq!(enter.last().unwrap().opacity, exit.first().unwrap().opacity);
    }

    #[test]
    fn test_interrupted_move_starts_from_screen_position() {
        // Row slid from y=0 towards y=80 and was 3/4 of the way there
        // (translate(0, -20) on top of its y=80 layout) when the list
        // changed again and moved its layout to y=40.
        let cached = Rect::new(0.0, 80.0, 300.0, 40.0);
        let layout = Rect::new(0.0, 40.0, 300.0, 40.0);
        let visual = Rect::new(0.0, 20.0, 300.0, 40.0);
        let first = interrupted_rect(&cached, &visual, &layout);
        assert_eq!(first, Rect::new(0.0, 60.0, 300.0, 40.0));
        // Starts at y=60, not at the cached y=80
        assert_eq!(
            flip_transform(&first, &layout).as_deref(),
            Some("translate(0px, 20px)")
        );
    }

    #[test]
    fn test_interrupted_rect_without_offset_is_cached_position() {
        let cached = Rect::new(0.0, 80.0, 300.0, 40.0);
        let layout = Rect::new(0.0, 40.0, 300.0, 40.0);
        assert_eq!(interrupted_rect(&cached, &layout, &layout), cached);
    }

    #[test]
    fn test_exit_placement_corrects_border_and_scroll() {
        let last = Rect::new(12.0, 90.0, 280.0, 40.0);
        let placed = exit_placement(&last, (2.0, 2.0), (0.0, 30.0));
        assert_eq!(placed, Rect::new(10.0, 118.0, 280.0, 40.0));
    }
}
