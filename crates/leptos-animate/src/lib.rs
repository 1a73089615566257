//! Leptos Auto-Animate
//!
//! Zero-config list animations for Leptos. Attach to a parent element and
//! every child insertion, removal and move is animated with the Web
//! Animations API.
//!
//! A `MutationObserver` watches the parent's child list. Child boxes are
//! cached per element (in a JS `WeakMap`) so that after a mutation each
//! child can be animated from where it was to where it is now (FLIP).
//! Removed children are put back as absolutely positioned ghosts until
//! their exit animation finishes.

mod geometry;

pub use geometry::{
    enter_keyframes, exit_keyframes, exit_placement, flip_transform, interrupted_rect,
    remain_keyframes, Keyframe, Rect,
};

use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Animation, Element, HtmlElement, MutationObserver, MutationRecord, Node};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element, js_name = Element)]
    type AnimatableElement;

    /// `Element.animate(keyframes, options)`
    #[wasm_bindgen(method, catch, js_name = animate)]
    fn animate_keyframes(this: &AnimatableElement, keyframes: &JsValue, options: &JsValue) -> Result<Animation, JsValue>;
}

/// Exit and enter animations run longer than moves so they read as distinct
const ENTER_DURATION_FACTOR: f64 = 1.5;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Animation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimateOptions {
    /// Base duration of a move, in milliseconds
    pub duration_ms: f64,
    /// CSS easing function
    pub easing: String,
    /// Animate even when the user asked the OS for reduced motion
    pub disrespect_user_motion_preference: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            duration_ms: 250.0,
            easing: "ease-in-out".to_string(),
            disrespect_user_motion_preference: false,
        }
    }
}

/// `KeyframeAnimationOptions` as a plain object
#[derive(Serialize)]
struct Timing<'a> {
    duration: f64,
    easing: &'a str,
}

/// `MutationObserverInit` as a plain object
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserveInit {
    child_list: bool,
}

/// Animate all child list changes of `target`.
///
/// Attaches once, the first time the node ref is bound. The observer lives
/// as long as the page.
pub fn use_auto_animate<E>(target: NodeRef<E>, options: AnimateOptions)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    Effect::new(move |attached: Option<bool>| {
        if attached == Some(true) {
            return true;
        }
        let Some(el) = target.get() else {
            return false;
        };
        let parent: HtmlElement = el.unchecked_into();
        if let Err(err) = AutoAnimator::attach(parent, options.clone()) {
            log::warn!("[animate] failed to attach: {:?}", err);
        }
        true
    });
}

struct AutoAnimator {
    parent: HtmlElement,
    options: AnimateOptions,
    /// Element -> last known `Rect`, relative to the parent
    coords: js_sys::WeakMap,
    /// Element -> running `Animation`
    running: js_sys::WeakMap,
    /// Ghosts of removed children
    exiting: js_sys::WeakSet,
}

impl AutoAnimator {
    fn attach(parent: HtmlElement, options: AnimateOptions) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Ghosts are absolutely positioned against the parent
        if let Some(style) = window.get_computed_style(&parent)? {
            if style.get_property_value("position")? == "static" {
                parent.style().set_property("position", "relative")?;
            }
        }

        let animator = Rc::new(AutoAnimator {
            parent,
            options,
            coords: js_sys::WeakMap::new(),
            running: js_sys::WeakMap::new(),
            exiting: js_sys::WeakSet::new(),
        });
        animator.record_all();

        let observed = Rc::clone(&animator);
        let on_mutation = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                observed.on_mutations(&records);
            },
        );
        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
        let init = serde_wasm_bindgen::to_value(&ObserveInit { child_list: true })?;
        observer.observe_with_options(&animator.parent, init.unchecked_ref())?;
        on_mutation.forget();

        let resized = Rc::clone(&animator);
        let on_resize = Closure::<dyn FnMut()>::new(move || resized.record_all());
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();

        Ok(())
    }

    fn enabled(&self) -> bool {
        if self.options.disrespect_user_motion_preference {
            return true;
        }
        let reduced = web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        !reduced
    }

    fn children(&self) -> Vec<HtmlElement> {
        let collection = self.parent.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .filter(|el| !self.exiting.has(el))
            .collect()
    }

    fn measure(el: &Element) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    fn cached(&self, el: &Element) -> Option<Rect> {
        let value = self.coords.get(el);
        if value.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(value).ok()
    }

    fn remember(&self, el: &Element, rect: &Rect) {
        if let Ok(value) = serde_wasm_bindgen::to_value(rect) {
            self.coords.set(el, &value);
        }
    }

    /// Refresh the cached boxes of all children
    fn record_all(&self) {
        let origin = Self::measure(&self.parent);
        for child in self.children() {
            self.remember(&child, &Self::measure(&child).relative_to(&origin));
        }
    }

    fn running_animation(&self, el: &Element) -> Option<Animation> {
        let value = self.running.get(el);
        if value.is_undefined() {
            return None;
        }
        Some(value.unchecked_into())
    }

    fn cancel_running(&self, el: &Element) {
        if let Some(animation) = self.running_animation(el) {
            animation.cancel();
            self.running.delete(el);
        }
    }

    fn play(&self, el: &HtmlElement, frames: &[Keyframe], duration: f64) -> Option<Animation> {
        let frames = serde_wasm_bindgen::to_value(&frames).ok()?;
        let timing = serde_wasm_bindgen::to_value(&Timing {
            duration,
            easing: &self.options.easing,
        })
        .ok()?;
        let animation = el.unchecked_ref::<AnimatableElement>().animate_keyframes(&frames, &timing).ok()?;
        self.running.set(el, &animation);

        let running = self.running.clone();
        let target = el.clone();
        let settled = Closure::once_into_js(move || {
            running.delete(&target);
        });
        animation.set_onfinish(Some(settled.unchecked_ref()));
        Some(animation)
    }

    fn on_mutations(&self, records: &js_sys::Array) {
        if !self.enabled() {
            self.record_all();
            return;
        }
        let records: Vec<MutationRecord> = records
            .iter()
            .map(|record| record.unchecked_into::<MutationRecord>())
            .collect();
        if records.iter().all(|record| self.only_ghosts(record)) {
            return;
        }

        // Ghosts go in first. They are out of flow, so the layout measured
        // below is the final one.
        for record in &records {
            let removed = record.removed_nodes();
            for i in 0..removed.length() {
                let Some(node) = removed.item(i) else { continue };
                // Moved nodes are reported as removed and re-added
                if node.parent_node().is_some() {
                    continue;
                }
                let Ok(el) = node.dyn_into::<HtmlElement>() else { continue };
                if self.exiting.has(&el) {
                    continue;
                }
                self.exit(&el, record.next_sibling());
            }
        }

        let children = self.children();
        let origin = Self::measure(&self.parent);

        // Interrupted children start from where they are on screen, not from
        // the end of their previous animation. Measure them all before
        // cancelling anything, since a cancelled resize shifts its siblings.
        let visuals: Vec<Option<Rect>> = children
            .iter()
            .map(|child| {
                self.running_animation(child)
                    .map(|_| Self::measure(child).relative_to(&origin))
            })
            .collect();
        for child in &children {
            self.cancel_running(child);
        }

        let duration = self.options.duration_ms;
        for (child, visual) in children.iter().zip(visuals) {
            let last = Self::measure(child).relative_to(&origin);
            let first = match (self.cached(child), visual) {
                (Some(cached), Some(visual)) => Some(interrupted_rect(&cached, &visual, &last)),
                (cached, _) => cached,
            };
            match first {
                Some(first) => {
                    if let Some(frames) = remain_keyframes(&first, &last) {
                        self.play(child, &frames, duration);
                    }
                }
                None => {
                    self.play(child, &enter_keyframes(), duration * ENTER_DURATION_FACTOR);
                }
            }
            self.remember(child, &last);
        }
    }

    /// Whether a record only reports our own ghost insertions and removals
    fn only_ghosts(&self, record: &MutationRecord) -> bool {
        [record.added_nodes(), record.removed_nodes()].iter().all(|nodes| {
            (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .all(|node| self.exiting.has(&node))
        })
    }

    fn exit(&self, el: &HtmlElement, next_sibling: Option<Node>) {
        let Some(last) = self.cached(el) else { return };
        self.exiting.add(el);

        let parent = &self.parent;
        let parent_node: &Node = parent.as_ref();
        let placed = exit_placement(
            &last,
            (parent.client_left() as f64, parent.client_top() as f64),
            (parent.scroll_left() as f64, parent.scroll_top() as f64),
        );
        let style = el.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", &format!("{}px", placed.x));
        let _ = style.set_property("top", &format!("{}px", placed.y));
        let _ = style.set_property("width", &format!("{}px", placed.width));
        let _ = style.set_property("height", &format!("{}px", placed.height));
        let _ = style.set_property("margin", "0");
        let _ = style.set_property("pointer-events", "none");

        let anchor = next_sibling.filter(|n| n.parent_node().as_ref() == Some(parent_node));
        if parent.insert_before(el, anchor.as_ref()).is_err() {
            return;
        }

        let duration = self.options.duration_ms * ENTER_DURATION_FACTOR;
        match self.play(el, &exit_keyframes(), duration) {
            Some(animation) => {
                // Replaces the handler set by `play`. Removing the ghost
                // makes its `running` entry unreachable.
                let ghost = el.clone();
                let done = Closure::once_into_js(move || ghost.remove());
                animation.set_onfinish(Some(done.unchecked_ref()));
            }
            None => el.remove(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timing_is_a_plain_options_object() {
        let timing = Timing {
            duration: 375.0,
            easing: "ease-in-out",
        };
        assert_eq!(
            serde_json::to_value(&timing).unwrap(),
            json!({ "duration": 375.0, "easing": "ease-in-out" })
        );
    }

    #[test]
    fn test_observe_init_uses_dom_field_names() {
        assert_eq!(
            serde_json::to_value(ObserveInit { child_list: true }).unwrap(),
            json!({ "childList": true })
        );
    }
}
