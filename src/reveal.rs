//! Scroll-triggered entrance animations.
//!
//! Each revealed block runs its own one-shot [`RevealState`] machine. The
//! machine starts in `NotRevealed`, flips to `Revealed` the first time its
//! element intersects the viewport, and never flips back. The element is
//! rendered in an "entering" pose (offset, transparent) until then and in its
//! settled pose afterwards; the browser interpolates between the two with a
//! CSS transition.
//!
//! Content must never stay hidden because observation failed, so the hook
//! reveals immediately when the element is already on screen at mount, when
//! it is not mounted, or when an `IntersectionObserver` cannot be created.

use std::fmt;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report into the machine. Returns `true` only
    /// for the report that caused the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            RevealState::NotRevealed if intersecting => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Whether a vertical span `[top, bottom)` in viewport coordinates overlaps a
/// viewport of the given height.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Offset the element starts from before it settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pose {
    /// Starts `px` below its resting place.
    Rise(f32),
    /// Starts `px` to the left of its resting place.
    SlideFromLeft(f32),
    /// Starts scaled down to `scale`.
    Grow(f32),
}

impl Pose {
    fn entering_transform(self) -> String {
        match self {
            Pose::Rise(px) => format!("translateY({}px)", px),
            Pose::SlideFromLeft(px) => format!("translateX(-{}px)", px),
            Pose::Grow(scale) => format!("scale({})", scale),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::Rise(20.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_seconds: f32,
    /// Deferral of the visible start after the trigger fires.
    pub delay_seconds: f32,
}

/// Inline style for an element in the given pose and state.
pub fn reveal_style(pose: Pose, revealed: bool, transition: Transition) -> String {
    let (opacity, transform) = if revealed {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), pose.entering_transform())
    };

    let mut style = format!(
        "opacity: {}; transform: {}; transition: opacity {d}s ease-out, transform {d}s ease-out;",
        opacity,
        transform,
        d = transition.duration_seconds
    );
    if transition.delay_seconds > 0.0 {
        style.push_str(&format!(" transition-delay: {}s;", transition.delay_seconds));
    }
    style
}

/// What starts the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// First time the element scrolls into view.
    #[default]
    InView,
    /// Right after the first paint, regardless of scroll position.
    Mount,
}

/// What the hook does once its element has mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// Reveal after the entering pose has painted once.
    RevealAfterPaint,
    /// Reveal now without waiting for an intersection report.
    RevealNow,
    /// Wait for the observer.
    Observe,
}

/// Picks the mount behaviour. `target` is `None` when the element is not
/// mounted, otherwise whether it already intersects the viewport.
pub fn initial_reveal(trigger: RevealTrigger, target: Option<bool>) -> MountAction {
    match (trigger, target) {
        (RevealTrigger::Mount, _) => MountAction::RevealAfterPaint,
        (RevealTrigger::InView, None | Some(true)) => MountAction::RevealNow,
        (RevealTrigger::InView, Some(false)) => MountAction::Observe,
    }
}

/// Feeds one batch of intersection reports into `state`. Returns `true` when
/// this batch caused the transition; reports after it are not consumed.
pub fn feed(state: &mut RevealState, reports: impl IntoIterator<Item = bool>) -> bool {
    for intersecting in reports {
        if state.is_revealed() {
            return false;
        }
        if state.observe(intersecting) {
            return true;
        }
    }
    false
}

/// Keeps the observation handle when it started. Otherwise logs the failure,
/// runs `reveal` and returns `None`.
fn fail_open<G, E: fmt::Debug>(started: Result<G, E>, reveal: impl FnOnce()) -> Option<G> {
    match started {
        Ok(guard) => Some(guard),
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), showing content", err);
            reveal();
            None
        }
    }
}

/// Owns a live `IntersectionObserver` and its callback. Dropping it
/// disconnects the observer, so no callback outlives the section.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `element` and emits `on_reveal` once, the first time it
/// intersects the viewport. `Err` means no observer could be set up.
pub fn observe_once(element: &Element, on_reveal: Callback<()>) -> Result<ObserverGuard, JsValue> {
    let mut state = RevealState::default();

    let callback = Closure::<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>::new(
        move |entries: web_sys::js_sys::Array, observer: IntersectionObserver| {
            let reports = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting());
            if feed(&mut state, reports) {
                observer.disconnect();
                on_reveal.emit(());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

fn already_in_view(element: &Element) -> bool {
    let Some(viewport_height) = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    intersects_viewport(rect.top(), rect.bottom(), viewport_height)
}

/// Tracks whether the element behind `node` has been revealed.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_once(move || {
            let mut observer: Option<ObserverGuard> = None;
            let mut mount_timer: Option<Timeout> = None;

            let element = node.cast::<Element>();
            match initial_reveal(trigger, element.as_ref().map(already_in_view)) {
                MountAction::RevealAfterPaint => {
                    let revealed = revealed.clone();
                    mount_timer = Some(Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                        revealed.set(true);
                    }));
                }
                MountAction::RevealNow => {
                    if element.is_none() {
                        warn!("reveal target is not mounted, showing it immediately");
                    } else {
                        debug!("reveal target already in view at mount");
                    }
                    revealed.set(true);
                }
                MountAction::Observe => {
                    if let Some(element) = element {
                        let on_reveal = {
                            let revealed = revealed.clone();
                            Callback::from(move |_| {
                                debug!("reveal target entered the viewport");
                                revealed.set(true);
                            })
                        };
                        let revealed = revealed.clone();
                        observer = fail_open(observe_once(&element, on_reveal), move || {
                            revealed.set(true)
                        });
                    }
                }
            }

            move || {
                drop(mount_timer);
                drop(observer);
            }
        });
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub pose: Pose,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub delay_seconds: f32,
    #[prop_or(config::REVEAL_DURATION_SECONDS)]
    pub duration_seconds: f32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps its children in a block that animates into place once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.trigger);

    let style = reveal_style(
        props.pose,
        revealed,
        Transition {
            duration_seconds: props.duration_seconds,
            delay_seconds: props.delay_seconds,
        },
    );

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn reveals_on_first_intersection() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());
        assert!(state.observe(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn fires_at_most_once_and_never_reverts() {
        let mut state = RevealState::default();
        let events = [true, false, true, false, false, true];
        let fired: Vec<bool> = events.iter().map(|&e| state.observe(e)).collect();
        assert_eq!(fired, vec![true, false, false, false, false, false]);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn leave_without_enter_stays_hidden() {
        let mut state = RevealState::default();
        for _ in 0..3 {
            assert!(!state.observe(false));
        }
        assert_eq!(state, RevealState::NotRevealed);
    }

    #[test]
    fn viewport_geometry() {
        // Fully inside
        assert!(intersects_viewport(100.0, 300.0, 800.0));
        // Straddling the bottom edge
        assert!(intersects_viewport(700.0, 900.0, 800.0));
        // Straddling the top edge
        assert!(intersects_viewport(-50.0, 10.0, 800.0));
        // Below the fold
        assert!(!intersects_viewport(800.0, 1000.0, 800.0));
        // Scrolled past
        assert!(!intersects_viewport(-300.0, 0.0, 800.0));
    }

    #[test]
    fn mount_trigger_waits_for_first_paint() {
        for target in [None, Some(true), Some(false)] {
            assert_eq!(
                initial_reveal(RevealTrigger::Mount, target),
                MountAction::RevealAfterPaint
            );
        }
    }

    #[test]
    fn in_view_at_mount_reveals_without_scrolling() {
        assert_eq!(initial_reveal(RevealTrigger::InView, Some(true)), MountAction::RevealNow);
    }

    #[test]
    fn missing_element_reveals_immediately() {
        assert_eq!(initial_reveal(RevealTrigger::InView, None), MountAction::RevealNow);
    }

    #[test]
    fn below_the_fold_waits_for_the_observer() {
        assert_eq!(initial_reveal(RevealTrigger::InView, Some(false)), MountAction::Observe);
    }

    #[test]
    fn batch_with_several_intersections_fires_once() {
        let mut state = RevealState::default();
        let consumed = Cell::new(0);
        let batch = [false, true, true].into_iter().inspect(|_| consumed.set(consumed.get() + 1));

        assert!(feed(&mut state, batch));
        assert_eq!(consumed.get(), 2);
        assert!(state.is_revealed());

        assert!(!feed(&mut state, [true, true]));
        assert!(!feed(&mut state, [false]));
        assert!(state.is_revealed());
    }

    #[test]
    fn batch_without_intersection_stays_hidden() {
        let mut state = RevealState::default();
        assert!(!feed(&mut state, std::iter::empty()));
        assert!(!feed(&mut state, [false, false]));
        assert_eq!(state, RevealState::NotRevealed);
    }

    #[test]
    fn failed_observer_reveals_immediately() {
        let revealed = Cell::new(false);
        let guard = fail_open(Err::<(), _>("no IntersectionObserver"), || revealed.set(true));
        assert!(guard.is_none());
        assert!(revealed.get());
    }

    #[test]
    fn started_observer_is_kept_and_waits() {
        let revealed = Cell::new(false);
        let guard = fail_open(Ok::<_, &str>(7), || revealed.set(true));
        assert_eq!(guard, Some(7));
        assert!(!revealed.get());
    }

    #[test]
    fn entering_and_settled_styles() {
        let transition = Transition { duration_seconds: 0.6, delay_seconds: 0.0 };

        let entering = reveal_style(Pose::Rise(20.0), false, transition);
        assert!(entering.contains("opacity: 0;"));
        assert!(entering.contains("translateY(20px)"));
        assert!(!entering.contains("transition-delay"));

        let settled = reveal_style(Pose::Rise(20.0), true, transition);
        assert!(settled.contains("opacity: 1;"));
        assert!(settled.contains("transform: none;"));

        assert!(reveal_style(Pose::SlideFromLeft(20.0), false, transition).contains("translateX(-20px)"));
        assert!(reveal_style(Pose::Grow(0.95), false, transition).contains("scale(0.95)"));
    }

    #[test]
    fn stagger_delay_becomes_transition_delay() {
        let style = reveal_style(
            Pose::default(),
            true,
            Transition { duration_seconds: 0.6, delay_seconds: 0.2 },
        );
        assert!(style.contains("transition-delay: 0.2s;"));
    }
}
