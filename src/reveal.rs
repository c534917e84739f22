use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// When a region counts as on screen: the fraction of its area that must be
/// inside the viewport, and a margin applied to the viewport bounds before
/// the intersection is computed. The negative bottom margin makes regions
/// reveal only once they have cleared the very bottom edge.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px",
        }
    }
}

/// The viewport-observation resource watching a single region. Injected so
/// the controller can be driven by a fake in tests.
pub trait ObservationHandle {
    fn release(&mut self);
}

/// Per-region reveal state machine. `visible` starts false, latches true on
/// the first qualifying intersection notification and never reverts; the
/// observation resource is released the moment that happens. The region is
/// "observed" exactly while a handle is held.
pub struct RevealController<H: ObservationHandle> {
    visible: bool,
    handle: Option<H>,
}

impl<H: ObservationHandle> RevealController<H> {
    pub fn new() -> Self {
        Self {
            visible: false,
            handle: None,
        }
    }

    pub fn attach(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn observed(&self) -> bool {
        self.handle.is_some()
    }

    /// Feed one intersection notification. Returns true only when this
    /// notification flipped the region visible; duplicate or late
    /// notifications are no-ops.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.visible || self.handle.is_none() {
            return false;
        }
        self.visible = true;
        self.detach();
        true
    }

    /// Release the observation resource. Safe to call repeatedly and before
    /// any handle was attached.
    pub fn detach(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl<H: ObservationHandle> Default for RevealController<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Real handle backed by the browser's IntersectionObserver.
struct DomObservation {
    observer: IntersectionObserver,
    target: Element,
}

impl ObservationHandle for DomObservation {
    fn release(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

/// Observe the returned `NodeRef`; the bool flips to true the first time the
/// referenced element intersects the viewport per `config`, then stays true.
/// A ref that never resolves to an element is left unobserved, and whatever
/// registration exists is released when the component unmounts.
#[hook]
pub fn use_reveal(config: RevealConfig) -> (NodeRef, bool) {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node_ref, config): &(NodeRef, RevealConfig)| {
                let mut teardown: Box<dyn FnOnce()> = Box::new(|| ());
                if let Some(target) = node_ref.cast::<Element>() {
                    let controller = Rc::new(RefCell::new(RevealController::new()));
                    let callback = {
                        let controller = controller.clone();
                        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                if let Ok(entry) =
                                    entries.get(0).dyn_into::<IntersectionObserverEntry>()
                                {
                                    if controller.borrow_mut().on_intersect(entry.is_intersecting())
                                    {
                                        visible.set(true);
                                    }
                                }
                            },
                        )
                    };
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(config.threshold));
                    options.set_root_margin(config.root_margin);
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&target);
                            controller.borrow_mut().attach(DomObservation { observer, target });
                            teardown = Box::new(move || {
                                controller.borrow_mut().detach();
                                // The closure must outlive the observer.
                                drop(callback);
                            });
                        }
                        Err(err) => {
                            log::warn!("could not create intersection observer: {:?}", err);
                        }
                    }
                }
                teardown
            },
            (node_ref.clone(), config),
        );
    }

    (node_ref, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Milliseconds to hold back the entrance transition, for staggering
    /// sibling regions.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a region that fades and slides into place the first
/// time it scrolls into view. The rendered style is a pure function of the
/// controller's `visible` flag.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node_ref, visible) = use_reveal(RevealConfig::default());

    let style = format!(
        "opacity: {}; transform: {}; transition: opacity 0.7s ease {delay}ms, transform 0.7s ease {delay}ms;",
        if visible { "1" } else { "0" },
        if visible { "translateY(0)" } else { "translateY(24px)" },
        delay = props.delay_ms,
    );

    html! {
        <div ref={node_ref} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeObservation {
        releases: Rc<Cell<u32>>,
    }

    impl ObservationHandle for FakeObservation {
        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn observed_region() -> (RevealController<FakeObservation>, Rc<Cell<u32>>) {
        let releases = Rc::new(Cell::new(0));
        let mut controller = RevealController::new();
        controller.attach(FakeObservation {
            releases: releases.clone(),
        });
        (controller, releases)
    }

    #[test]
    fn starts_hidden_and_observed() {
        let (controller, releases) = observed_region();
        assert!(!controller.visible());
        assert!(controller.observed());
        assert_eq!(releases.get(), 0);
    }

    #[test]
    fn first_qualifying_notification_reveals_and_releases() {
        let (mut controller, releases) = observed_region();
        assert!(controller.on_intersect(true));
        assert!(controller.visible());
        assert!(!controller.observed());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn non_intersecting_notifications_are_ignored() {
        let (mut controller, releases) = observed_region();
        assert!(!controller.on_intersect(false));
        assert!(!controller.on_intersect(false));
        assert!(!controller.visible());
        assert!(controller.observed());
        assert_eq!(releases.get(), 0);
    }

    #[test]
    fn duplicate_notifications_after_reveal_are_noops() {
        let (mut controller, releases) = observed_region();
        assert!(controller.on_intersect(true));
        assert!(!controller.on_intersect(true));
        assert!(!controller.on_intersect(false));
        assert!(controller.visible());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn detach_before_reveal_stops_transitions() {
        let (mut controller, releases) = observed_region();
        controller.detach();
        assert!(!controller.observed());
        assert_eq!(releases.get(), 1);
        // A notification already in flight when the region was unmounted.
        assert!(!controller.on_intersect(true));
        assert!(!controller.visible());
    }

    #[test]
    fn detach_is_idempotent() {
        let (mut controller, releases) = observed_region();
        controller.detach();
        controller.detach();
        assert_eq!(releases.get(), 1);

        let mut never_attached: RevealController<FakeObservation> = RevealController::new();
        never_attached.detach();
        assert!(!never_attached.visible());
    }

    #[test]
    fn regions_are_independent() {
        let (mut first, first_releases) = observed_region();
        let (second, second_releases) = observed_region();
        assert!(first.on_intersect(true));
        assert!(!second.visible());
        assert!(second.observed());
        assert_eq!(first_releases.get(), 1);
        assert_eq!(second_releases.get(), 0);
    }

    #[test]
    fn default_tuning_matches_site_design() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.12);
        assert_eq!(config.root_margin, "0px 0px -40px 0px");
    }
}
