use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use yew::Callback;

use super::platform::{MotionPreference, ViewportObserver};

/// Which transform pairing the view applies while the element is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub animation: AnimationKind,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Fraction of the element that must be on screen, in `[0, 1]`.
    pub threshold: f64,
    /// Latch visible on the first qualifying intersection and stop observing.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animation: AnimationKind::FadeUp,
            duration_ms: 900,
            delay_ms: 0,
            threshold: 0.2,
            once: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Unattached,
    Observing,
    Visible { latched: bool },
    Hidden,
}

struct State<T, I, H> {
    target: Option<T>,
    phase: RevealPhase,
    visible: bool,
    reduced_motion: bool,
    failed_open: bool,
    intersection: Option<I>,
    motion: Option<H>,
    // Bumped whenever a subscription is closed so late callbacks can tell
    // they belong to a dead one.
    intersection_gen: u64,
    motion_gen: u64,
    on_change: Option<Callback<bool>>,
    on_motion_change: Option<Callback<bool>>,
}

type StateOf<V, M> = State<
    <V as ViewportObserver>::Target,
    <V as ViewportObserver>::Handle,
    <M as MotionPreference>::Handle,
>;

struct Shared<V: ViewportObserver, M: MotionPreference> {
    config: RevealConfig,
    viewport: V,
    motion: M,
    state: RefCell<StateOf<V, M>>,
}

impl<V, M> Shared<V, M>
where
    V: ViewportObserver + 'static,
    M: MotionPreference + 'static,
{
    /// Runs `f` against the state and notifies the consumer afterwards if
    /// visibility or the motion preference flipped. The borrow is released
    /// before the callbacks run.
    fn with_state<R>(&self, f: impl FnOnce(&mut StateOf<V, M>) -> R) -> R {
        let (result, visible_changed, motion_changed) = {
            let mut state = self.state.borrow_mut();
            let (visible_before, reduced_before) = (state.visible, state.reduced_motion);
            let result = f(&mut *state);
            let visible_changed = (state.visible != visible_before)
                .then(|| state.on_change.clone().map(|cb| (cb, state.visible)))
                .flatten();
            let motion_changed = (state.reduced_motion != reduced_before)
                .then(|| state.on_motion_change.clone().map(|cb| (cb, state.reduced_motion)))
                .flatten();
            (result, visible_changed, motion_changed)
        };
        if let Some((cb, reduced)) = motion_changed {
            cb.emit(reduced);
        }
        if let Some((cb, visible)) = visible_changed {
            cb.emit(visible);
        }
        result
    }

    fn meets_threshold(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.config.threshold
    }

    fn ensure_motion_subscription(self: &Rc<Self>) {
        let epoch = {
            let state = self.state.borrow();
            if state.motion.is_some() {
                return;
            }
            state.motion_gen
        };

        let weak: Weak<Self> = Rc::downgrade(self);
        let on_change = Callback::from(move |reduced: bool| {
            if let Some(shared) = weak.upgrade() {
                shared.on_motion_change(epoch, reduced);
            }
        });

        match self.motion.subscribe(on_change) {
            Ok(handle) => {
                let stale = self.with_state(|s| {
                    if s.motion_gen == epoch && s.target.is_some() {
                        s.motion = Some(handle);
                        None
                    } else {
                        Some(handle)
                    }
                });
                drop(stale);
            }
            Err(e) => warn!("reveal: motion preference changes unavailable: {}", e),
        }
    }

    fn read_reduced_motion(&self) -> bool {
        match self.motion.prefers_reduced_motion() {
            Ok(reduced) => reduced,
            Err(e) => {
                warn!("reveal: assuming motion is not reduced: {}", e);
                false
            }
        }
    }

    fn observe(self: &Rc<Self>) {
        let (target, epoch) = {
            let state = self.state.borrow();
            match &state.target {
                Some(target) => (target.clone(), state.intersection_gen),
                None => return,
            }
        };

        let weak: Weak<Self> = Rc::downgrade(self);
        let on_ratio = Callback::from(move |ratio: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_ratio(epoch, ratio);
            }
        });

        match self.viewport.observe(&target, self.config.threshold, on_ratio) {
            Ok(handle) => {
                let stale = self.with_state(|s| {
                    if s.intersection_gen == epoch && s.target.is_some() {
                        s.intersection = Some(handle);
                        None
                    } else {
                        Some(handle)
                    }
                });
                drop(stale);
            }
            Err(e) => {
                warn!("reveal: showing content without animation: {}", e);
                self.with_state(|s| {
                    s.failed_open = true;
                    s.visible = true;
                    s.phase = RevealPhase::Visible { latched: true };
                });
            }
        }
    }

    fn on_ratio(&self, epoch: u64, ratio: f64) {
        let once = self.config.once;
        let intersecting = self.meets_threshold(ratio);
        let stale = self.with_state(|s| {
            if s.intersection_gen != epoch || s.target.is_none() || s.reduced_motion {
                return None;
            }
            if intersecting {
                s.visible = true;
                if once {
                    s.phase = RevealPhase::Visible { latched: true };
                    s.intersection_gen += 1;
                    return s.intersection.take();
                }
                s.phase = RevealPhase::Visible { latched: false };
            } else if !once {
                s.visible = false;
                if s.phase != RevealPhase::Observing {
                    s.phase = RevealPhase::Hidden;
                }
            }
            None
        });
        drop(stale);
    }

    fn on_motion_change(self: &Rc<Self>, epoch: u64, reduced: bool) {
        let once = self.config.once;
        let (stale, reobserve) = self.with_state(|s| {
            if s.motion_gen != epoch || s.target.is_none() {
                return (None, false);
            }
            s.reduced_motion = reduced;
            if reduced {
                s.visible = true;
                s.phase = RevealPhase::Visible { latched: true };
                s.intersection_gen += 1;
                return (s.intersection.take(), false);
            }
            if once || s.failed_open {
                return (None, false);
            }
            s.visible = false;
            s.phase = RevealPhase::Observing;
            s.intersection_gen += 1;
            (s.intersection.take(), true)
        });
        drop(stale);
        debug!("reveal: reduced motion is now {}", reduced);
        if reobserve {
            self.observe();
        }
    }
}

/// Drives one element's scroll reveal.
///
/// The controller owns at most one intersection subscription and one
/// motion-preference subscription. Both are closed by [`teardown`], or
/// when the controller is dropped.
///
/// [`teardown`]: RevealController::teardown
pub struct RevealController<V, M>
where
    V: ViewportObserver + 'static,
    M: MotionPreference + 'static,
{
    shared: Rc<Shared<V, M>>,
}

impl<V, M> RevealController<V, M>
where
    V: ViewportObserver + 'static,
    M: MotionPreference + 'static,
{
    pub fn new(config: RevealConfig, viewport: V, motion: M) -> Self {
        if cfg!(debug_assertions) && !(0.0..=1.0).contains(&config.threshold) {
            warn!("reveal: threshold {} is outside [0, 1]", config.threshold);
        }

        let state = State {
            target: None,
            phase: RevealPhase::Unattached,
            visible: false,
            reduced_motion: false,
            failed_open: false,
            intersection: None,
            motion: None,
            intersection_gen: 0,
            motion_gen: 0,
            on_change: None,
            on_motion_change: None,
        };
        Self {
            shared: Rc::new(Shared {
                config,
                viewport,
                motion,
                state: RefCell::new(state),
            }),
        }
    }

    /// Notifies `on_change` with the new value whenever visibility flips.
    pub fn with_on_change(self, on_change: Callback<bool>) -> Self {
        self.shared.state.borrow_mut().on_change = Some(on_change);
        self
    }

    /// Notifies `on_motion_change` whenever the reduced-motion preference
    /// seen by this controller flips, including the read made on `attach`.
    pub fn with_on_motion_change(self, on_motion_change: Callback<bool>) -> Self {
        self.shared.state.borrow_mut().on_motion_change = Some(on_motion_change);
        self
    }

    pub fn attach(&self, target: V::Target) {
        let shared = &self.shared;
        let stale = shared.with_state(|s| {
            s.intersection_gen += 1;
            s.target = Some(target);
            s.intersection.take()
        });
        drop(stale);

        shared.ensure_motion_subscription();
        let reduced = shared.read_reduced_motion();
        let once = shared.config.once;

        let should_observe = shared.with_state(|s| {
            s.reduced_motion = reduced;
            if reduced || s.failed_open || (once && s.visible) {
                s.visible = true;
                s.phase = RevealPhase::Visible { latched: true };
                return false;
            }
            s.phase = if s.visible {
                RevealPhase::Visible { latched: false }
            } else {
                RevealPhase::Observing
            };
            true
        });
        debug!(
            "reveal: attached (reduced motion: {}, observing: {})",
            reduced, should_observe
        );

        if should_observe {
            shared.observe();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shared.state.borrow().visible
    }

    pub fn phase(&self) -> RevealPhase {
        self.shared.state.borrow().phase
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.shared.state.borrow().reduced_motion
    }

    pub fn config(&self) -> &RevealConfig {
        &self.shared.config
    }

    /// Closes both subscriptions. Safe to call repeatedly or before `attach`.
    pub fn teardown(&self) {
        let (intersection, motion) = self.shared.with_state(|s| {
            s.intersection_gen += 1;
            s.motion_gen += 1;
            s.target = None;
            s.phase = RevealPhase::Unattached;
            (s.intersection.take(), s.motion.take())
        });
        if intersection.is_some() || motion.is_some() {
            debug!("reveal: torn down");
        }
        drop(intersection);
        drop(motion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::platform::PlatformError;
    use std::cell::Cell;

    struct Registration<T> {
        callback: Callback<T>,
        live: Rc<Cell<bool>>,
    }

    pub struct FakeHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    fn register<T>(list: &RefCell<Vec<Registration<T>>>, callback: Callback<T>) -> FakeHandle {
        let live = Rc::new(Cell::new(true));
        list.borrow_mut().push(Registration {
            callback,
            live: live.clone(),
        });
        FakeHandle { live }
    }

    fn deliver<T: Clone + 'static>(list: &RefCell<Vec<Registration<T>>>, value: T, include_dead: bool) {
        let callbacks: Vec<_> = list
            .borrow()
            .iter()
            .filter(|r| include_dead || r.live.get())
            .map(|r| r.callback.clone())
            .collect();
        for cb in callbacks {
            cb.emit(value.clone());
        }
    }

    fn live_count<T>(list: &RefCell<Vec<Registration<T>>>) -> usize {
        list.borrow().iter().filter(|r| r.live.get()).count()
    }

    #[derive(Clone, Default)]
    struct FakeViewport {
        unsupported: bool,
        observed: Rc<RefCell<Vec<(&'static str, f64)>>>,
        registrations: Rc<RefCell<Vec<Registration<f64>>>>,
    }

    impl FakeViewport {
        fn report(&self, ratio: f64) {
            deliver(&self.registrations, ratio, false);
        }

        fn report_late(&self, ratio: f64) {
            deliver(&self.registrations, ratio, true);
        }

        fn registrations(&self) -> usize {
            self.registrations.borrow().len()
        }

        fn live(&self) -> usize {
            live_count(&self.registrations)
        }
    }

    impl ViewportObserver for FakeViewport {
        type Target = &'static str;
        type Handle = FakeHandle;

        fn observe(
            &self,
            target: &&'static str,
            threshold: f64,
            on_ratio: Callback<f64>,
        ) -> Result<FakeHandle, PlatformError> {
            if self.unsupported {
                return Err(PlatformError::Unsupported("IntersectionObserver"));
            }
            self.observed.borrow_mut().push((*target, threshold));
            Ok(register(&self.registrations, on_ratio))
        }
    }

    #[derive(Clone, Default)]
    struct FakeMotion {
        unsupported: bool,
        reduced: Rc<Cell<bool>>,
        registrations: Rc<RefCell<Vec<Registration<bool>>>>,
    }

    impl FakeMotion {
        fn reduced() -> Self {
            let motion = Self::default();
            motion.reduced.set(true);
            motion
        }

        fn set(&self, reduced: bool) {
            self.reduced.set(reduced);
            deliver(&self.registrations, reduced, false);
        }

        fn set_late(&self, reduced: bool) {
            self.reduced.set(reduced);
            deliver(&self.registrations, reduced, true);
        }

        fn live(&self) -> usize {
            live_count(&self.registrations)
        }
    }

    impl MotionPreference for FakeMotion {
        type Handle = FakeHandle;

        fn prefers_reduced_motion(&self) -> Result<bool, PlatformError> {
            if self.unsupported {
                return Err(PlatformError::Unsupported("matchMedia"));
            }
            Ok(self.reduced.get())
        }

        fn subscribe(&self, on_change: Callback<bool>) -> Result<FakeHandle, PlatformError> {
            if self.unsupported {
                return Err(PlatformError::Unsupported("matchMedia"));
            }
            Ok(register(&self.registrations, on_change))
        }
    }

    fn controller(
        config: RevealConfig,
        viewport: &FakeViewport,
        motion: &FakeMotion,
    ) -> RevealController<FakeViewport, FakeMotion> {
        RevealController::new(config, viewport.clone(), motion.clone())
    }

    fn repeating() -> RevealConfig {
        RevealConfig {
            once: false,
            ..RevealConfig::default()
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = RevealConfig::default();
        assert_eq!(config.animation, AnimationKind::FadeUp);
        assert_eq!(config.duration_ms, 900);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.threshold, 0.2);
        assert!(config.once);
    }

    #[test]
    fn config_fields_are_optional_in_json() {
        let config: RevealConfig =
            serde_json::from_str(r#"{"animation": "zoom-in", "once": false}"#).unwrap();
        assert_eq!(config.animation, AnimationKind::ZoomIn);
        assert!(!config.once);
        assert_eq!(config.duration_ms, 900);
        assert_eq!(config.threshold, 0.2);
    }

    #[test]
    fn once_latches_on_first_intersection() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);

        reveal.attach("section");
        assert_eq!(reveal.phase(), RevealPhase::Observing);
        assert!(!reveal.is_visible());
        assert_eq!(viewport.observed.borrow().as_slice(), &[("section", 0.2)]);

        viewport.report(0.25);
        assert!(reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Visible { latched: true });
        assert_eq!(viewport.live(), 0);

        viewport.report_late(0.0);
        assert!(reveal.is_visible());
    }

    #[test]
    fn repeating_reveal_toggles_with_viewport() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);
        reveal.attach("section");

        viewport.report(0.3);
        assert!(reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Visible { latched: false });

        viewport.report(0.0);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Hidden);

        viewport.report(0.5);
        assert!(reveal.is_visible());
        assert_eq!(viewport.live(), 1);
    }

    #[test]
    fn initial_empty_report_keeps_observing() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);
        reveal.attach("section");

        viewport.report(0.0);
        assert_eq!(reveal.phase(), RevealPhase::Observing);
        assert!(!reveal.is_visible());
    }

    #[test]
    fn reduced_motion_at_attach_shows_without_observing() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::reduced();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);

        reveal.attach("section");
        assert!(reveal.is_visible());
        assert!(reveal.is_reduced_motion());
        assert_eq!(reveal.phase(), RevealPhase::Visible { latched: true });
        assert_eq!(viewport.registrations(), 0);
    }

    #[test]
    fn reduced_motion_shows_for_every_kind() {
        for animation in [
            AnimationKind::FadeUp,
            AnimationKind::FadeDown,
            AnimationKind::FadeLeft,
            AnimationKind::FadeRight,
            AnimationKind::ZoomIn,
        ] {
            for once in [true, false] {
                let viewport = FakeViewport::default();
                let motion = FakeMotion::reduced();
                let config = RevealConfig {
                    animation,
                    once,
                    ..RevealConfig::default()
                };
                let reveal = controller(config, &viewport, &motion);
                reveal.attach("section");
                assert!(reveal.is_visible(), "{:?} once={}", animation, once);
            }
        }
    }

    #[test]
    fn switching_to_reduced_motion_reveals_and_stops_observing() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);
        reveal.attach("section");
        assert!(!reveal.is_visible());
        assert_eq!(viewport.live(), 1);

        motion.set(true);
        assert!(reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Visible { latched: true });
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn once_stays_visible_when_reduced_motion_is_turned_off() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);
        reveal.attach("section");

        motion.set(true);
        motion.set(false);
        assert!(reveal.is_visible());
        assert_eq!(viewport.live(), 0);
        assert_eq!(viewport.registrations(), 1);
    }

    #[test]
    fn repeating_resumes_observing_when_reduced_motion_is_turned_off() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);
        reveal.attach("section");

        motion.set(true);
        assert!(reveal.is_visible());
        assert_eq!(viewport.live(), 0);

        motion.set(false);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Observing);
        assert_eq!(viewport.live(), 1);

        viewport.report(0.4);
        assert!(reveal.is_visible());
    }

    #[test]
    fn threshold_is_respected() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let config = RevealConfig {
            threshold: 0.5,
            ..RevealConfig::default()
        };
        let reveal = controller(config, &viewport, &motion);
        reveal.attach("section");

        viewport.report(0.4);
        assert!(!reveal.is_visible());
        viewport.report(0.6);
        assert!(reveal.is_visible());
    }

    #[test]
    fn ratio_just_below_threshold_stays_hidden() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);
        reveal.attach("section");

        viewport.report(0.1999);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Observing);
        viewport.report(0.2);
        assert!(reveal.is_visible());
    }

    #[test]
    fn motion_preference_flips_are_reported() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reveal = controller(repeating(), &viewport, &motion).with_on_motion_change({
            let seen = seen.clone();
            Callback::from(move |reduced| seen.borrow_mut().push(reduced))
        });
        reveal.attach("section");
        assert!(seen.borrow().is_empty());

        motion.set(true);
        motion.set(true);
        motion.set(false);
        assert_eq!(seen.borrow().as_slice(), &[true, false]);

        reveal.teardown();
        motion.set_late(true);
        assert_eq!(seen.borrow().as_slice(), &[true, false]);
    }

    #[test]
    fn reduced_read_on_attach_is_reported() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::reduced();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reveal = controller(RevealConfig::default(), &viewport, &motion).with_on_motion_change({
            let seen = seen.clone();
            Callback::from(move |reduced| seen.borrow_mut().push(reduced))
        });
        reveal.attach("section");
        assert_eq!(seen.borrow().as_slice(), &[true]);
        assert!(reveal.is_visible());
    }

    #[test]
    fn teardown_is_idempotent() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);

        reveal.teardown();
        assert_eq!(reveal.phase(), RevealPhase::Unattached);

        reveal.attach("section");
        viewport.report(0.9);
        reveal.teardown();
        let after_first = (reveal.is_visible(), reveal.phase());
        reveal.teardown();
        assert_eq!((reveal.is_visible(), reveal.phase()), after_first);
        assert_eq!(viewport.live(), 0);
        assert_eq!(motion.live(), 0);
    }

    #[test]
    fn late_callbacks_after_teardown_are_ignored() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);
        reveal.attach("section");
        reveal.teardown();

        assert!(!reveal.is_visible());
        viewport.report_late(1.0);
        assert!(!reveal.is_visible());
        motion.set_late(true);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Unattached);
    }

    #[test]
    fn reattach_replaces_previous_subscription() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);

        reveal.attach("first");
        reveal.attach("second");
        assert_eq!(viewport.registrations(), 2);
        assert_eq!(viewport.live(), 1);
        assert_eq!(motion.live(), 1);

        let changes = Rc::new(Cell::new(0));
        let reveal = reveal.with_on_change({
            let changes = changes.clone();
            Callback::from(move |_| changes.set(changes.get() + 1))
        });
        viewport.report_late(0.8);
        assert_eq!(changes.get(), 1);
        assert!(reveal.is_visible());
    }

    #[test]
    fn missing_intersection_primitive_fails_open() {
        let viewport = FakeViewport {
            unsupported: true,
            ..FakeViewport::default()
        };
        let motion = FakeMotion::default();
        let reveal = controller(repeating(), &viewport, &motion);

        reveal.attach("section");
        assert!(reveal.is_visible());
        assert_eq!(reveal.phase(), RevealPhase::Visible { latched: true });

        motion.set(true);
        motion.set(false);
        assert!(reveal.is_visible());
    }

    #[test]
    fn missing_motion_primitive_observes_normally() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion {
            unsupported: true,
            ..FakeMotion::default()
        };
        let reveal = controller(RevealConfig::default(), &viewport, &motion);

        reveal.attach("section");
        assert!(!reveal.is_visible());
        assert!(!reveal.is_reduced_motion());
        assert_eq!(viewport.live(), 1);
        viewport.report(0.3);
        assert!(reveal.is_visible());
    }

    #[test]
    fn on_change_fires_once_per_flip() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reveal = controller(repeating(), &viewport, &motion).with_on_change({
            let seen = seen.clone();
            Callback::from(move |visible| seen.borrow_mut().push(visible))
        });
        reveal.attach("section");

        viewport.report(0.3);
        viewport.report(0.6);
        viewport.report(0.0);
        viewport.report(0.5);
        assert_eq!(seen.borrow().as_slice(), &[true, false, true]);
    }

    #[test]
    fn dropping_controller_releases_subscriptions() {
        let viewport = FakeViewport::default();
        let motion = FakeMotion::default();
        let reveal = controller(RevealConfig::default(), &viewport, &motion);
        reveal.attach("section");
        drop(reveal);

        assert_eq!(viewport.live(), 0);
        assert_eq!(motion.live(), 0);
        viewport.report_late(1.0);
    }
}
