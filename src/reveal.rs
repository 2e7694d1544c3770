use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fraction of the viewport height a section's top edge has to rise above before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.75;

/// One-shot visibility flag for a single page section.
///
/// The flag only ever goes from hidden to visible. Once visible, further checks do nothing,
/// so the entrance animation runs once per mounted section.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealController {
    target_id: &'static str,
    threshold: f64,
    visible: bool,
}

impl RevealController {
    pub fn new(target_id: &'static str, initially_visible: bool) -> Self {
        Self {
            target_id,
            threshold: REVEAL_THRESHOLD,
            visible: initially_visible,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn target_id(&self) -> &'static str {
        self.target_id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one measurement of the section's top offset (relative to the viewport top).
    ///
    /// `None` means the element isn't in the document yet; that tick is skipped. Returns
    /// `true` only for the check that flips the section to visible.
    pub fn check(&mut self, top: Option<f64>, viewport_height: f64) -> bool {
        if self.visible {
            return false;
        }
        match top {
            Some(top) if top < viewport_height * self.threshold => {
                self.visible = true;
                true
            }
            _ => false,
        }
    }
}

/// Where a section is measured and where its scroll listener is attached.
pub trait Viewport {
    type Listener;

    fn height(&self) -> Option<f64>;
    fn section_top(&self, id: &str) -> Option<f64>;
    fn listen(&self, on_scroll: Rc<dyn Fn()>) -> Option<Self::Listener>;
    fn unlisten(&self, listener: Self::Listener);
}

/// A mounted section's reveal check.
///
/// `start` checks once, then registers the scroll listener. Dropping the watch removes the
/// listener, and any scroll callback still queued by the host afterwards does nothing.
pub struct RevealWatch<V: Viewport> {
    viewport: Rc<V>,
    listener: Option<V::Listener>,
    live: Rc<Cell<bool>>,
}

impl<V: Viewport + 'static> RevealWatch<V> {
    pub fn start(viewport: V, controller: RevealController, on_reveal: impl Fn() + 'static) -> Self {
        let viewport = Rc::new(viewport);
        let live = Rc::new(Cell::new(true));
        let initially_visible = controller.is_visible();
        let target_id = controller.target_id();

        let check: Rc<dyn Fn()> = {
            let viewport = Rc::downgrade(&viewport);
            let live = live.clone();
            let controller = RefCell::new(controller);
            Rc::new(move || {
                if !live.get() {
                    return;
                }
                let Some(viewport) = viewport.upgrade() else {
                    return;
                };
                let Some(height) = viewport.height() else {
                    return;
                };
                if controller.borrow_mut().check(viewport.section_top(target_id), height) {
                    on_reveal();
                }
            })
        };

        let listener = if initially_visible {
            None
        } else {
            // above-the-fold sections reveal without waiting for a scroll
            check();
            viewport.listen(check)
        };

        Self { viewport, listener, live }
    }
}

impl<V: Viewport> Drop for RevealWatch<V> {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(listener) = self.listener.take() {
            self.viewport.unlisten(listener);
        }
    }
}

/// Transition delay for the `index`th item of a staggered list.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn reveals_when_top_is_inside_zone() {
        let mut controller = RevealController::new("about", false);
        assert!(!controller.is_visible());

        assert!(controller.check(Some(0.5 * VIEWPORT), VIEWPORT));
        assert!(controller.is_visible());
    }

    #[test]
    fn stays_hidden_below_zone() {
        let mut controller = RevealController::new("about", false);

        assert!(!controller.check(Some(0.9 * VIEWPORT), VIEWPORT));
        assert!(!controller.is_visible());
    }

    #[test]
    fn top_exactly_on_threshold_does_not_reveal() {
        let mut controller = RevealController::new("footer", false);

        assert!(!controller.check(Some(0.75 * VIEWPORT), VIEWPORT));
        assert!(!controller.is_visible());
    }

    #[test]
    fn transitions_once() {
        let mut controller = RevealController::new("certifications", false);

        assert!(controller.check(Some(10.0), VIEWPORT));
        assert!(!controller.check(Some(10.0), VIEWPORT));
        // scrolling back out of the zone never hides it again
        assert!(!controller.check(Some(2.0 * VIEWPORT), VIEWPORT));
        assert!(controller.is_visible());
    }

    #[test]
    fn missing_element_is_skipped_and_retried() {
        let mut controller = RevealController::new("about", false);

        assert!(!controller.check(None, VIEWPORT));
        assert!(!controller.is_visible());
        assert!(controller.check(Some(100.0), VIEWPORT));
    }

    #[test]
    fn initially_visible_never_transitions() {
        let mut controller = RevealController::new("home", true);

        assert!(controller.is_visible());
        assert!(!controller.check(Some(0.0), VIEWPORT));
    }

    #[test]
    fn custom_threshold() {
        let mut controller = RevealController::new("about", false).with_threshold(0.5);

        assert!(!controller.check(Some(0.6 * VIEWPORT), VIEWPORT));
        assert!(controller.check(Some(0.4 * VIEWPORT), VIEWPORT));
        assert_eq!(controller.target_id(), "about");
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger_delay_ms(0, 200), 0);
        assert_eq!(stagger_delay_ms(2, 200), 400);
        assert_eq!(stagger_delay_ms(1, 100), 100);
    }

    type Callbacks = Rc<RefCell<Vec<Rc<dyn Fn()>>>>;

    #[derive(Default)]
    struct FakeViewport {
        top: Rc<Cell<Option<f64>>>,
        callbacks: Callbacks,
        events: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Viewport for FakeViewport {
        type Listener = usize;

        fn height(&self) -> Option<f64> {
            Some(VIEWPORT)
        }

        fn section_top(&self, _id: &str) -> Option<f64> {
            self.events.borrow_mut().push("measure");
            self.top.get()
        }

        fn listen(&self, on_scroll: Rc<dyn Fn()>) -> Option<usize> {
            self.events.borrow_mut().push("listen");
            let mut callbacks = self.callbacks.borrow_mut();
            callbacks.push(on_scroll);
            Some(callbacks.len() - 1)
        }

        fn unlisten(&self, listener: usize) {
            self.events.borrow_mut().push("unlisten");
            self.callbacks.borrow_mut().remove(listener);
        }
    }

    fn scroll(callbacks: &Callbacks) {
        let registered: Vec<Rc<dyn Fn()>> = callbacks.borrow().clone();
        for callback in registered {
            callback();
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn watch_reveals_on_mount_without_scrolling() {
        let viewport = FakeViewport::default();
        viewport.top.set(Some(0.5 * VIEWPORT));
        let events = viewport.events.clone();
        let (reveals, on_reveal) = counter();

        let _watch = RevealWatch::start(viewport, RevealController::new("about", false), on_reveal);

        assert_eq!(reveals.get(), 1);
        // the mount check measures before the listener exists
        assert_eq!(*events.borrow(), vec!["measure", "listen"]);
    }

    #[test]
    fn watch_reveals_once_on_scroll() {
        let viewport = FakeViewport::default();
        viewport.top.set(Some(0.9 * VIEWPORT));
        let top = viewport.top.clone();
        let callbacks = viewport.callbacks.clone();
        let (reveals, on_reveal) = counter();

        let _watch = RevealWatch::start(viewport, RevealController::new("footer", false), on_reveal);
        assert_eq!(reveals.get(), 0);

        top.set(Some(0.5 * VIEWPORT));
        scroll(&callbacks);
        scroll(&callbacks);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn dropped_watch_unlistens_and_ignores_late_scrolls() {
        let viewport = FakeViewport::default();
        viewport.top.set(Some(2.0 * VIEWPORT));
        let top = viewport.top.clone();
        let callbacks = viewport.callbacks.clone();
        let events = viewport.events.clone();
        let (reveals, on_reveal) = counter();

        let watch = RevealWatch::start(viewport, RevealController::new("certifications", false), on_reveal);
        let queued = callbacks.borrow()[0].clone();
        drop(watch);

        assert_eq!(events.borrow().last(), Some(&"unlisten"));
        assert!(callbacks.borrow().is_empty());

        top.set(Some(0.0));
        queued();
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn initially_visible_watch_never_listens() {
        let viewport = FakeViewport::default();
        let events = viewport.events.clone();
        let (reveals, on_reveal) = counter();

        let watch = RevealWatch::start(viewport, RevealController::new("home", true), on_reveal);
        drop(watch);

        // no measurement, no listener, and nothing to remove on drop
        assert!(events.borrow().is_empty());
        assert_eq!(reveals.get(), 0);
    }
}
