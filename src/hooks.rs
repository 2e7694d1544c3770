use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::loading::{LoadingWatch, Schedule};
use crate::reveal::{RevealController, RevealWatch, Viewport};
use crate::typewriter::Typewriter;

/// The browser window: measured with `getBoundingClientRect`, listened to for `scroll`.
struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Listener = (Window, Closure<dyn FnMut()>);

    fn height(&self) -> Option<f64> {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn listen(&self, on_scroll: Rc<dyn Fn()>) -> Option<Self::Listener> {
        let window = web_sys::window()?;
        let scroll_callback = Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>);
        if let Err(err) = window.add_event_listener_with_callback(
            "scroll",
            scroll_callback.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to add scroll listener: {:?}", err);
        }
        Some((window, scroll_callback))
    }

    fn unlisten(&self, (window, scroll_callback): Self::Listener) {
        if let Err(err) = window.remove_event_listener_with_callback(
            "scroll",
            scroll_callback.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

struct BrowserTimer;

impl Schedule for BrowserTimer {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Visibility flag for the section the controller targets.
///
/// Checked once on mount and then on every window scroll until unmount. The listener is
/// removed in the effect destructor whether or not the section has revealed.
#[hook]
pub fn use_scroll_reveal(controller: RevealController) -> bool {
    let visible = use_state(|| controller.is_visible());

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |controller| {
                let target_id = controller.target_id();
                let watch = RevealWatch::start(BrowserViewport, controller.clone(), move || {
                    debug!("Section revealed: {}", target_id);
                    visible.set(true);
                });

                move || drop(watch)
            },
            controller,
        );
    }

    *visible
}

/// `true` until `delay_ms` has passed since mount, then `false` for good.
///
/// Unmounting first cancels the timer, so a torn-down section never gets the update.
#[hook]
pub fn use_loading_swap(delay_ms: u32) -> bool {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let delay_ms = *delay_ms;
                let watch = LoadingWatch::start(&BrowserTimer, delay_ms, move || {
                    debug!("Loading placeholders swapped after {}ms", delay_ms);
                    loading.set(false);
                });

                move || drop(watch)
            },
            delay_ms,
        );
    }

    *loading
}

pub enum TypewriterAction {
    Tick,
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Tick => {
                let mut next = (*self).clone();
                if next.tick() {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

/// Current text of the looping role line.
///
/// `roles` is read on first render only; the cycle can't be restarted from outside.
#[hook]
pub fn use_typewriter(roles: Vec<String>) -> String {
    let typewriter = use_reducer(move || Typewriter::new(roles));

    {
        let dispatcher = typewriter.dispatcher();
        let delay_ms = typewriter.next_delay_ms();
        use_effect_with_deps(
            move |_| {
                let timeout = BrowserTimer.after(delay_ms, Box::new(move || dispatcher.dispatch(TypewriterAction::Tick)));
                move || drop(timeout)
            },
            typewriter.position(),
        );
    }

    typewriter.text().to_string()
}
