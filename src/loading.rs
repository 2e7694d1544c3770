use std::cell::Cell;
use std::rc::Rc;

/// Placeholder-to-content swap. Goes `Loading` to `Loaded` at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingSwap {
    Loading,
    Loaded,
    /// The owner went away before the delay ran out.
    Cancelled,
}

impl LoadingSwap {
    pub fn is_loading(self) -> bool {
        self == LoadingSwap::Loading
    }

    /// Returns `true` only for the call that ends loading.
    pub fn finish(&mut self) -> bool {
        if self.is_loading() {
            *self = LoadingSwap::Loaded;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        if self.is_loading() {
            *self = LoadingSwap::Cancelled;
        }
    }
}

/// Runs a task once after a delay. Dropping the returned handle cancels the task.
pub trait Schedule {
    type Handle;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// A pending loading swap owned by a mounted section.
pub struct LoadingWatch<S: Schedule> {
    state: Rc<Cell<LoadingSwap>>,
    _timer: S::Handle,
}

impl<S: Schedule> LoadingWatch<S> {
    pub fn start(scheduler: &S, delay_ms: u32, on_loaded: impl FnOnce() + 'static) -> Self {
        let state = Rc::new(Cell::new(LoadingSwap::Loading));
        let timer = {
            let state = state.clone();
            scheduler.after(
                delay_ms,
                Box::new(move || {
                    let mut swap = state.get();
                    if swap.finish() {
                        state.set(swap);
                        on_loaded();
                    }
                }),
            )
        };

        Self { state, _timer: timer }
    }
}

impl<S: Schedule> Drop for LoadingWatch<S> {
    fn drop(&mut self) {
        let mut swap = self.state.get();
        swap.cancel();
        self.state.set(swap);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Pending = Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>;

    #[derive(Default)]
    struct FakeScheduler {
        pending: Pending,
        cancels: Rc<Cell<u32>>,
    }

    struct FakeHandle(Rc<Cell<u32>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl Schedule for FakeScheduler {
        type Handle = FakeHandle;

        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeHandle {
            self.pending.borrow_mut().push((delay_ms, task));
            FakeHandle(self.cancels.clone())
        }
    }

    /// Runs every task due by `elapsed_ms`, whether or not its handle was dropped.
    fn run_due(pending: &Pending, elapsed_ms: u32) {
        let due = {
            let mut pending = pending.borrow_mut();
            let (due, later): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(delay, _)| *delay <= elapsed_ms);
            *pending = later;
            due
        };
        for (_, task) in due {
            task();
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn swap_finishes_once() {
        let mut swap = LoadingSwap::Loading;
        assert!(swap.is_loading());

        assert!(swap.finish());
        assert!(!swap.finish());
        assert_eq!(swap, LoadingSwap::Loaded);
    }

    #[test]
    fn cancelled_swap_never_finishes() {
        let mut swap = LoadingSwap::Loading;
        swap.cancel();

        assert!(!swap.finish());
        assert!(!swap.is_loading());
        assert_eq!(swap, LoadingSwap::Cancelled);
    }

    #[test]
    fn watch_loads_when_delay_elapses() {
        let scheduler = FakeScheduler::default();
        let (loaded, on_loaded) = counter();

        let _watch = LoadingWatch::start(&scheduler, 1_000, on_loaded);

        run_due(&scheduler.pending, 999);
        assert_eq!(loaded.get(), 0);

        run_due(&scheduler.pending, 1_000);
        assert_eq!(loaded.get(), 1);
        assert_eq!(scheduler.cancels.get(), 0);
    }

    #[test]
    fn dropped_watch_cancels_and_ignores_late_timer() {
        let scheduler = FakeScheduler::default();
        let (loaded, on_loaded) = counter();

        let watch = LoadingWatch::start(&scheduler, 1_000, on_loaded);
        drop(watch);
        assert_eq!(scheduler.cancels.get(), 1);

        run_due(&scheduler.pending, 5_000);
        assert_eq!(loaded.get(), 0);
    }
}
