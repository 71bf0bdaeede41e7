use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;

/// Where the viewport sits relative to the nav threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Below,
    Above,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX {
            ScrollState::Above
        } else {
            ScrollState::Below
        }
    }

    pub fn is_above(self) -> bool {
        self == ScrollState::Above
    }
}

/// The host's vertical scroll signal.
pub trait ScrollSource {
    type Listener;

    /// Current vertical offset, if the host can report one.
    fn offset(&self) -> Option<f64>;

    /// Registers `on_scroll` to be called with the new offset on every scroll
    /// event. `None` means nothing was registered.
    fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<Self::Listener>;

    fn unlisten(&self, listener: Self::Listener);
}

/// Remembers the last reported state and only speaks up when it flips.
#[derive(Debug, Default)]
struct ThresholdWatch {
    last: Cell<ScrollState>,
}

impl ThresholdWatch {
    fn observe(&self, offset: f64) -> Option<ScrollState> {
        let next = ScrollState::from_offset(offset);
        (self.last.replace(next) != next).then_some(next)
    }
}

/// A live subscription to a [`ScrollSource`]. The listener is attached in
/// [`mount`](Self::mount) and detached when the tracker is dropped.
pub struct ScrollTracker<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> ScrollTracker<S> {
    /// Attaches to `source` and samples it once, so a position restored on
    /// reload is reported without waiting for a scroll event.
    /// `on_change` runs only when the threshold state flips.
    pub fn mount(source: S, on_change: impl Fn(ScrollState) + 'static) -> Self {
        let watch = ThresholdWatch::default();
        let on_offset: Rc<dyn Fn(f64)> = Rc::new(move |offset| {
            if let Some(state) = watch.observe(offset) {
                on_change(state);
            }
        });

        let listener = source.listen(Box::new({
            let on_offset = on_offset.clone();
            move |offset| on_offset(offset)
        }));
        if listener.is_some() {
            debug!("scroll listener attached");
        }
        if let Some(offset) = source.offset() {
            on_offset(offset);
        }

        Self { source, listener }
    }
}

impl<S: ScrollSource> Drop for ScrollTracker<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.unlisten(listener);
            debug!("scroll listener detached");
        }
    }
}

/// The browser window.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Listener = Closure<dyn Fn()>;

    fn offset(&self) -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }

    fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<Self::Listener> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Some(offset) = WindowScroll.offset() {
                on_scroll(offset);
            }
        });
        match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(callback),
            Err(err) => {
                warn!("could not attach scroll listener: {:?}", err);
                None
            }
        }
    }

    fn unlisten(&self, listener: Self::Listener) {
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("could not detach scroll listener: {:?}", err);
            }
        }
    }
}

/// Tracks whether the page has been scrolled past the nav threshold.
///
/// The window `scroll` listener lives exactly as long as the calling
/// component, and the component re-renders only when the state flips.
#[hook]
pub fn use_scrolled_past_threshold() -> bool {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = ScrollTracker::mount(WindowScroll, move |next| state.set(next));
                move || drop(tracker)
            },
            (),
        );
    }

    state.is_above()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorded {
        offset: Option<f64>,
        refuse: bool,
        handlers: Vec<Option<Box<dyn Fn(f64)>>>,
        attached: usize,
        detached: usize,
    }

    /// Shared handle so the test can keep driving the source after the
    /// tracker takes ownership of its copy.
    #[derive(Clone, Default)]
    struct RecordingScroll(Rc<RefCell<Recorded>>);

    impl RecordingScroll {
        fn at(offset: f64) -> Self {
            let source = Self::default();
            source.0.borrow_mut().offset = Some(offset);
            source
        }

        fn scroll_to(&self, offset: f64) {
            let recorded = self.0.borrow();
            for handler in recorded.handlers.iter().flatten() {
                handler(offset);
            }
        }

        fn attached(&self) -> usize {
            self.0.borrow().attached
        }

        fn detached(&self) -> usize {
            self.0.borrow().detached
        }
    }

    impl ScrollSource for RecordingScroll {
        type Listener = usize;

        fn offset(&self) -> Option<f64> {
            self.0.borrow().offset
        }

        fn listen(&self, on_scroll: Box<dyn Fn(f64)>) -> Option<usize> {
            let mut recorded = self.0.borrow_mut();
            if recorded.refuse {
                return None;
            }
            recorded.attached += 1;
            recorded.handlers.push(Some(on_scroll));
            Some(recorded.handlers.len() - 1)
        }

        fn unlisten(&self, listener: usize) {
            let mut recorded = self.0.borrow_mut();
            recorded.detached += 1;
            recorded.handlers[listener] = None;
        }
    }

    fn recording_changes() -> (Rc<RefCell<Vec<ScrollState>>>, impl Fn(ScrollState)) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        (changes, move |state| sink.borrow_mut().push(state))
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(ScrollState::from_offset(50.0), ScrollState::Below);
        assert_eq!(ScrollState::from_offset(51.0), ScrollState::Above);
        assert_eq!(ScrollState::from_offset(50.5), ScrollState::Above);
    }

    #[test]
    fn top_of_page_and_overscroll_are_below() {
        assert!(!ScrollState::from_offset(0.0).is_above());
        assert!(!ScrollState::from_offset(-12.0).is_above());
        assert!(ScrollState::from_offset(4_000.0).is_above());
    }

    #[test]
    fn holds_for_every_whole_pixel_offset() {
        for offset in 0..=1_000 {
            let offset = offset as f64;
            assert_eq!(ScrollState::from_offset(offset).is_above(), offset > 50.0);
        }
    }

    #[test]
    fn starts_below() {
        assert_eq!(ScrollState::default(), ScrollState::Below);
    }

    #[test]
    fn mount_attaches_once_and_drop_detaches() {
        let source = RecordingScroll::at(0.0);
        let (changes, on_change) = recording_changes();

        let tracker = ScrollTracker::mount(source.clone(), on_change);
        assert_eq!(source.attached(), 1);
        assert_eq!(source.detached(), 0);

        source.scroll_to(200.0);
        drop(tracker);
        assert_eq!(source.attached(), 1);
        assert_eq!(source.detached(), 1);

        source.scroll_to(0.0);
        assert_eq!(*changes.borrow(), vec![ScrollState::Above]);
    }

    #[test]
    fn repeated_samples_past_threshold_change_state_once() {
        let source = RecordingScroll::at(0.0);
        let (changes, on_change) = recording_changes();
        let _tracker = ScrollTracker::mount(source.clone(), on_change);

        source.scroll_to(60.0);
        source.scroll_to(70.0);
        assert_eq!(*changes.borrow(), vec![ScrollState::Above]);

        source.scroll_to(50.0);
        source.scroll_to(10.0);
        assert_eq!(*changes.borrow(), vec![ScrollState::Above, ScrollState::Below]);
    }

    #[test]
    fn mount_reports_restored_position() {
        let source = RecordingScroll::at(900.0);
        let (changes, on_change) = recording_changes();
        let _tracker = ScrollTracker::mount(source.clone(), on_change);

        assert_eq!(*changes.borrow(), vec![ScrollState::Above]);
    }

    #[test]
    fn mount_at_top_reports_nothing() {
        let source = RecordingScroll::at(0.0);
        let (changes, on_change) = recording_changes();
        let _tracker = ScrollTracker::mount(source.clone(), on_change);

        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn refused_subscription_is_not_detached() {
        let source = RecordingScroll::default();
        source.0.borrow_mut().refuse = true;
        let (_changes, on_change) = recording_changes();

        drop(ScrollTracker::mount(source.clone(), on_change));
        assert_eq!(source.attached(), 0);
        assert_eq!(source.detached(), 0);
    }
}
