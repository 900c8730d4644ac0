//! Link Tracking
//!
//! Click analytics for outbound links, abstracted so the browser can bind
//! Mixpanel and tests can bind a recorder.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Event label sent for every call-to-action click
pub const CLICKED_LINK: &str = "Clicked Link";

/// Analytics client able to instrument a link element
pub trait LinkTracker<E: ?Sized> {
    /// Attach click tracking for `event` to `element`
    fn track_links(&self, element: &E, event: &str);
}

impl<E: ?Sized, T: LinkTracker<E> + ?Sized> LinkTracker<E> for &T {
    fn track_links(&self, element: &E, event: &str) {
        (**self).track_links(element, event);
    }
}

impl<E: ?Sized, T: LinkTracker<E> + ?Sized> LinkTracker<E> for Rc<T> {
    fn track_links(&self, element: &E, event: &str) {
        (**self).track_links(element, event);
    }
}

impl<E: ?Sized, T: LinkTracker<E> + ?Sized> LinkTracker<E> for Arc<T> {
    fn track_links(&self, element: &E, event: &str) {
        (**self).track_links(element, event);
    }
}

/// Binds a tracker to element references as they appear.
///
/// Reference callbacks can fire more than once for the same element, and
/// with no element at all while mounting or unmounting. The binder skips
/// both cases so each element is instrumented exactly once.
///
/// Bound elements are held until the binder is dropped. Keep one binder per
/// component instance so detached elements go away with the component.
pub struct LinkBinder<E, T> {
    tracker: T,
    bound: RefCell<Vec<E>>,
}

impl<E, T> LinkBinder<E, T>
where
    E: PartialEq + Clone,
    T: LinkTracker<E>,
{
    pub const fn new(tracker: T) -> Self {
        Self {
            tracker,
            bound: RefCell::new(Vec::new()),
        }
    }

    /// Returns `true` when a new binding was registered
    pub fn bind(&self, element: Option<&E>, event: &str) -> bool {
        let Some(element) = element else {
            return false;
        };

        let mut bound = self.bound.borrow_mut();
        if bound.contains(element) {
            return false;
        }

        self.tracker.track_links(element, event);
        bound.push(element.clone());
        tracing::debug!(event, bound = bound.len(), "link tracking bound");
        true
    }

    pub const fn tracker(&self) -> &T {
        &self.tracker
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FakeLink(pub &'static str);

    /// Records every `track_links` call
    #[derive(Default)]
    pub struct RecordingTracker {
        pub calls: RefCell<Vec<(FakeLink, String)>>,
    }

    impl LinkTracker<FakeLink> for RecordingTracker {
        fn track_links(&self, element: &FakeLink, event: &str) {
            self.calls.borrow_mut().push((element.clone(), event.to_string()));
        }
    }
}
