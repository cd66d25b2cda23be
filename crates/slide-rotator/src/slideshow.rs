//! Slideshow Controller
//!
//! Drives a [`SlideSurface`] from a [`Rotation`] and keeps exactly one
//! auto-advance pending on a [`Scheduler`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::rotation::{Indicator, Rotation};
use crate::scheduler::Scheduler;

/// Callback handed to the surface; selects an absolute slide position
pub type SelectSlide = Rc<dyn Fn(usize)>;

/// Where slides and indicators are actually displayed
pub trait SlideSurface {
    /// Number of slides available
    fn slide_count(&self) -> usize;

    /// Hide every slide
    fn hide_all(&self);

    /// Show the slide at a 1-based position
    fn show(&self, position: usize);

    /// Replace the indicator controls. Each control must call `select` with its
    /// own indicator's position.
    fn render_indicators(&self, indicators: &[Indicator], select: SelectSlide);
}

struct State<S, T: Scheduler> {
    rotation: Rotation,
    surface: S,
    scheduler: T,
    delay: Duration,
    pending: Option<T::Handle>,
}

/// Auto-rotating slideshow.
///
/// Cloning yields another handle onto the same slideshow. Timer and indicator
/// callbacks only hold weak references, so rotation stops once every handle
/// is dropped.
pub struct Slideshow<S, T: Scheduler> {
    inner: Rc<RefCell<State<S, T>>>,
}

impl<S, T: Scheduler> Clone for Slideshow<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, T> Slideshow<S, T>
where
    S: SlideSurface + 'static,
    T: Scheduler + 'static,
{
    /// Show the first slide and arm the auto-advance timer.
    ///
    /// Returns `None` when the surface has no slides.
    pub fn start(surface: S, scheduler: T, delay: Duration) -> Option<Self> {
        let rotation = Rotation::new(surface.slide_count())?;
        log::debug!("slideshow: starting with {} slides", rotation.slide_count());
        let slideshow = Self {
            inner: Rc::new(RefCell::new(State {
                rotation,
                surface,
                scheduler,
                delay,
                pending: None,
            })),
        };
        slideshow.goto(1);
        Some(slideshow)
    }

    /// Current 1-based slide position
    pub fn current(&self) -> usize {
        self.inner.borrow().rotation.current()
    }

    /// Step to the next slide
    pub fn advance(&self) {
        self.transition(Rotation::advance);
    }

    /// Jump to an absolute slide position, wrapping out-of-range values
    pub fn goto(&self, n: isize) {
        self.transition(|rotation| rotation.goto(n));
    }

    fn transition(&self, step: impl FnOnce(&mut Rotation) -> usize) {
        let weak = Rc::downgrade(&self.inner);
        let mut state = self.inner.borrow_mut();
        let target = step(&mut state.rotation);

        state.surface.hide_all();
        let select: SelectSlide = {
            let weak = weak.clone();
            Rc::new(move |position| {
                if let Some(slideshow) = Self::upgrade(&weak) {
                    slideshow.goto(position as isize);
                }
            })
        };
        let indicators = state.rotation.indicators();
        state.surface.render_indicators(&indicators, select);
        state.surface.show(target);

        if let Some(handle) = state.pending.take() {
            state.scheduler.cancel(handle);
        }
        let delay = state.delay;
        let handle = state.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(slideshow) = Self::upgrade(&weak) {
                    slideshow.advance();
                }
            }),
        );
        state.pending = Some(handle);
    }

    fn upgrade(weak: &Weak<RefCell<State<S, T>>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}
