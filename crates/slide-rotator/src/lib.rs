//! Slide Rotator
//!
//! Auto-rotating slideshow for static pages.
//! The rotation logic is DOM-free; [`DomSlides`] and [`TimeoutScheduler`] plug
//! it into the browser.

mod dom;
mod rotation;
mod scheduler;
mod slideshow;

pub use dom::DomSlides;
pub use rotation::{Indicator, Rotation};
pub use scheduler::{timer_millis, Scheduler, TimeoutScheduler, MAX_TIMER_MILLIS};
pub use slideshow::{SelectSlide, SlideSurface, Slideshow};

/// Slideshow wired to the live document and browser timers
pub type PageSlideshow = Slideshow<DomSlides, TimeoutScheduler>;
