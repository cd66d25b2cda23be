//! DOM Slide Surface
//!
//! Shows and hides existing `.slide` elements and rebuilds the dot indicators
//! inside the indicator container.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::rotation::Indicator;
use crate::slideshow::{SelectSlide, SlideSurface};

const DOT_CLASS: &str = "dot";
const ACTIVE_DOT_CLASS: &str = "dot active-dot";

#[derive(Default)]
struct DotHandlers {
    live: Vec<Closure<dyn FnMut()>>,
    /// Previous generation. A click handler rebuilds the dots while it is
    /// still running, so its closure must outlive one rebuild.
    retired: Vec<Closure<dyn FnMut()>>,
}

/// Slides and indicator container found in the current document
pub struct DomSlides {
    document: Document,
    slides: Vec<HtmlElement>,
    dots: Element,
    handlers: RefCell<DotHandlers>,
}

impl DomSlides {
    /// Look up slides by class name and the indicator container by selector.
    ///
    /// Returns `None` if there are no slides or no container.
    pub fn find(slide_class: &str, dots_selector: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let collection = document.get_elements_by_class_name(slide_class);
        let slides: Vec<HtmlElement> = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        if slides.is_empty() {
            log::debug!("slideshow: no elements with class '{}'", slide_class);
            return None;
        }

        let Some(dots) = document.query_selector(dots_selector).ok().flatten() else {
            log::debug!("slideshow: no indicator container '{}'", dots_selector);
            return None;
        };

        Some(Self {
            document,
            slides,
            dots,
            handlers: RefCell::default(),
        })
    }

    fn set_display(slide: &HtmlElement, value: &str) {
        if let Err(e) = slide.style().set_property("display", value) {
            log::warn!("slideshow: failed to set display: {:?}", e);
        }
    }

    fn make_dot(&self, indicator: &Indicator, select: &SelectSlide) -> Option<(Element, Closure<dyn FnMut()>)> {
        let dot = self.document.create_element("span").ok()?;
        dot.set_class_name(if indicator.active { ACTIVE_DOT_CLASS } else { DOT_CLASS });

        let position = indicator.position;
        let select = select.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || select(position));
        dot.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        Some((dot, on_click))
    }
}

impl SlideSurface for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn hide_all(&self) {
        for slide in &self.slides {
            Self::set_display(slide, "none");
        }
    }

    fn show(&self, position: usize) {
        if let Some(slide) = position.checked_sub(1).and_then(|i| self.slides.get(i)) {
            Self::set_display(slide, "block");
        }
    }

    fn render_indicators(&self, indicators: &[Indicator], select: SelectSlide) {
        self.dots.set_inner_html("");

        let mut fresh = Vec::with_capacity(indicators.len());
        for indicator in indicators {
            let Some((dot, on_click)) = self.make_dot(indicator, &select) else {
                continue;
            };
            if self.dots.append_child(&dot).is_ok() {
                fresh.push(on_click);
            }
        }

        let handlers = &mut *self.handlers.borrow_mut();
        handlers.retired = std::mem::replace(&mut handlers.live, fresh);
    }
}
