// Browser-backed viewport: IntersectionObserver for tracking, scrollIntoView
// for navigation.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{BandCrossing, CenterBandObserver, NavError, RegionHandle, SectionId, Viewport};
use crate::config;

/// Handle to a rendered `<section>`; set by Leptos when the element mounts.
pub type SectionRef = NodeRef<html::Section>;

impl RegionHandle for NodeRef<html::Section> {
    type Element = HtmlElement;

    fn resolve(&self) -> Option<HtmlElement> {
        self.get_untracked()
    }

    fn resolve_tracked(&self) -> Option<HtmlElement> {
        self.get()
    }
}

type CrossingCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Element = HtmlElement;
    type Observer = DomObserver;

    fn center_band_observer(
        &self,
        on_cross: Box<dyn Fn(BandCrossing)>,
    ) -> Result<DomObserver, NavError> {
        let callback = CrossingCallback::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let dom_id = entry.target().id();
                    match dom_id.parse::<SectionId>() {
                        Ok(id) => on_cross(BandCrossing {
                            id,
                            entered: entry.is_intersecting(),
                        }),
                        Err(()) => tracing::trace!(%dom_id, "crossing from unknown element"),
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(config::CENTER_BAND_MARGIN);
        options.set_threshold(&JsValue::from_f64(config::CENTER_BAND_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| NavError::ObserverUnavailable(describe(&err)))?;

        Ok(DomObserver {
            observer,
            _callback: callback,
        })
    }

    fn scroll_to_top(&self, element: &HtmlElement) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// An `IntersectionObserver` together with the closure it calls back into.
/// The closure must outlive the observer.
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: CrossingCallback,
}

impl CenterBandObserver for DomObserver {
    type Element = HtmlElement;

    fn observe(&self, _id: SectionId, element: &HtmlElement) {
        self.observer.observe(element);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
