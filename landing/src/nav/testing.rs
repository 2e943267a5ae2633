//! In-memory stand-ins for the browser viewport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;

use super::{BandCrossing, CenterBandObserver, NavError, RegionHandle, SectionId, Viewport};

/// A region that resolves to its own section id once mounted. Mounting is a
/// signal, so effects that resolve it with tracking re-run on mount.
#[derive(Debug, Clone, Copy)]
pub struct FakeRegion {
    id: SectionId,
    mounted: RwSignal<bool>,
}

impl FakeRegion {
    pub fn mounted(id: SectionId) -> Self {
        Self {
            id,
            mounted: RwSignal::new(true),
        }
    }

    pub fn unmounted(id: SectionId) -> Self {
        Self {
            id,
            mounted: RwSignal::new(false),
        }
    }

    pub fn mount(&self) {
        self.mounted.set(true);
    }
}

impl RegionHandle for FakeRegion {
    type Element = SectionId;

    fn resolve(&self) -> Option<SectionId> {
        self.mounted.get_untracked().then_some(self.id)
    }

    fn resolve_tracked(&self) -> Option<SectionId> {
        self.mounted.get().then_some(self.id)
    }
}

#[derive(Default)]
struct Host {
    no_observer: bool,
    callback: RefCell<Option<Box<dyn Fn(BandCrossing)>>>,
    observed: RefCell<Vec<SectionId>>,
    scrolls: RefCell<Vec<SectionId>>,
    observers: Cell<usize>,
    disconnects: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeViewport {
    host: Rc<Host>,
}

impl FakeViewport {
    pub fn without_observer() -> Self {
        Self {
            host: Rc::new(Host {
                no_observer: true,
                ..Host::default()
            }),
        }
    }

    /// Deliver a crossing the way the browser would: only for observed
    /// regions of a connected observer.
    pub fn cross(&self, crossing: BandCrossing) {
        if !self.host.observed.borrow().contains(&crossing.id) {
            return;
        }
        if let Some(callback) = self.host.callback.borrow().as_ref() {
            callback(crossing);
        }
    }

    pub fn observed(&self) -> Vec<SectionId> {
        self.host.observed.borrow().clone()
    }

    pub fn scrolls(&self) -> Vec<SectionId> {
        self.host.scrolls.borrow().clone()
    }

    /// How many observers were created.
    pub fn observers(&self) -> usize {
        self.host.observers.get()
    }

    pub fn disconnects(&self) -> usize {
        self.host.disconnects.get()
    }
}

impl Viewport for FakeViewport {
    type Element = SectionId;
    type Observer = FakeObserver;

    fn center_band_observer(
        &self,
        on_cross: Box<dyn Fn(BandCrossing)>,
    ) -> Result<FakeObserver, NavError> {
        if self.host.no_observer {
            return Err(NavError::ObserverUnavailable(
                "IntersectionObserver is not defined".into(),
            ));
        }
        *self.host.callback.borrow_mut() = Some(on_cross);
        self.host.observers.set(self.host.observers.get() + 1);
        Ok(FakeObserver {
            host: Rc::clone(&self.host),
        })
    }

    fn scroll_to_top(&self, element: &SectionId) {
        self.host.scrolls.borrow_mut().push(*element);
    }
}

pub struct FakeObserver {
    host: Rc<Host>,
}

impl CenterBandObserver for FakeObserver {
    type Element = SectionId;

    fn observe(&self, id: SectionId, element: &SectionId) {
        assert_eq!(id, *element, "observed element belongs to another section");
        self.host.observed.borrow_mut().push(id);
    }

    fn disconnect(&self) {
        self.host.callback.borrow_mut().take();
        self.host.observed.borrow_mut().clear();
        self.host
            .disconnects
            .set(self.host.disconnects.get() + 1);
    }
}
