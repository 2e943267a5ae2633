//! Keeps the active section in sync with what sits at the viewport's center.

use std::cell::RefCell;

use super::{
    ActiveSection, CenterBandObserver, RegionHandle, Section, SectionId, SectionRegistry, Viewport,
};

#[derive(Debug, Clone, Copy)]
pub struct ViewportTracker<V> {
    viewport: V,
    active: ActiveSection,
}

impl<V: Viewport> ViewportTracker<V> {
    pub fn new(viewport: V, active: ActiveSection) -> Self {
        Self { viewport, active }
    }

    /// Begin observing every region of `registry`.
    ///
    /// Regions that are not mounted yet are skipped and remembered as
    /// pending; see [`TrackerSubscription::observe_pending`]. If the host
    /// has no observer support the returned subscription is inert and the
    /// active section simply stays where it is.
    pub fn attach<H>(&self, registry: &SectionRegistry<H>) -> TrackerSubscription<V::Observer>
    where
        H: RegionHandle<Element = V::Element>,
    {
        let active = self.active;
        let observer = match self
            .viewport
            .center_band_observer(Box::new(move |crossing| active.apply(crossing)))
        {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!(%err, "section tracking disabled");
                return TrackerSubscription::inert();
            }
        };

        let subscription = TrackerSubscription {
            observer: RefCell::new(Some(observer)),
            pending: RefCell::new(Vec::new()),
        };
        let observed = subscription.observe_sections(registry.iter());
        tracing::debug!(
            observed,
            total = registry.len(),
            "section tracking attached"
        );
        subscription
    }
}

/// Live observation started by [`ViewportTracker::attach`].
///
/// Dropping the subscription detaches it.
pub struct TrackerSubscription<O: CenterBandObserver> {
    observer: RefCell<Option<O>>,
    pending: RefCell<Vec<SectionId>>,
}

impl<O: CenterBandObserver> TrackerSubscription<O> {
    fn inert() -> Self {
        Self {
            observer: RefCell::new(None),
            pending: RefCell::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Sections skipped because their region could not be resolved.
    pub fn pending(&self) -> Vec<SectionId> {
        self.pending.borrow().clone()
    }

    /// Retry the sections that were unmounted on the last attempt. Returns
    /// how many of them are observed now.
    pub fn observe_pending<H>(&self, registry: &SectionRegistry<H>) -> usize
    where
        H: RegionHandle<Element = O::Element>,
    {
        let pending = self.pending();
        if pending.is_empty() {
            return 0;
        }
        self.observe_sections(
            registry
                .iter()
                .filter(|section| pending.contains(&section.id)),
        )
    }

    /// Stop observing and release the observer.
    pub fn detach(&self) {
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
            tracing::debug!("section tracking detached");
        }
        self.pending.borrow_mut().clear();
    }

    fn observe_sections<'a, H>(&self, sections: impl Iterator<Item = &'a Section<H>>) -> usize
    where
        H: RegionHandle<Element = O::Element> + 'a,
    {
        let observer = self.observer.borrow();
        let Some(observer) = observer.as_ref() else {
            return 0;
        };

        let mut pending = self.pending.borrow_mut();
        let mut observed = 0;
        for section in sections {
            match section.region.resolve() {
                Some(element) => {
                    observer.observe(section.id, &element);
                    pending.retain(|id| *id != section.id);
                    observed += 1;
                }
                None => {
                    tracing::debug!(section = %section.id, "region not mounted, skipping");
                    if !pending.contains(&section.id) {
                        pending.push(section.id);
                    }
                }
            }
        }
        observed
    }
}

impl<O: CenterBandObserver> Drop for TrackerSubscription<O> {
    fn drop(&mut self) {
        self.detach();
    }
}
