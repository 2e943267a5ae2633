//! Page-level wiring of the navigation core into Leptos.

use leptos::prelude::*;

use super::dom::{BrowserViewport, SectionRef};
use super::{
    ActiveSection, MenuOverlay, RegionHandle, ScrollNavigator, SectionId, SectionRegistry,
    TrackerSubscription, Viewport, ViewportTracker,
};

pub type PageRegistry = SectionRegistry<SectionRef>;

/// Navigation state shared by every control on the page. Created once by
/// the page root and handed down through context.
///
/// Registry and viewport live in local storage, so the value stays `Copy`
/// and context-safe whatever `V` and `H` are.
pub struct Navigation<V = BrowserViewport, H = SectionRef> {
    registry: StoredValue<SectionRegistry<H>, LocalStorage>,
    viewport: StoredValue<V, LocalStorage>,
    pub active: ActiveSection,
    pub menu: MenuOverlay,
}

impl<V, H> Clone for Navigation<V, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, H> Copy for Navigation<V, H> {}

impl Navigation {
    pub fn new(registry: PageRegistry) -> Self {
        Self::with_viewport(BrowserViewport, registry)
    }
}

impl<V, H> Navigation<V, H>
where
    V: Viewport + Clone + 'static,
    H: RegionHandle<Element = V::Element> + 'static,
{
    pub fn with_viewport(viewport: V, registry: SectionRegistry<H>) -> Self {
        let active = ActiveSection::new(registry.first().id);
        Self {
            registry: StoredValue::new_local(registry),
            viewport: StoredValue::new_local(viewport),
            active,
            menu: MenuOverlay::new(),
        }
    }

    /// `(id, label)` of every section, in page order.
    pub fn links(&self) -> Vec<(SectionId, &'static str)> {
        self.registry
            .with_value(|registry| registry.iter().map(|s| (s.id, s.label)).collect())
    }

    pub fn navigate(&self, id: SectionId) -> bool {
        let navigator = ScrollNavigator::new(self.viewport.get_value(), self.menu);
        self.registry.with_value(|registry| {
            registry
                .get(id)
                .is_some_and(|section| navigator.navigate_to(section))
        })
    }

    pub fn tracker(&self) -> ViewportTracker<V> {
        ViewportTracker::new(self.viewport.get_value(), self.active)
    }
}

pub fn use_navigation() -> Navigation {
    expect_context::<Navigation>()
}

/// Attach the viewport tracker once the sections mount, pick up late
/// regions as they appear, and detach when the owner is cleaned up.
pub fn track_sections<V, H>(navigation: Navigation<V, H>)
where
    V: Viewport + Clone + 'static,
    V::Observer: 'static,
    H: RegionHandle<Element = V::Element> + 'static,
{
    let tracker = navigation.tracker();
    let registry = navigation.registry;
    let subscription = StoredValue::new_local(None::<TrackerSubscription<V::Observer>>);

    Effect::new(move |_| {
        registry.with_value(|registry| {
            let mounted = registry
                .iter()
                .filter(|section| section.region.resolve_tracked().is_some())
                .count();
            tracing::trace!(mounted, "section regions changed");

            subscription.update_value(|slot| {
                if let Some(live) = slot.as_ref() {
                    live.observe_pending(registry);
                } else {
                    *slot = Some(tracker.attach(registry));
                }
            });
        });
    });

    on_cleanup(move || {
        subscription.try_update_value(|slot| {
            if let Some(live) = slot.take() {
                live.detach();
            }
        });
    });
}
