use super::{MenuOverlay, RegionHandle, Section, Viewport};

/// Scrolls the page to a section and closes the stacked menu.
#[derive(Debug, Clone, Copy)]
pub struct ScrollNavigator<V> {
    viewport: V,
    menu: MenuOverlay,
}

impl<V: Viewport> ScrollNavigator<V> {
    pub fn new(viewport: V, menu: MenuOverlay) -> Self {
        Self { viewport, menu }
    }

    /// Start a smooth scroll to `section` and close the menu overlay.
    ///
    /// Does nothing and returns `false` when the section's region is not
    /// mounted. The active section is left to the tracker, which picks it up
    /// once the target crosses the center band.
    pub fn navigate_to<H>(&self, section: &Section<H>) -> bool
    where
        H: RegionHandle<Element = V::Element>,
    {
        let Some(element) = section.region.resolve() else {
            tracing::debug!(section = %section.id, "navigation target not mounted");
            return false;
        };

        tracing::debug!(section = %section.id, "scrolling to section");
        self.viewport.scroll_to_top(&element);
        self.menu.force_close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::{FakeRegion, FakeViewport};
    use crate::nav::{ActiveSection, SectionId, register};
    use pretty_assertions::assert_eq;

    #[test]
    fn navigating_scrolls_and_closes_open_menu() {
        let viewport = FakeViewport::default();
        let menu = MenuOverlay::new();
        let navigator = ScrollNavigator::new(viewport.clone(), menu);
        let registry = register(FakeRegion::mounted);

        menu.toggle();
        assert!(menu.is_open());

        let section = registry.get(SectionId::Pricing);
        assert_eq!(section.map(|s| navigator.navigate_to(s)), Some(true));
        assert!(!menu.is_open());
        assert_eq!(viewport.scrolls(), vec![SectionId::Pricing]);
    }

    #[test]
    fn closed_menu_stays_closed() {
        let viewport = FakeViewport::default();
        let menu = MenuOverlay::new();
        let navigator = ScrollNavigator::new(viewport.clone(), menu);
        let registry = register(FakeRegion::mounted);

        assert!(navigator.navigate_to(registry.first()));
        assert!(!menu.is_open());
    }

    #[test]
    fn unmounted_target_is_a_no_op() {
        let viewport = FakeViewport::default();
        let menu = MenuOverlay::new();
        let active = ActiveSection::new(SectionId::Hero);
        let navigator = ScrollNavigator::new(viewport.clone(), menu);
        let registry = register(FakeRegion::unmounted);

        menu.toggle();
        let moved = registry.get(SectionId::About).map(|s| navigator.navigate_to(s));

        assert_eq!(moved, Some(false));
        assert!(menu.is_open());
        assert_eq!(active.peek(), SectionId::Hero);
        assert!(viewport.scrolls().is_empty());
    }

    #[test]
    fn repeated_navigation_retargets() {
        let viewport = FakeViewport::default();
        let navigator = ScrollNavigator::new(viewport.clone(), MenuOverlay::new());
        let registry = register(FakeRegion::mounted);

        for id in [SectionId::Contact, SectionId::Features] {
            if let Some(section) = registry.get(id) {
                navigator.navigate_to(section);
            }
        }
        assert_eq!(viewport.scrolls(), vec![SectionId::Contact, SectionId::Features]);
    }
}
