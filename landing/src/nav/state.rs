use leptos::prelude::*;

use super::SectionId;

/// One report from the viewport observer: `id`'s region either entered or
/// left the center band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCrossing {
    pub id: SectionId,
    pub entered: bool,
}

impl BandCrossing {
    pub fn entered(id: SectionId) -> Self {
        Self { id, entered: true }
    }

    pub fn left(id: SectionId) -> Self {
        Self { id, entered: false }
    }
}

/// Next active section given the current one and an incoming crossing.
pub fn reduce_active(current: SectionId, crossing: BandCrossing) -> SectionId {
    if crossing.entered { crossing.id } else { current }
}

/// The section currently in focus for navigation highlighting.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSection(RwSignal<SectionId>);

impl ActiveSection {
    pub fn new(initial: SectionId) -> Self {
        Self(RwSignal::new(initial))
    }

    pub fn get(&self) -> SectionId {
        self.0.get()
    }

    /// Untracked read, for use outside reactive closures.
    pub fn peek(&self) -> SectionId {
        self.0.get_untracked()
    }

    pub fn is(&self, id: SectionId) -> bool {
        self.get() == id
    }

    pub fn apply(&self, crossing: BandCrossing) {
        let current = self.peek();
        let next = reduce_active(current, crossing);
        if next != current {
            tracing::debug!(from = %current, to = %next, "active section changed");
            self.0.set(next);
        }
    }
}

/// Whether the stacked narrow-viewport menu is shown.
#[derive(Debug, Clone, Copy)]
pub struct MenuOverlay(RwSignal<bool>);

impl MenuOverlay {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|open| *open = !*open);
    }

    pub fn force_close(&self) {
        self.0.set(false);
    }
}

impl Default for MenuOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reducer_takes_entering_section() {
        let next = reduce_active(SectionId::Hero, BandCrossing::entered(SectionId::About));
        assert_eq!(next, SectionId::About);
    }

    #[test]
    fn reducer_ignores_leaving_section() {
        let next = reduce_active(SectionId::Hero, BandCrossing::left(SectionId::About));
        assert_eq!(next, SectionId::Hero);
    }

    #[test]
    fn active_follows_a_b_a_crossings() {
        let active = ActiveSection::new(SectionId::Hero);
        let (a, b) = (SectionId::Features, SectionId::Pricing);

        active.apply(BandCrossing::entered(a));
        assert_eq!(active.peek(), a);
        active.apply(BandCrossing::entered(b));
        assert_eq!(active.peek(), b);
        active.apply(BandCrossing::entered(a));
        assert_eq!(active.peek(), a);
    }

    #[test]
    fn leaving_the_band_keeps_last_value() {
        let active = ActiveSection::new(SectionId::Hero);
        active.apply(BandCrossing::entered(SectionId::Contact));
        active.apply(BandCrossing::left(SectionId::Contact));
        assert!(active.is(SectionId::Contact));
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuOverlay::new().is_open());
    }

    #[test]
    fn double_toggle_restores_menu() {
        let menu = MenuOverlay::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn force_close_is_idempotent() {
        let menu = MenuOverlay::new();
        menu.force_close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.force_close();
        menu.force_close();
        assert!(!menu.is_open());
    }
}
