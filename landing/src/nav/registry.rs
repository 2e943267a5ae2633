//! The fixed, ordered list of page sections.

use std::fmt;
use std::str::FromStr;

use super::NavError;

/// Identifier of a page section. The string form doubles as the DOM `id`
/// of the rendered `<section>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Testimonials,
    Pricing,
    About,
    Contact,
}

impl SectionId {
    /// Presentation order, top to bottom.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::Pricing,
        SectionId::About,
        SectionId::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Page 1: Hero",
            SectionId::Features => "Page 2: Features",
            SectionId::Testimonials => "Page 3: Testimonials",
            SectionId::Pricing => "Page 4: Pricing",
            SectionId::About => "Page 5: About",
            SectionId::Contact => "Page 6: Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// A lazily resolved reference to a rendered region of the page.
///
/// Handles exist before their region is mounted, so every use goes through
/// [`RegionHandle::resolve`] first.
pub trait RegionHandle {
    type Element;

    fn resolve(&self) -> Option<Self::Element>;

    /// [`resolve`](Self::resolve) that also subscribes the running reactive
    /// effect, so it re-runs when the region mounts or unmounts.
    fn resolve_tracked(&self) -> Option<Self::Element> {
        self.resolve()
    }
}

/// One named region of the page.
#[derive(Debug, Clone, Copy)]
pub struct Section<H> {
    pub id: SectionId,
    pub label: &'static str,
    pub region: H,
}

impl<H> Section<H> {
    pub fn new(id: SectionId, region: H) -> Self {
        Self {
            id,
            label: id.label(),
            region,
        }
    }
}

/// Ordered sections of the page. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct SectionRegistry<H> {
    sections: Vec<Section<H>>,
}

impl<H> SectionRegistry<H> {
    /// Build a registry from arbitrary sections, rejecting duplicate ids.
    pub fn from_sections(sections: Vec<Section<H>>) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptyRegistry);
        }
        for (index, section) in sections.iter().enumerate() {
            if sections[..index].iter().any(|prev| prev.id == section.id) {
                return Err(NavError::DuplicateSection(section.id));
            }
        }
        Ok(Self { sections })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<H>> {
        self.sections.iter()
    }

    pub fn get(&self, id: SectionId) -> Option<&Section<H>> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// The section the page starts on.
    pub fn first(&self) -> &Section<H> {
        // from_sections and register never produce an empty registry
        &self.sections[0]
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|section| section.id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: SectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// The page's six sections in presentation order, each paired with the
/// region handle `handle_for` returns for it.
pub fn register<H>(mut handle_for: impl FnMut(SectionId) -> H) -> SectionRegistry<H> {
    let sections = SectionId::ALL
        .into_iter()
        .map(|id| Section::new(id, handle_for(id)))
        .collect();
    SectionRegistry { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_yields_six_sections_in_page_order() {
        let registry = register(|_| ());
        let ids: Vec<&str> = registry.ids().map(SectionId::as_str).collect();
        assert_eq!(
            ids,
            vec!["hero", "features", "testimonials", "pricing", "about", "contact"]
        );
        assert_eq!(registry.first().id, SectionId::Hero);
    }

    #[test]
    fn register_is_deterministic() {
        let a: Vec<_> = register(|_| ()).iter().map(|s| (s.id, s.label)).collect();
        let b: Vec<_> = register(|_| ()).iter().map(|s| (s.id, s.label)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn registered_ids_are_pairwise_distinct() {
        let registry = register(|_| ());
        let ids: Vec<SectionId> = registry.ids().collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.as_str(), b.as_str());
            }
        }
        // the general constructor accepts the built-in table too
        assert!(SectionRegistry::from_sections(registry.iter().copied().collect()).is_ok());
    }

    #[test]
    fn handles_come_from_the_caller() {
        let registry = register(|id| id.as_str().len());
        assert_eq!(registry.get(SectionId::Testimonials).map(|s| s.region), Some(12));
        assert_eq!(registry.get(SectionId::About).map(|s| s.region), Some(5));
    }

    #[test]
    fn labels_follow_page_numbering() {
        let registry = register(|_| ());
        let labels: Vec<&str> = registry.iter().map(|s| s.label).collect();
        assert_eq!(labels[0], "Page 1: Hero");
        assert_eq!(labels[5], "Page 6: Contact");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let sections = vec![
            Section::new(SectionId::Hero, ()),
            Section::new(SectionId::Pricing, ()),
            Section::new(SectionId::Hero, ()),
        ];
        let err = SectionRegistry::from_sections(sections).unwrap_err();
        assert_eq!(err, NavError::DuplicateSection(SectionId::Hero));
        assert_eq!(err.to_string(), "section `hero` is registered more than once");
    }

    #[test]
    fn empty_registry_is_rejected() {
        let err = SectionRegistry::<()>::from_sections(Vec::new()).unwrap_err();
        assert_eq!(err, NavError::EmptyRegistry);
    }

    #[test]
    fn dom_ids_parse_back() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert!("footer".parse::<SectionId>().is_err());
    }
}
