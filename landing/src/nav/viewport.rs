use super::{BandCrossing, NavError, SectionId};

/// Watches regions for crossings of the horizontal line at 50% viewport
/// height.
pub trait CenterBandObserver {
    type Element;

    fn observe(&self, id: SectionId, element: &Self::Element);

    /// Stop all observation. Safe to call more than once.
    fn disconnect(&self);
}

/// The scrollable window the page lives in.
pub trait Viewport {
    type Element;
    type Observer: CenterBandObserver<Element = Self::Element>;

    /// Create an observer reporting every center-band crossing to `on_cross`.
    fn center_band_observer(
        &self,
        on_cross: Box<dyn Fn(BandCrossing)>,
    ) -> Result<Self::Observer, NavError>;

    /// Start a smooth scroll that ends with `element`'s top edge at the
    /// viewport's top edge. Returns before the animation completes.
    fn scroll_to_top(&self, element: &Self::Element);
}
