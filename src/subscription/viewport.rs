// Viewport band observation - reports sections entering the trigger band
use crate::error::{FolioError, Result};
use crate::style;

/// Vertical slice of the viewport, as fractions of its height from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    top: f32,
    bottom: f32,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top: style::BAND_TOP,
            bottom: style::BAND_BOTTOM,
        }
    }
}

impl TriggerBand {
    pub fn new(top: f32, bottom: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&top) || !(0.0..=1.0).contains(&bottom) || top >= bottom {
            return Err(FolioError::InvalidBand { top, bottom });
        }
        Ok(Self { top, bottom })
    }

    pub fn intersects(&self, region: &SectionRegion, viewport_height: f32) -> bool {
        if viewport_height <= 0.0 {
            return false;
        }
        let band_top = viewport_height * self.top;
        let band_bottom = viewport_height * self.bottom;
        region.top < band_bottom && region.bottom > band_top
    }
}

/// Laid-out extent of a section, in pixels relative to the viewport top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegion {
    pub id: String,
    pub top: f32,
    pub bottom: f32,
}

impl SectionRegion {
    pub fn new(id: &str, top: f32, bottom: f32) -> Self {
        Self {
            id: id.to_string(),
            top,
            bottom,
        }
    }
}

/// Handle returned by [`ViewportObserver::subscribe`].
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

struct Watch {
    key: u64,
    section_id: String,
    inside: bool,
    on_enter: Box<dyn FnMut(&str)>,
}

pub struct ViewportObserver {
    band: TriggerBand,
    watches: Vec<Watch>,
    next_key: u64,
}

impl ViewportObserver {
    pub fn new(band: TriggerBand) -> Self {
        Self {
            band,
            watches: Vec::new(),
            next_key: 0,
        }
    }

    pub fn subscribe(
        &mut self,
        section_id: &str,
        on_enter: impl FnMut(&str) + 'static,
    ) -> Subscription {
        let key = self.next_key;
        self.next_key += 1;
        self.watches.push(Watch {
            key,
            section_id: section_id.to_string(),
            inside: false,
            on_enter: Box::new(on_enter),
        });
        Subscription(key)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.watches.len();
        self.watches.retain(|w| w.key != subscription.0);
        self.watches.len() != before
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Run one observation pass. Regions are reported in the order given;
    /// regions missing from the pass keep their previous state.
    pub fn observe(&mut self, regions: &[SectionRegion], viewport_height: f32) {
        for region in regions {
            let inside = self.band.intersects(region, viewport_height);
            for watch in self
                .watches
                .iter_mut()
                .filter(|w| w.section_id == region.id)
            {
                if inside && !watch.inside {
                    (watch.on_enter)(&region.id);
                }
                watch.inside = inside;
            }
        }
    }
}
