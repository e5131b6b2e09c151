//! Active section state and the scroll tracking predicate.

use crate::navigation::Viewport;
use crate::section::SectionId;

/// One reading of the viewport: its height and the top offset of every
/// section anchor, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    pub viewport_height: f64,
    pub offsets: Vec<(SectionId, f64)>,
}

impl ScrollSample {
    pub fn new(viewport_height: f64, offsets: Vec<(SectionId, f64)>) -> Self {
        Self {
            viewport_height,
            offsets,
        }
    }

    /// Read the current geometry from the host.
    ///
    /// Returns `None` while the view tree is not attached (no viewport
    /// height or any anchor missing).
    pub fn collect<V: Viewport + ?Sized>(viewport: &V) -> Option<Self> {
        let viewport_height = viewport.viewport_height()?;
        let offsets = SectionId::ALL
            .into_iter()
            .map(|id| viewport.anchor_top(id).map(|top| (id, top)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(viewport_height, offsets))
    }

    /// First section, in sample order, whose anchor top lies in
    /// `[0, viewport_height * activation_ratio)`.
    pub fn current_section(&self, activation_ratio: f64) -> Option<SectionId> {
        let limit = self.viewport_height * activation_ratio;
        self.offsets
            .iter()
            .find(|(_, offset)| *offset >= 0.0 && *offset < limit)
            .map(|(id, _)| *id)
    }
}

/// The highlighted section. Always exactly one id; starts at `summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSection {
    pub fn new() -> Self {
        Self {
            current: SectionId::Summary,
        }
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.current == id
    }

    /// Apply a scroll sample. The state only moves when some section
    /// matches; otherwise it stays where it was.
    ///
    /// Returns `true` if the active section changed.
    pub fn observe(&mut self, sample: &ScrollSample, activation_ratio: f64) -> bool {
        match sample.current_section(activation_ratio) {
            Some(id) => self.select(id),
            None => false,
        }
    }

    /// Mark `id` active immediately. Returns `true` if it changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.current != id;
        self.current = id;
        changed
    }
}
