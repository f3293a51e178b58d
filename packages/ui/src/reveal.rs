use crate::dom::{Document, Query, Rect};
use crate::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl RevealOptions {
    /// `rootMargin` string for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// One intersection report for a watched element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Fraction of `rect` inside the trigger region `[0, trigger_bottom]`.
pub fn visible_fraction(rect: Rect, trigger_bottom: f64) -> f64 {
    if rect.height <= 0.0 {
        let inside = rect.top >= 0.0 && rect.top <= trigger_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let top = rect.top.max(0.0);
    let bottom = rect.bottom().min(trigger_bottom);
    ((bottom - top).max(0.0) / rect.height).min(1.0)
}

/// One-shot reveal of elements as they come into view.
///
/// Every marked element starts pending. The first qualifying report for it
/// adds the reveal class and drops it from the pending set, so later reports
/// (including leaving and re-entering the viewport) are ignored.
#[derive(Debug, Clone)]
pub struct RevealMonitor<N> {
    pending: Vec<N>,
    options: RevealOptions,
    revealed_class: String,
}

impl<N: Clone + PartialEq> RevealMonitor<N> {
    pub fn locate<D: Document<Node = N>>(doc: &D, config: &SiteConfig) -> Self {
        Self {
            pending: doc.query(Query::Class(&config.reveal.marker_class)),
            options: RevealOptions {
                threshold: config.reveal.threshold,
                bottom_margin: config.reveal.bottom_margin,
            },
            revealed_class: config.active_class.clone(),
        }
    }

    pub fn pending(&self) -> &[N] {
        &self.pending
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    fn qualifies(&self, entry: &Intersection<N>) -> bool {
        entry.is_intersecting && entry.ratio >= self.options.threshold
    }

    /// Apply intersection reports. Returns the elements revealed by this batch.
    pub fn record<D, I>(&mut self, doc: &D, entries: I) -> Vec<N>
    where
        D: Document<Node = N>,
        I: IntoIterator<Item = Intersection<N>>,
    {
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.qualifies(&entry) {
                continue;
            }
            let Some(index) = self.pending.iter().position(|n| *n == entry.target) else {
                continue;
            };
            let target = self.pending.remove(index);
            doc.set_class(&target, &self.revealed_class, true);
            revealed.push(target);
        }
        revealed
    }

    /// Measure every pending element against the current viewport and record the result.
    ///
    /// Hosts without an `IntersectionObserver` call this after setup and on scroll.
    pub fn evaluate<D: Document<Node = N>>(&mut self, doc: &D) -> Vec<N> {
        let trigger_bottom = doc.viewport_height() - self.options.bottom_margin;
        let entries: Vec<Intersection<N>> = self
            .pending
            .iter()
            .map(|node| {
                let ratio = visible_fraction(doc.rect(node), trigger_bottom);
                Intersection {
                    target: node.clone(),
                    is_intersecting: ratio > 0.0,
                    ratio,
                }
            })
            .collect();
        self.record(doc, entries)
    }
}
