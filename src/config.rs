//! Graph construction and query options

/// Default share of ranked vertices treated as hotspots
pub const DEFAULT_HOTSPOT_FRACTION: f64 = 0.10;

/// Default maximum relay levels for bounded path search
pub const DEFAULT_RELAY_CEILING: usize = 20;

/// Deduplication key used by triangle enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangleDedup {
    /// Sorted vertex triple: each triangle is reported once
    #[default]
    Canonical,
    /// Digit-sorted concatenation of the two non-origin ids.
    ///
    /// Distinct pairs can share a key when ids have several digits (e.g.
    /// `(1, 23)` and `(12, 3)` both map to `"123"`). The origin is not part
    /// of the key, so whole-graph enumeration reports a triangle once per
    /// corner.
    DigitKey,
}

/// What `best_trail` does when no neighbor of the current vertex is a hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailFallback {
    /// Make no move; the trail ends there
    #[default]
    Stall,
    /// Advance to the first unvisited neighbor in neighborhood order
    TopCandidate,
}

/// Options fixed at graph construction
///
/// # Example
///
/// ```
/// use fastgraph::{GraphOptions, TrailFallback};
///
/// let options = GraphOptions::default()
///     .with_precompute_hotspots(true)
///     .with_trail_fallback(TrailFallback::TopCandidate);
/// assert!(options.precompute_hotspots);
/// assert_eq!(options.relay_ceiling, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    /// Rank every vertex by triangle count at the end of ingestion
    pub precompute_hotspots: bool,

    /// Share (0.0..=1.0) of the hotspot table counted as hotspots
    pub hotspot_fraction: f64,

    /// Maximum relay levels explored by `path_between`
    pub relay_ceiling: usize,

    /// Triangle deduplication key
    pub triangle_dedup: TriangleDedup,

    /// Behavior of `best_trail` without hotspot candidates
    pub trail_fallback: TrailFallback,
}

impl GraphOptions {
    /// Set eager hotspot computation
    #[must_use]
    pub const fn with_precompute_hotspots(mut self, precompute: bool) -> Self {
        self.precompute_hotspots = precompute;
        self
    }

    /// Set hotspot share, clamped to `0.0..=1.0`
    #[must_use]
    pub fn with_hotspot_fraction(mut self, fraction: f64) -> Self {
        self.hotspot_fraction = if fraction.is_nan() {
            DEFAULT_HOTSPOT_FRACTION
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self
    }

    /// Set relay ceiling for path search (minimum 1)
    #[must_use]
    pub fn with_relay_ceiling(mut self, ceiling: usize) -> Self {
        self.relay_ceiling = ceiling.max(1);
        self
    }

    /// Set triangle deduplication key
    #[must_use]
    pub const fn with_triangle_dedup(mut self, dedup: TriangleDedup) -> Self {
        self.triangle_dedup = dedup;
        self
    }

    /// Set trail fallback
    #[must_use]
    pub const fn with_trail_fallback(mut self, fallback: TrailFallback) -> Self {
        self.trail_fallback = fallback;
        self
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            precompute_hotspots: false,
            hotspot_fraction: DEFAULT_HOTSPOT_FRACTION,
            relay_ceiling: DEFAULT_RELAY_CEILING,
            triangle_dedup: TriangleDedup::default(),
            trail_fallback: TrailFallback::default(),
        }
    }
}
