use serde::Deserialize;
use tracing::debug;

use crate::error::BandError;
use crate::util::clamp;

pub const DEFAULT_LOWER: i32 = 40;
pub const DEFAULT_UPPER: i32 = 1000;

/// Inclusive `lower..=upper` limits applied to every band of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bands {
    pub lower: i32,
    pub upper: i32,
}

impl Bands {
    /// Takes the limits verbatim, inverted ranges included.
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Like `new`, but rejects `lower > upper`.
    pub fn try_new(lower: i32, upper: i32) -> Result<Self, BandError> {
        if lower > upper {
            return Err(BandError::InvertedBands { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    pub fn clamp(&self, band: i32) -> i32 {
        clamp(band, self.lower, self.upper)
    }

    /// Clamp every band of `track`, returning a new track of the same length.
    pub fn apply(&self, track: &[i32]) -> Vec<i32> {
        clamp_track(track, *self)
    }
}

impl Default for Bands {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER, DEFAULT_UPPER)
    }
}

pub fn clamp_track(track: &[i32], bands: Bands) -> Vec<i32> {
    let mut raised = 0;
    let mut lowered = 0;

    let adjusted: Vec<i32> = track
        .iter()
        .map(|&band| {
            if band < bands.lower {
                raised += 1;
            } else if band > bands.upper {
                lowered += 1;
            }
            bands.clamp(band)
        })
        .collect();

    debug!(
        len = track.len(),
        lower = bands.lower,
        upper = bands.upper,
        raised,
        lowered,
        "clamped track"
    );
    adjusted
}

/// A track paired with its bands, holding the adjusted track once applied.
#[derive(Debug, Clone)]
pub struct BandFilter {
    track: Vec<i32>,
    bands: Bands,
    adjusted_track: Vec<i32>,
}

impl BandFilter {
    pub fn new(track: Vec<i32>, lower: i32, upper: i32) -> Self {
        Self::with_bands(track, Bands::new(lower, upper))
    }

    pub fn with_default_bands(track: Vec<i32>) -> Self {
        Self::with_bands(track, Bands::default())
    }

    pub fn with_bands(track: Vec<i32>, bands: Bands) -> Self {
        Self {
            track,
            bands,
            adjusted_track: Vec::new(),
        }
    }

    /// Recomputes the adjusted track. Repeated calls replace the previous
    /// result rather than extending it.
    pub fn apply(&mut self) {
        self.adjusted_track = clamp_track(&self.track, self.bands);
    }

    pub fn track(&self) -> &[i32] {
        &self.track
    }

    pub fn bands(&self) -> Bands {
        self.bands
    }

    /// Empty until `apply` has run.
    pub fn adjusted_track(&self) -> &[i32] {
        &self.adjusted_track
    }

    pub fn into_adjusted_track(self) -> Vec<i32> {
        self.adjusted_track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(track: &[i32], lower: i32, upper: i32) -> Vec<i32> {
        let mut filter = BandFilter::new(track.to_vec(), lower, upper);
        filter.apply();
        filter.into_adjusted_track()
    }

    #[test]
    fn raises_to_lower_band() {
        assert_eq!(filtered(&[15], 20, 50), vec![20]);
    }

    #[test]
    fn keeps_band_within_range() {
        assert_eq!(filtered(&[45], 20, 50), vec![45]);
    }

    #[test]
    fn lowers_to_upper_band() {
        assert_eq!(filtered(&[1000], 20, 50), vec![50]);
    }

    #[test]
    fn multiple_frequencies() {
        assert_eq!(
            filtered(&[60, 10, 45, 60, 1500], 20, 50),
            vec![50, 20, 45, 50, 50]
        );
    }

    #[test]
    fn frequencies_on_limit() {
        assert_eq!(
            filtered(&[20, 10, 50, 55, 1500], 20, 50),
            vec![20, 20, 50, 50, 50]
        );
    }

    #[test]
    fn default_bands() {
        let mut filter = BandFilter::with_default_bands(vec![20, 10, 50, 55, 1500]);
        filter.apply();
        assert_eq!(filter.adjusted_track(), &[40, 40, 50, 55, 1000]);
        assert_eq!(filter.bands(), Bands::new(40, 1000));
    }

    #[test]
    fn adjusted_track_empty_before_apply() {
        let filter = BandFilter::new(vec![1, 2, 3], 0, 10);
        assert!(filter.adjusted_track().is_empty());
        assert_eq!(filter.track(), &[1, 2, 3]);
    }

    #[test]
    fn apply_twice_does_not_accumulate() {
        let mut filter = BandFilter::new(vec![5, 500], 20, 50);
        filter.apply();
        filter.apply();
        assert_eq!(filter.adjusted_track(), &[20, 50]);
    }

    #[test]
    fn empty_track() {
        assert!(filtered(&[], 20, 50).is_empty());
    }

    #[test]
    fn negative_bands() {
        assert_eq!(filtered(&[-100, -30, 0], -50, -10), vec![-50, -30, -10]);
    }

    #[test]
    fn inverted_bands_accepted_unchecked() {
        let bands = Bands::new(50, 20);
        assert!(bands.is_inverted());
        assert_eq!(bands.apply(&[10, 30, 60]), vec![50, 50, 20]);
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert_eq!(
            Bands::try_new(50, 20),
            Err(BandError::InvertedBands { lower: 50, upper: 20 })
        );
        assert_eq!(Bands::try_new(30, 30), Ok(Bands::new(30, 30)));
    }

    #[test]
    fn pure_apply_leaves_input_untouched() {
        let track = vec![1, 100, 2000];
        let bands = Bands::default();
        let first = bands.apply(&track);
        let second = bands.apply(&track);
        assert_eq!(first, second);
        assert_eq!(track, vec![1, 100, 2000]);
    }
}
