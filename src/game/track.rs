//! Fixed-length set of tunable values with an edit cursor.

/// Round to one decimal place.
///
/// Every edit goes through this, so values stay on the 0.1 grid and two
/// values reached by different paths compare equal.
pub fn round_tenth(v: f64) -> f64 {
    libm::round(v * 10.0) / 10.0
}

/// `N` values plus a marker selecting the one being edited.
///
/// Values are not clamped: stepping past 0 or 1 is allowed and the
/// renderer clips whatever ends up off-chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTrack<const N: usize> {
    values: [f64; N],
    marker: usize,
}

impl<const N: usize> ValueTrack<N> {
    /// Seed the track; the marker starts on the first value.
    pub const fn new(values: [f64; N]) -> Self {
        Self { values, marker: 0 }
    }

    /// Move the marker by `step`, wrapping at both ends.
    pub fn move_marker(&mut self, step: i32) {
        if N == 0 {
            return;
        }
        let len = N as i64;
        self.marker = (self.marker as i64 + step as i64).rem_euclid(len) as usize;
    }

    /// Add `step` to the selected value and round to one decimal.
    pub fn adjust_value(&mut self, step: f64) {
        if let Some(v) = self.values.get_mut(self.marker) {
            *v = round_tenth(*v + step);
        }
    }

    pub fn marker(&self) -> usize {
        self.marker
    }

    pub fn values(&self) -> &[f64; N] {
        &self.values
    }

    /// Value under the marker; `None` only for an empty track.
    pub fn selected(&self) -> Option<f64> {
        self.values.get(self.marker).copied()
    }
}
