//! Generalized extreme value distribution (scipy `genextreme` sign
//! convention: `c > 0` gives a bounded upper tail).

use rand::Rng;

/// GEV from which the monthly gamma shape for wet-day amounts is drawn.
pub const RAIN_SHAPE_GEV: GevParams = GevParams {
    loc: 0.50,
    scale: 0.17,
    shape: 0.14,
};

const MAX_POSITIVE_DRAWS: usize = 1000;

/// Location/scale/shape of a GEV distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    /// Location.
    pub loc: f64,
    /// Scale, positive.
    pub scale: f64,
    /// Shape `c`; `0` is the Gumbel limit.
    pub shape: f64,
}

impl GevParams {
    /// Inverse CDF at `u` in (0, 1).
    pub fn quantile(&self, u: f64) -> f64 {
        let y = -u.ln();
        if self.shape.abs() < 1e-12 {
            self.loc - self.scale * y.ln()
        } else {
            self.loc + self.scale * (1.0 - y.powf(self.shape)) / self.shape
        }
    }

    /// Draws one value by inversion.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        let u: f64 = rng.random();
        // `random` is in [0, 1); ln(0) would give an infinite draw.
        let u = if u == 0.0 { f64::MIN_POSITIVE } else { u };
        self.quantile(u)
    }

    /// Draws until the value is strictly positive.
    ///
    /// Falls back to `loc` after a bounded number of non-positive draws.
    pub fn sample_positive(&self, rng: &mut impl Rng) -> f64 {
        for _ in 0..MAX_POSITIVE_DRAWS {
            let x = self.sample(rng);
            if x > 0.0 && x.is_finite() {
                return x;
            }
        }
        self.loc
    }
}
