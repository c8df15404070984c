//! Diurnal range repair for independently generated tmin/tmax.

use crate::error::CollateError;

/// Increment applied to `tmax` when it equals `tmin`.
pub const MIN_DIURNAL_RANGE: f64 = 0.1;

/// Makes `tmax > tmin` hold on every day.
///
/// Days with `tmax < tmin` are swapped; days with `tmax == tmin` get
/// `tmax += 0.1`. Returns the number of repaired days.
///
/// # Errors
///
/// Returns [`CollateError::RangeLengthMismatch`] if the slices differ in
/// length.
pub fn repair_diurnal_range(tmin: &mut [f64], tmax: &mut [f64]) -> Result<usize, CollateError> {
    if tmin.len() != tmax.len() {
        return Err(CollateError::RangeLengthMismatch {
            tmin: tmin.len(),
            tmax: tmax.len(),
        });
    }
    let mut repaired = 0;
    for (lo, hi) in tmin.iter_mut().zip(tmax.iter_mut()) {
        if *hi < *lo {
            std::mem::swap(lo, hi);
            repaired += 1;
        } else if *hi == *lo {
            *hi += MIN_DIURNAL_RANGE;
            repaired += 1;
        }
    }
    Ok(repaired)
}
