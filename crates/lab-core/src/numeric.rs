use crate::LabError;

/// Pass `v` through if it is finite.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, LabError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LabError::NonFinite { what, value: v })
    }
}

/// Format a value with a fixed number of decimals, the way measurements are displayed.
pub fn fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}
