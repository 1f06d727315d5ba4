pub mod automation;
pub mod finance;
pub mod leverage;

/// Round to 2 decimal places, half away from zero.
///
/// This is the rounding the rest of the system persists and displays;
/// keep it in one place so the policy stays auditable.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
