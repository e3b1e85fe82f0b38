use std::f64::consts::PI;

/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    if (-PI..PI).contains(&angle) {
        return angle;
    }
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

// ----- Tests ---------------------------------------------------------------------
