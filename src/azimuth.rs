//! Azimuth helpers: clockwise-from-north bearings in degrees.

/// Fold a bearing in degrees into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Split a leg into (latitude, departure). North and east are positive.
pub fn components(length: f64, bearing_deg: f64) -> (f64, f64) {
    let (sin, cos) = bearing_deg.to_radians().sin_cos();
    (length * cos, length * sin)
}

/// Bearing in [0, 360) of the vector with the given latitude and departure.
pub fn bearing_of(latitude: f64, departure: f64) -> f64 {
    let deg = departure.atan2(latitude).to_degrees();
    if deg < 0.0 {
        normalize_degrees(deg + 360.0)
    } else {
        deg
    }
}
