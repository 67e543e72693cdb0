//! Heading of a 2D offset in degrees.
//!
//! The quadrant dispatch below is not `atan2`: the heading of `(dx, dy)`
//! is the direction the offset points *back* along, so a body at
//! `xi - xj` relative to `j` gets the heading it is pulled toward.
//! The trajectory predictor relies on this convention being applied to
//! both the gravity and the velocity vector.

/// Heading of `(dx, dy)` in `[0, 360)`, `0` for the zero vector.
pub fn heading(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    if dx == 0.0 {
        if dy < 0.0 { 90.0 } else { 270.0 }
    } else if dy == 0.0 {
        if dx < 0.0 { 0.0 } else { 180.0 }
    } else {
        let base = (dy / dx).atan().to_degrees();
        if dx < 0.0 && dy < 0.0 {
            base
        } else if dx < 0.0 {
            // rounding can land exactly on 360 for near-zero angles
            (360.0 + base) % 360.0
        } else {
            180.0 + base
        }
    }
}

/// Cartesian components of a vector of magnitude `m` along heading `d`.
pub fn cartesian(m: f64, d: f64) -> (f64, f64) {
    let r = d.to_radians();
    (m * r.cos(), m * r.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_headings() {
        assert_eq!(heading(0.0, 0.0), 0.0);
        assert_eq!(heading(-1.0, 0.0), 0.0);
        assert_eq!(heading(1.0, 0.0), 180.0);
        assert_eq!(heading(0.0, -1.0), 90.0);
        assert_eq!(heading(0.0, 1.0), 270.0);
    }

    #[test]
    fn diagonal_headings() {
        assert!((heading(-1.0, -1.0) - 45.0).abs() < 1e-12);
        assert!((heading(-1.0, 1.0) - 315.0).abs() < 1e-12);
        assert!((heading(1.0, 1.0) - 225.0).abs() < 1e-12);
        assert!((heading(1.0, -1.0) - 135.0).abs() < 1e-12);
    }

    #[test]
    fn heading_stays_in_range() {
        for i in -20..=20 {
            for j in -20..=20 {
                let d = heading(i as f64 * 0.37, j as f64 * 1.13);
                assert!((0.0..360.0).contains(&d), "heading({i}, {j}) = {d}");
            }
        }
    }

    #[test]
    fn cartesian_follows_heading() {
        let (x, y) = cartesian(2.0, 90.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }
}
