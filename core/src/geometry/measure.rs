//! Measurements on validated triangles

use crate::classify::Triangle;

/// Relative tolerance for the Pythagorean check
const RIGHT_EPSILON: f64 = 1e-9;

impl Triangle<f64> {
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    /// Area by Heron's formula
    ///
    /// Uses the sorted form `a >= b >= c`, which stays accurate for
    /// needle-shaped triangles where the textbook form loses precision.
    pub fn area(&self) -> f64 {
        let [c, b, a] = self.sides();
        let product = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
        0.25 * product.max(0.0).sqrt()
    }

    /// Whether the triangle has a right angle (`x² + y² = z²`)
    pub fn is_right(&self) -> bool {
        let [x, y, z] = self.sides();
        let z2 = z * z;
        (x * x + y * y - z2).abs() <= RIGHT_EPSILON * z2
    }

    /// Interior angles in degrees, ascending (opposite the ascending sides)
    pub fn angles(&self) -> [f64; 3] {
        let [x, y, z] = self.sides();
        [
            opposite_angle(x, y, z),
            opposite_angle(y, x, z),
            opposite_angle(z, x, y),
        ]
    }
}

/// Law of cosines: angle opposite `side`, between `p` and `q`
fn opposite_angle(side: f64, p: f64, q: f64) -> f64 {
    let cos = (p * p + q * q - side * side) / (2.0 * p * q);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_perimeter() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert!(close(t.perimeter(), 12.0));
    }

    #[test]
    fn test_area() {
        let t = Triangle::new(5.0, 3.0, 4.0).unwrap();
        assert!(close(t.area(), 6.0));

        let eq = Triangle::new(2.0, 2.0, 2.0).unwrap();
        assert!(close(eq.area(), 3.0_f64.sqrt()));
    }

    #[test]
    fn test_needle_area_is_positive() {
        let t = Triangle::new(1e-3, 1.0, 1.0).unwrap();
        let area = t.area();
        assert!(area > 0.0);
        assert!((area - 5e-4).abs() < 1e-9);
    }

    #[test]
    fn test_is_right() {
        assert!(Triangle::new(3.0, 4.0, 5.0).unwrap().is_right());
        assert!(Triangle::new(13.0, 5.0, 12.0).unwrap().is_right());
        assert!(Triangle::new(1.0, 1.0, 2.0_f64.sqrt()).unwrap().is_right());
        assert!(!Triangle::new(2.0, 3.0, 4.0).unwrap().is_right());
    }

    #[test]
    fn test_angles() {
        let [a, b, c] = Triangle::new(3.0, 4.0, 5.0).unwrap().angles();
        assert!(close(c, 90.0));
        assert!(a < b && b < c);
        assert!(close(a + b + c, 180.0));

        let eq = Triangle::new(7.0, 7.0, 7.0).unwrap().angles();
        assert!(eq.iter().all(|&angle| close(angle, 60.0)));
    }
}
