/// Scroll mechanics: two strips of equal width tiling a band forever.

/// Shift both strips left by `speed`, then hop any strip whose right edge
/// passed x = 0 to sit right after the other one.
#[inline]
pub fn wrap_pair(a: f64, b: f64, width: f64, speed: f64) -> (f64, f64) {
    let mut a = a - speed;
    let mut b = b - speed;
    if a + width < 0.0 {
        a = b + width;
    }
    if b + width < 0.0 {
        b = a + width;
    }
    (a, b)
}
