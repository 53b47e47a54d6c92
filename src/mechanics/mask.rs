/// Mask mechanics: 1-bit silhouettes and offset overlap tests.
/// Rows are packed into `u64` words, least significant bit leftmost.
use crate::error::ConfigError;

/// Alpha above this counts as solid.
pub const ALPHA_THRESHOLD: u8 = 127;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Silhouette {
    width: usize,
    height: usize,
    stride: usize,
    bits: Vec<u64>,
}

impl Silhouette {
    /// Build from a per-pixel predicate.
    pub fn from_fn(
        width: usize,
        height: usize,
        solid: impl Fn(usize, usize) -> bool,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroSizedSilhouette { width, height });
        }
        let stride = width.div_ceil(64);
        let mut bits = vec![0u64; stride * height];
        for y in 0..height {
            for x in 0..width {
                if solid(x, y) {
                    bits[y * stride + x / 64] |= 1u64 << (x % 64);
                }
            }
        }
        Ok(Self { width, height, stride, bits })
    }

    /// Every pixel solid: the bounding-box case.
    pub fn filled(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::from_fn(width, height, |_, _| true)
    }

    /// Ellipse inscribed in the box, sampled at pixel centres.
    pub fn ellipse(width: usize, height: usize) -> Result<Self, ConfigError> {
        let (rx, ry) = (width as f64 / 2.0, height as f64 / 2.0);
        Self::from_fn(width, height, |x, y| {
            let nx = (x as f64 + 0.5 - rx) / rx;
            let ny = (y as f64 + 0.5 - ry) / ry;
            nx * nx + ny * ny <= 1.0
        })
    }

    /// Row-major alpha channel, one byte per pixel.
    pub fn from_alpha(width: usize, height: usize, alpha: &[u8]) -> Result<Self, ConfigError> {
        let expected = width * height;
        if alpha.len() != expected {
            return Err(ConfigError::AlphaLength { expected, actual: alpha.len() });
        }
        Self::from_fn(width, height, |x, y| alpha[y * width + x] > ALPHA_THRESHOLD)
    }

    /// Upside-down copy; the top barrier is the bottom one flipped.
    pub fn flipped_vertical(&self) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len());
        for row in self.bits.chunks(self.stride).rev() {
            bits.extend_from_slice(row);
        }
        Self { width: self.width, height: self.height, stride: self.stride, bits }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.stride + x / 64] >> (x % 64) & 1 == 1
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if any solid pixel of `self` meets a solid pixel of `other`
    /// placed with its origin at `(dx, dy)` in `self`'s coordinates.
    pub fn overlaps(&self, other: &Silhouette, dx: i64, dy: i64) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i64).min(dx + other.width as i64);
        let y1 = (self.height as i64).min(dy + other.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }
        (y0..y1).any(|y| {
            (x0..x1).any(|x| {
                self.get(x as usize, y as usize) && other.get((x - dx) as usize, (y - dy) as usize)
            })
        })
    }
}
