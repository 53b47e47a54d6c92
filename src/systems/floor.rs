use crate::mechanics::scroll;

/// Two copies of the ground strip leapfrogging each other.
/// Its y is the death line; the offsets only matter to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floor {
    pub y: f64,
    width: f64,
    x1: f64,
    x2: f64,
}

impl Floor {
    pub fn new(y: f64, width: f64) -> Self {
        Self { y, width, x1: 0.0, x2: width }
    }

    pub fn offsets(&self) -> (f64, f64) {
        (self.x1, self.x2)
    }

    pub fn advance(&mut self, speed: f64) {
        (self.x1, self.x2) = scroll::wrap_pair(self.x1, self.x2, self.width, speed);
    }
}
