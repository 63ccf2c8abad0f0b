use std::fmt;

use crate::inputs::Vertex;

/// A single precision [Vertex], to exercise coordinate types other than [f64]
#[derive(Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct VTest {
    x: f32,
    y: f32,
}

impl VTest {
    pub fn new(x: f32, y: f32) -> Self { VTest {x, y} }

    pub fn to_array(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
}

impl fmt::Debug for VTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vertex for VTest {
    type Coordinate = f32;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

impl From<(f32, f32)> for VTest {
    fn from((x, y): (f32, f32)) -> Self {
        VTest::new(x, y)
    }
}
