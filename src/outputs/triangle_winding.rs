/// The order the vertices in a triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TriangleWinding {
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    /// The opposite winding
    pub const fn reverse(self) -> Self {
        match self {
            TriangleWinding::Counterclockwise => TriangleWinding::Clockwise,
            TriangleWinding::Clockwise => TriangleWinding::Counterclockwise,
        }
    }
}
