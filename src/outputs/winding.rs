/// The order the vertices of a ring or a triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winding {
    Counterclockwise,
    Clockwise,
}

impl Winding {
    pub fn reverse(self) -> Self {
        match self {
            Self::Counterclockwise => Self::Clockwise,
            Self::Clockwise => Self::Counterclockwise,
        }
    }
}
