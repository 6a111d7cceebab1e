/// Side or quadrant of the owning region that produced a candidate box.
///
/// Discriminants index the theme's anchor palette. Cardinal anchors come from
/// the side slides, quadrant anchors from the boundary-angle probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Anchor {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
    LowerRight = 4,
    UpperRight = 5,
    LowerLeft = 6,
    UpperLeft = 7,
}

impl Anchor {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_cardinal(self) -> bool {
        (self as u8) < 4
    }
}

/// An axis-aligned label rectangle, center-based, with the derived top-left
/// kept alongside for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
    pub anchor: Anchor,
}

impl LabelBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32, anchor: Anchor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            left: x - width / 2.0,
            top: y - height / 2.0,
            anchor,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Search outcome: one box per region in input order, or no solution at all.
/// An empty region list yields `Complete` with no boxes, which is a different
/// answer than `Infeasible`.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Complete(Vec<LabelBox>),
    Infeasible,
}

impl Placement {
    /// Boxes to draw. Empty when infeasible, so render paths need no branch.
    pub fn labels(&self) -> &[LabelBox] {
        match self {
            Placement::Complete(labels) => labels,
            Placement::Infeasible => &[],
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Placement::Complete(_))
    }
}
