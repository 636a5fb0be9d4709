const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// Paper size and uniform margins, stored in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    pub const A4_WIDTH_PT: f32 = 595.28;
    pub const A4_HEIGHT_PT: f32 = 841.89;

    /// A4 with a 10mm margin on all four sides.
    pub fn a4() -> Self {
        Self {
            width_pt: Self::A4_WIDTH_PT,
            height_pt: Self::A4_HEIGHT_PT,
            margin_pt: mm_to_pt(10.0),
        }
    }

    pub fn with_margin_mm(mut self, margin_mm: f32) -> Self {
        self.margin_pt = mm_to_pt(margin_mm.max(0.0));
        self
    }

    pub fn width_in(&self) -> f64 {
        pt_to_in(self.width_pt)
    }

    pub fn height_in(&self) -> f64 {
        pt_to_in(self.height_pt)
    }

    pub fn margin_in(&self) -> f64 {
        pt_to_in(self.margin_pt)
    }

    /// PDF `MediaBox` rounded to whole points.
    pub fn media_box(&self) -> [i64; 4] {
        [
            0,
            0,
            self.width_pt.round() as i64,
            self.height_pt.round() as i64,
        ]
    }
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

fn pt_to_in(pt: f32) -> f64 {
    f64::from(pt) / f64::from(POINTS_PER_INCH)
}
