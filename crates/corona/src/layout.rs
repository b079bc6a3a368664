use crate::geometry::{Point, Rect};

/// Angular position of a sector, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpan {
    pub start: f64,
    pub sweep: f64,
}

impl SectorSpan {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    pub fn mid(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// A sector as handed to the renderer: span plus current bounding square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub span: SectorSpan,
    pub rect: Rect,
}

pub fn sweep_angle(item_count: usize) -> f64 {
    360.0 / item_count as f64
}

pub fn sector_span(index: usize, item_count: usize) -> SectorSpan {
    let sweep = sweep_angle(item_count);
    SectorSpan {
        start: sweep * index as f64,
        sweep,
    }
}

/// Bounding square of sector `index`. Every sector shares the same square;
/// the span decides which slice of it is drawn.
pub fn compute_sector(
    index: usize,
    item_count: usize,
    bounding_square: Rect,
    radius_inset: f64,
) -> Rect {
    debug_assert!(index < item_count);
    bounding_square.inset(radius_inset)
}

/// Largest square centered in `area`.
pub fn bounding_square(area: Rect) -> Rect {
    let (width, height) = (area.width().max(0.0), area.height().max(0.0));
    let side = width.min(height);
    let left = area.left + (width - side) / 2.0;
    let top = area.top + (height - side) / 2.0;
    Rect::new(left, top, left + side, top + side)
}

/// Halfway between the rect's center and its inscribed circle, along the
/// sector's bisecting angle.
pub fn icon_center(sector_mid_angle: f64, rect: Rect) -> Point {
    let center = rect.center();
    let half_radius = rect.radius() / 2.0;
    let radians = sector_mid_angle.to_radians();
    Point::new(
        center.x + half_radius * radians.cos(),
        center.y + half_radius * radians.sin(),
    )
}

/// Measured geometry of the selector, recomputed on every host resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectorLayout {
    bounding: Rect,
    baseline_inset: f64,
}

impl SectorLayout {
    /// `baseline_inset` is the expanded/baseline radius difference in device
    /// pixels, capped at the radius of the bounding square.
    pub fn new(content_area: Rect, baseline_inset: f64) -> Self {
        let bounding = bounding_square(content_area);
        Self {
            bounding,
            baseline_inset: baseline_inset.clamp(0.0, bounding.radius()),
        }
    }

    pub fn bounding_square(&self) -> Rect {
        self.bounding
    }

    pub fn baseline_inset(&self) -> f64 {
        self.baseline_inset
    }

    pub fn expanded_rect(&self, index: usize, item_count: usize) -> Rect {
        compute_sector(index, item_count, self.bounding, 0.0)
    }

    pub fn baseline_rect(&self, index: usize, item_count: usize) -> Rect {
        compute_sector(index, item_count, self.bounding, self.baseline_inset)
    }

    /// Rect `expansion` of the way from baseline (0.0) to expanded (1.0).
    pub fn interpolated_rect(&self, index: usize, item_count: usize, expansion: f64) -> Rect {
        self.baseline_rect(index, item_count)
            .expand(self.baseline_inset * expansion.clamp(0.0, 1.0))
    }
}
