use crate::geometry::{Point, Rect};
use crate::layout;

/// Sector index whose angular bucket contains `angle` (degrees in `[0, 360)`).
pub fn sector_at_angle(angle: f64, item_count: usize) -> usize {
    let index = (angle / layout::sweep_angle(item_count)).floor() as usize;
    // angle may round up to exactly 360.0
    index.min(item_count - 1)
}

/// Maps a pointer to the sector under it.
///
/// The bounding square is a coarse reject, the angle around its center picks
/// the candidate, and the candidate's current rect decides the hit: sectors
/// are drawn on a disc, so the corners of the square are misses.
pub fn locate(
    pointer: Point,
    bounding_square: Rect,
    item_count: usize,
    current_rect: impl Fn(usize) -> Rect,
) -> Option<usize> {
    if item_count == 0 || !bounding_square.contains(pointer) {
        return None;
    }

    let angle = pointer.angle_around(bounding_square.center());
    let candidate = sector_at_angle(angle, item_count);

    current_rect(candidate)
        .disc_contains(pointer)
        .then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SectorLayout;

    fn point_at(center: Point, angle: f64, distance: f64) -> Point {
        let radians = angle.to_radians();
        Point::new(
            center.x + distance * radians.cos(),
            center.y + distance * radians.sin(),
        )
    }

    fn baseline_locate(layout: &SectorLayout, pointer: Point, count: usize) -> Option<usize> {
        locate(pointer, layout.bounding_square(), count, |i| {
            layout.baseline_rect(i, count)
        })
    }

    #[test]
    fn test_angle_buckets() {
        let cases = vec![
            (0.0, 5, 0),
            (40.0, 5, 0),
            (72.0, 5, 1),
            (359.999, 5, 4),
            (360.0, 5, 4),
            (180.0, 2, 1),
            (179.9, 2, 0),
        ];

        for (angle, count, expected) in cases {
            assert_eq!(sector_at_angle(angle, count), expected, "angle {angle}");
        }
    }

    #[test]
    fn test_locate_inside_disc() {
        let layout = SectorLayout::new(Rect::from_size(400.0, 400.0), 42.0);
        let center = layout.bounding_square().center();

        for count in crate::MIN_OPTIONS..=crate::MAX_OPTIONS {
            for index in 0..count {
                let mid = crate::layout::sector_span(index, count).mid();
                let pointer = point_at(center, mid, 100.0);
                assert_eq!(baseline_locate(&layout, pointer, count), Some(index));
            }
        }
    }

    #[test]
    fn test_locate_rejects_outside_square() {
        let layout = SectorLayout::new(Rect::from_size(400.0, 400.0), 0.0);
        assert_eq!(baseline_locate(&layout, Point::new(-1.0, 200.0), 4), None);
        assert_eq!(baseline_locate(&layout, Point::new(200.0, 400.0), 4), None);
    }

    #[test]
    fn test_locate_rejects_square_corner() {
        let layout = SectorLayout::new(Rect::from_size(400.0, 400.0), 0.0);
        assert_eq!(baseline_locate(&layout, Point::new(395.0, 395.0), 4), None);
    }

    #[test]
    fn test_locate_uses_current_rect() {
        let layout = SectorLayout::new(Rect::from_size(400.0, 400.0), 42.0);
        let center = layout.bounding_square().center();
        // between the baseline and the expanded radius
        let pointer = point_at(center, 45.0, 180.0);

        assert_eq!(baseline_locate(&layout, pointer, 4), None);
        let expanded = locate(pointer, layout.bounding_square(), 4, |i| {
            if i == 0 {
                layout.expanded_rect(i, 4)
            } else {
                layout.baseline_rect(i, 4)
            }
        });
        assert_eq!(expanded, Some(0));
    }

    #[test]
    fn test_center_maps_to_first_sector() {
        let layout = SectorLayout::new(Rect::from_size(300.0, 300.0), 42.0);
        let center = layout.bounding_square().center();
        for count in crate::MIN_OPTIONS..=crate::MAX_OPTIONS {
            assert_eq!(baseline_locate(&layout, center, count), Some(0));
        }
    }

    #[test]
    fn test_locate_is_idempotent() {
        let layout = SectorLayout::new(Rect::from_size(320.0, 240.0), 20.0);
        let pointer = Point::new(130.0, 170.0);
        let first = baseline_locate(&layout, pointer, 7);
        assert_eq!(first, baseline_locate(&layout, pointer, 7));
        assert!(first.is_some());
    }

    #[test]
    fn test_no_options_never_hits() {
        let layout = SectorLayout::new(Rect::from_size(100.0, 100.0), 0.0);
        assert_eq!(baseline_locate(&layout, Point::new(50.0, 50.0), 0), None);
    }
}
