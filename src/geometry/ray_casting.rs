use geo::Coord;

/// Even-odd point-in-polygon test over a ring of (x, y) vertices.
///
/// A horizontal ray is cast from the point towards +x and every edge it crosses
/// flips the result. The first vertex implicitly connects to the last one, so a
/// ring may or may not repeat its opening vertex at the end.
///
/// Points lying exactly on an edge follow the half-open convention of the
/// `(yi > y) != (yj > y)` test: for an axis-aligned rectangle the bottom and left
/// edges are inside, the top and right edges are outside.
///
/// Rings with fewer than 3 vertices never contain anything.
pub fn point_in_polygon(point: Coord, ring: &[Coord]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let Coord { x, y } = point;
    let mut inside = false;
    let mut prev = ring[ring.len() - 1];

    for &curr in ring {
        let Coord { x: xi, y: yi } = curr;
        let Coord { x: xj, y: yj } = prev;

        // yi != yj here, so the division is safe
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }

        prev = curr;
    }

    inside
}
