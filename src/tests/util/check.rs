use std::collections::HashMap;

use crate::{Coordinate, Edge, Polygon, VertexId, math};

/// Asserts `triangles` tile `polygon`: `n - 2` triangles in the polygon's winding, every boundary edge used once
/// and every other edge shared by exactly two triangles
pub fn assert_covers<C: Coordinate>(polygon: &Polygon<C>, triangles: &[[VertexId; 3]]) {
    assert_eq!(triangles.len(), polygon.len() - 2, "Wrong triangle count");

    let ccw = polygon.area2() >= C::zero();
    let mut uses: HashMap<Edge<VertexId>, usize> = HashMap::new();
    for &[a, b, c] in triangles {
        let area2 = math::area2(polygon.point(a), polygon.point(b), polygon.point(c));
        assert!(area2.is_zero() || (area2 > C::zero()) == ccw, "Triangle {} {} {} has the wrong winding", a, b, c);
        for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
            *uses.entry(e).or_default() += 1;
        }
    }

    for e in polygon.edges() {
        assert_eq!(uses.remove(&e), Some(1), "Boundary edge {} should be used by one triangle", e);
    }
    for (e, count) in uses {
        assert_eq!(count, 2, "Diagonal {} should be shared by two triangles", e);
    }
}

/// Asserts the triangle areas sum exactly to the polygon's area
pub fn assert_area_matches<C: Coordinate>(polygon: &Polygon<C>, triangles: &[[VertexId; 3]]) {
    let sum = triangles.iter().fold(C::zero(), |sum, &[a, b, c]| {
        sum + math::area2(polygon.point(a), polygon.point(b), polygon.point(c))
    });
    assert!(sum == polygon.area2(), "Triangle areas sum to {:?}, polygon area is {:?}", sum, polygon.area2());
}
