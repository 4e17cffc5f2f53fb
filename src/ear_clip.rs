use std::collections::BTreeSet;

use crate::{Coordinate, ListBuilder, Polygon, TriangleSink, TriangulationError, Unsupported, VertexId, Winding, diagonal};

/// Triangulates by repeatedly cutting off an ear: a vertex whose neighbours are joined by a diagonal.
///
/// Works on a private counterclockwise copy of the ring, so the caller's polygon is never modified. Quadratic in
/// the number of vertices.
pub(crate) fn clip_ears<C: Coordinate, LB: ListBuilder<C>>(polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
    if let Some((first, second)) = polygon.find_self_intersection() {
        return Err(Unsupported::SelfIntersection { first, second }.into());
    }
    clip_ears_unchecked(polygon, builder)
}

/// Clips ears without first checking the ring is simple. A ring which is not may run out of ears part way, in which
/// case the triangles already passed to `builder` are left there.
pub(crate) fn clip_ears_unchecked<C: Coordinate, LB: ListBuilder<C>>(polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
    let winding = polygon.winding();
    let (mut ring, sources) = polygon.compacted(winding == Winding::Clockwise);
    let source = |v: VertexId| sources[v.usize()];
    let mut sink = TriangleSink::new(polygon, builder, winding);

    let is_ear = |ring: &Polygon<C>, v: VertexId| {
        diagonal::is_diagonal(ring, Winding::Counterclockwise, ring.prev(v), ring.next(v))
    };

    let mut ears: BTreeSet<VertexId> = ring.vertices()
        .into_iter()
        .filter(|&v| is_ear(&ring, v))
        .collect();
    log::debug!("Ear clipping {} vertices, {} initial ears", ring.len(), ears.len());

    let mut cursor: Option<VertexId> = None;
    while ring.len() > 3 {
        // Continue round-robin from the last clipped slot so ears are taken evenly around the ring
        let ear = cursor
            .and_then(|c| ears.range(c..).next())
            .or_else(|| ears.iter().next())
            .copied();
        let ear = match ear {
            Some(ear) => ear,
            None => return Err(TriangulationError::degenerate(format!("No ears remain with {} vertices left", ring.len()))),
        };

        let v = ring.vertex(ear);
        log::trace!("Clipping ear {} between {} and {}", source(ear), source(v.prev), source(v.next));
        sink.add(source(v.prev), source(ear), source(v.next));

        ears.remove(&ear);
        ring.remove(ear)?;
        cursor = Some(ear);

        for neighbour in [v.prev, v.next] {
            if is_ear(&ring, neighbour) {
                ears.insert(neighbour);
            } else {
                ears.remove(&neighbour);
            }
        }

        #[cfg(feature = "debugging")]
        crate::debug::svg::snapshot_ring(&ring, v.next, crate::debug::svg::SvgOutputLevel::AllSteps);
    }

    let head = ring.head();
    sink.add(source(head), source(ring.next(head)), source(ring.prev(head)));
    Ok(())
}
