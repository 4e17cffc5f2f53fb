use std::{cmp::Ordering, collections::{HashMap, HashSet}};

use smallvec::{SmallVec, smallvec};

use crate::{Coordinate, Edge, Point, Polygon, TriangulationError, VertexId, Winding, diagonal::ccw_neighbours};

type Neighbours = SmallVec<[VertexId; 4]>;

/// Splits `polygon` along non-crossing `diagonals`, returning each resulting piece as a counterclockwise cycle of
/// vertices
pub(crate) fn split_pieces<C: Coordinate>(polygon: &Polygon<C>, winding: Winding, diagonals: &[Edge<VertexId>]) -> Result<Vec<Vec<VertexId>>, TriangulationError> {
    let mut chords: HashMap<VertexId, Neighbours> = HashMap::new();
    for d in diagonals {
        chords.entry(d.a).or_default().push(d.b);
        chords.entry(d.b).or_default().push(d.a);
    }

    // Around each vertex, neighbours run counterclockwise through the interior: boundary successor, chords,
    // boundary predecessor
    let mut fans: HashMap<VertexId, Neighbours> = HashMap::with_capacity(polygon.len());
    for v in polygon.vertices() {
        let (prev, next) = ccw_neighbours(polygon, winding, v);
        let mut fan: Neighbours = smallvec![next];
        if let Some(chords) = chords.get(&v) {
            let origin = polygon.point(v);
            let reference = polygon.point(next) - origin;
            let mut chords = chords.clone();
            chords.sort_by(|&a, &b| ccw_angle_cmp(reference, polygon.point(a) - origin, polygon.point(b) - origin));
            fan.extend(chords);
        }
        fan.push(prev);
        fans.insert(v, fan);
    }

    let mut starts = Vec::with_capacity(polygon.len() + diagonals.len() * 2);
    for v in polygon.vertices() {
        starts.push((v, ccw_neighbours(polygon, winding, v).1));
    }
    for d in diagonals {
        starts.push((d.a, d.b));
        starts.push((d.b, d.a));
    }

    let mut visited = HashSet::with_capacity(starts.len());
    let mut pieces = Vec::with_capacity(diagonals.len() + 1);
    for &start in &starts {
        if visited.contains(&start) {
            continue;
        }

        let mut piece = Vec::new();
        let (mut u, mut v) = start;
        loop {
            if !visited.insert((u, v)) {
                return Err(TriangulationError::degenerate(format!("Half edge {} -> {} is reached twice while tracing pieces", u, v)));
            }
            piece.push(u);

            let fan = fans.get(&v).ok_or_else(|| TriangulationError::degenerate(format!("{} has no neighbours", v)))?;
            let w = match fan.iter().position(|&n| n == u) {
                Some(i) if i > 0 => fan[i - 1],
                _ => return Err(TriangulationError::degenerate(format!("Half edge {} -> {} leaves the polygon", u, v))),
            };
            u = v;
            v = w;
            if (u, v) == start {
                break;
            }
        }
        pieces.push(piece);
    }

    if pieces.len() != diagonals.len() + 1 {
        return Err(TriangulationError::degenerate(format!("{} diagonals produced {} pieces", diagonals.len(), pieces.len())));
    }
    Ok(pieces)
}

/// Orders directions `a` and `b` by counterclockwise angle from `reference`, in `[0, 2π)`
fn ccw_angle_cmp<C: Coordinate>(reference: Point<C>, a: Point<C>, b: Point<C>) -> Ordering {
    let half = |d: Point<C>| {
        let cross = reference.cross(&d);
        if cross > C::zero() || (cross.is_zero() && reference.dot(&d) > C::zero()) { 0 } else { 1 }
    };
    half(a).cmp(&half(b)).then_with(|| {
        let cross = a.cross(&b);
        if cross > C::zero() {
            Ordering::Less
        } else if cross < C::zero() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}
