use smallvec::SmallVec;

use crate::{Coordinate, ListBuilder, Polygon, TriangleSink, TriangulationError, Unsupported, VertexId, compute_monotone_diagonals, math, subdivision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

/// One y-monotone piece of a polygon, as its two chains merged into sweep order
pub(crate) struct Monotone<'p, C> {
    polygon: &'p Polygon<C>,
    // Top first, bottom last. The top vertex is listed as part of the left chain.
    vertices: SmallVec<[(VertexId, Chain); 16]>,
}

impl<'p, C: Coordinate> Monotone<'p, C> {
    /// Splits a counterclockwise cycle at its top and bottom vertices. Walking forward from the top descends the
    /// left chain; walking backward descends the right chain.
    pub fn new(polygon: &'p Polygon<C>, piece: &[VertexId]) -> Result<Self, TriangulationError> {
        let m = piece.len();
        if m < 3 {
            return Err(TriangulationError::degenerate(format!("Monotone piece needs at least 3 vertices, has {}", m)));
        }

        let order = |a: usize, b: usize| math::sweep_order(polygon.point(piece[a]), polygon.point(piece[b])).then(piece[a].cmp(&piece[b]));
        let top = (0..m).min_by(|&a, &b| order(a, b)).unwrap_or(0);
        let bottom = (0..m).max_by(|&a, &b| order(a, b)).unwrap_or(0);

        let mut left: SmallVec<[usize; 16]> = SmallVec::new();
        let mut i = (top + 1) % m;
        while i != bottom {
            left.push(i);
            i = (i + 1) % m;
        }
        let mut right: SmallVec<[usize; 16]> = SmallVec::new();
        let mut i = (top + m - 1) % m;
        while i != bottom {
            right.push(i);
            i = (i + m - 1) % m;
        }

        let descends = |chain: &[usize]| {
            std::iter::once(top).chain(chain.iter().copied()).chain(std::iter::once(bottom))
                .collect::<SmallVec<[usize; 16]>>()
                .windows(2)
                .all(|w| order(w[0], w[1]).is_lt())
        };
        if !descends(&left) || !descends(&right) {
            return Err(TriangulationError::degenerate(format!("Piece starting at {} is not monotone", piece[top])));
        }

        let mut vertices = SmallVec::with_capacity(m);
        vertices.push((piece[top], Chain::Left));
        let (mut l, mut r) = (0, 0);
        while l < left.len() || r < right.len() {
            let take_left = r == right.len() || (l < left.len() && order(left[l], right[r]).is_lt());
            if take_left {
                vertices.push((piece[left[l]], Chain::Left));
                l += 1;
            } else {
                vertices.push((piece[right[r]], Chain::Right));
                r += 1;
            }
        }
        // The bottom closes whichever chain arrives last
        let last_chain = vertices.last().map_or(Chain::Left, |&(_, chain)| chain);
        let bottom_chain = if last_chain == Chain::Left { Chain::Right } else { Chain::Left };
        vertices.push((piece[bottom], bottom_chain));

        Ok(Self {
            polygon,
            vertices,
        })
    }

    /// Emits the `m - 2` triangles of the piece, each counterclockwise
    pub fn build_triangles(&self, mut emit: impl FnMut(VertexId, VertexId, VertexId)) -> Result<(), TriangulationError> {
        let m = self.vertices.len();
        let point = |v: VertexId| self.polygon.point(v);
        let mut emitted = 0;
        let mut triangle = |a: VertexId, b: VertexId, c: VertexId| {
            emitted += 1;
            emit(a, b, c);
        };

        let mut stack: SmallVec<[(VertexId, Chain); 16]> = SmallVec::new();
        stack.push(self.vertices[0]);
        stack.push(self.vertices[1]);

        for &(u, chain) in &self.vertices[2..] {
            let top_chain = stack.last().map_or(chain, |&(_, c)| c);
            if chain != top_chain {
                // u sees every vertex on the stack across the piece
                for pair in stack.windows(2) {
                    let (s0, s1) = (pair[0].0, pair[1].0);
                    match chain {
                        Chain::Right => triangle(s0, s1, u),
                        Chain::Left => triangle(u, s1, s0),
                    }
                }
                let last = stack[stack.len() - 1];
                stack.clear();
                stack.push(last);
                stack.push((u, chain));
            } else {
                let mut last = match stack.pop() {
                    Some(last) => last,
                    None => return Err(TriangulationError::degenerate("Monotone stack is empty")),
                };
                while let Some(&top) = stack.last() {
                    let sees = match chain {
                        Chain::Left => math::is_left(point(top.0), point(last.0), point(u)),
                        Chain::Right => math::is_left(point(u), point(last.0), point(top.0)),
                    };
                    if !sees {
                        break;
                    }
                    match chain {
                        Chain::Left => triangle(top.0, last.0, u),
                        Chain::Right => triangle(u, last.0, top.0),
                    }
                    last = top;
                    stack.pop();
                }
                stack.push(last);
                stack.push((u, chain));
            }
        }

        if emitted != m - 2 {
            return Err(TriangulationError::degenerate(format!("Monotone piece of {} vertices produced {} triangles", m, emitted)));
        }
        Ok(())
    }
}

/// Partitions `polygon` into monotone pieces and triangulates each one
pub(crate) fn triangulate_pieces<C: Coordinate, LB: ListBuilder<C>>(polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
    let winding = polygon.winding();
    let diagonals = match compute_monotone_diagonals(polygon) {
        Ok(diagonals) => diagonals,
        Err(e) => return Err(polygon.find_self_intersection()
            .map(|(first, second)| TriangulationError::from(Unsupported::SelfIntersection { first, second }))
            .unwrap_or(e)),
    };
    let pieces = subdivision::split_pieces(polygon, winding, &diagonals)?;
    log::debug!("Triangulating {} monotone pieces", pieces.len());

    let mut sink = TriangleSink::new(polygon, builder, winding);
    for piece in &pieces {
        #[cfg(feature = "debugging")]
        crate::debug::svg::snapshot_partition(polygon, &diagonals, piece.first().copied(), crate::debug::svg::SvgOutputLevel::MajorSteps);

        Monotone::new(polygon, piece)?.build_triangles(|a, b, c| sink.add(a, b, c))?;
    }

    if sink.count() + 2 != polygon.len() {
        return Err(TriangulationError::degenerate(format!("{} vertices produced {} triangles", polygon.len(), sink.count())));
    }
    Ok(())
}
