use crate::{Coordinate, EarClipTriangulator, ErrorKind, InputError, ListBuilder, Polygon, TriangulationError, Triangulator, Unsupported,
    VertexId, build_polygon, builders};

use super::util;
use super::polygon::polygon;

fn input_error<C: Coordinate>(result: Result<Polygon<C>, TriangulationError>) -> InputError {
    match result {
        Err(TriangulationError::InvalidInput(e)) => e,
        Err(e) => panic!("Unexpected error {}", e),
        Ok(p) => panic!("Built {:?}", p),
    }
}

#[test]
fn not_enough_vertices() {
    assert_eq!(input_error(build_polygon::<i64, _, _>(Vec::<[i64; 2]>::new())), InputError::NotEnoughVertices(0));
    assert_eq!(input_error(build_polygon::<i64, _, _>(vec![[0i64, 0], [1, 1]])), InputError::NotEnoughVertices(2));
}

#[test]
fn repeated_vertex() {
    assert_eq!(input_error(build_polygon::<i64, _, _>(vec![[0i64, 0], [1, 0], [1, 0], [0, 1]])), InputError::RepeatedVertex(1));
    // The ring closes on its own, so repeating the first point at the end is an error too
    assert_eq!(input_error(build_polygon::<i64, _, _>(vec![[0i64, 0], [1, 0], [1, 1], [0, 0]])), InputError::RepeatedVertex(3));
}

#[test]
fn nan_coordinate() {
    let result = build_polygon::<f64, _, _>(vec![[0., 0.], [f64::NAN, 1.], [1., 1.]]);
    assert_eq!(input_error(result), InputError::UnorderedCoordinate(1));
}

#[test]
fn bowtie() {
    let bowtie = polygon(&[[0, 0], [2, 2], [2, 0], [0, 2]]);
    match EarClipTriangulator.triangulate_indexed(&bowtie) {
        Err(TriangulationError::Unsupported(Unsupported::SelfIntersection { first, second })) => {
            assert!(!first.is_adjacent(&second));
        },
        other => panic!("Unexpected result {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn error_kinds() {
    let error = build_polygon::<i32, _, _>(vec![[0i32, 0]]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidInput);
    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(error.to_string(), "Polygon only contains 1 vertices");
}

#[test]
#[should_panic]
fn removed_vertex_is_stale() {
    let mut square = polygon(&util::polygon::square());
    let v = square.vertices();
    square.remove(v[2]).expect("Removal failed");
    square.point(v[2]);
}

/// Ear clipping with the simplicity check skipped
struct UncheckedEarClipper;

impl Triangulator for UncheckedEarClipper {
    fn build_triangles<C: Coordinate, LB: ListBuilder<C>>(&self, polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
        crate::ear_clip::clip_ears_unchecked(polygon, builder)
    }
}

/// A square whose left side doubles back on itself as a spike. One ear can be clipped before none remain.
fn spiked_square() -> Polygon<i64> {
    polygon(&[[0, 10], [0, 20], [0, 0], [10, 0], [10, 10]])
}

#[test]
fn ears_run_out() {
    let spiked = spiked_square();
    assert!(spiked.find_self_intersection().is_some());

    let mut triangles: Vec<[VertexId; 3]> = Vec::new();
    let mut builder = builders::IndexedListBuilder::new(&mut triangles);
    match crate::ear_clip::clip_ears_unchecked(&spiked, &mut builder) {
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::DegenerateGeometry);
            assert!(e.to_string().contains("No ears remain"), "Unexpected message {}", e);
        },
        Ok(()) => panic!("Clipped a ring with no ears"),
    }
    assert_eq!(triangles.len(), 1);
}

#[test]
fn ears_run_out_truncates_output() {
    let spiked = spiked_square();
    let v = spiked.vertices();
    let existing = [v[2], v[3], v[4]];
    let mut triangles: Vec<[VertexId; 3]> = vec![existing];

    match UncheckedEarClipper.triangulate_into(&spiked, builders::IndexedListBuilder::new(&mut triangles)) {
        Err(e) => assert_eq!(e.kind(), ErrorKind::DegenerateGeometry),
        Ok(t) => panic!("Produced {} triangles", t.len()),
    }
    assert_eq!(triangles, vec![existing]);
}
