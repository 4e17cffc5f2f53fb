use crate::{EarClipTriangulator, ErrorKind, ListBuilder, MonotoneTriangulator, Point, Polygon, Triangle, TriangulationError,
    Triangulator, VertexId, builders};

use super::util;
use super::polygon::polygon;

#[derive(Debug, Default)]
struct Recorder {
    triangles: usize,
    built: bool,
    failed: Option<ErrorKind>,
}

struct RecordingBuilder<'r>(&'r mut Recorder);

impl<'r> ListBuilder<i64> for RecordingBuilder<'r> {
    type Output = usize;

    fn add_triangle(&mut self, polygon: &Polygon<i64>, vi0: VertexId, vi1: VertexId, vi2: VertexId) {
        assert!(polygon.contains(vi0) && polygon.contains(vi1) && polygon.contains(vi2));
        self.0.triangles += 1;
    }

    fn build(self) -> Self::Output {
        self.0.built = true;
        self.0.triangles
    }

    fn fail(self, error: &TriangulationError) {
        self.0.failed = Some(error.kind());
    }
}

#[test]
fn build_is_called_on_success() {
    let star = polygon(&util::polygon::star());
    let mut recorder = Recorder::default();
    let count = MonotoneTriangulator.triangulate_into(&star, RecordingBuilder(&mut recorder)).expect("Triangulation failed");
    assert_eq!(count, 6);
    assert!(recorder.built);
    assert_eq!(recorder.failed, None);
}

#[test]
fn fail_is_called_on_error() {
    let bowtie = polygon(&[[0, 0], [2, 2], [2, 0], [0, 2]]);
    let mut recorder = Recorder::default();
    let error = EarClipTriangulator.triangulate_into(&bowtie, RecordingBuilder(&mut recorder)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Unsupported);
    assert!(!recorder.built);
    assert_eq!(recorder.failed, Some(ErrorKind::Unsupported));
}

#[test]
fn flat_index_list() {
    let spiral = polygon(&util::polygon::spiral());
    let mut indices: Vec<VertexId> = Vec::new();
    EarClipTriangulator.triangulate_into(&spiral, builders::IndexedListBuilder::new(&mut indices)).expect("Triangulation failed");
    assert_eq!(indices.len(), 3 * 12);
    assert!(indices.iter().all(|&v| spiral.contains(v)));
}

#[test]
fn appends_to_existing_list() {
    let square = polygon(&util::polygon::square());
    let marker = Triangle::new(Point::new(0, 0), Point::new(1, 0), Point::new(0, 1));
    let mut triangles = vec![marker];
    MonotoneTriangulator.triangulate_into(&square, builders::DeindexedListBuilder::new(&mut triangles)).expect("Triangulation failed");
    assert_eq!(triangles.len(), 3);
    assert_eq!(triangles[0], marker);
    assert_eq!(triangles[1..].iter().map(|t| t.area2()).sum::<i64>(), square.area2());
}

#[test]
fn failure_truncates_to_existing_list() {
    let bowtie = polygon(&[[0, 0], [2, 2], [2, 0], [0, 2]]);
    let v = bowtie.vertices();
    let mut triangles: Vec<[VertexId; 3]> = vec![[v[0], v[1], v[2]]];
    assert!(EarClipTriangulator.triangulate_into(&bowtie, builders::IndexedListBuilder::new(&mut triangles)).is_err());
    assert_eq!(triangles, vec![[v[0], v[1], v[2]]]);
}
