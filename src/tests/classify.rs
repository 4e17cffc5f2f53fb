use crate::{Edge, VertexClassifier, VertexType, Winding, classify_vertex, compute_monotone_diagonals, sweep_sorted_vertices};

use super::util;
use super::polygon::polygon;

use VertexType::*;

fn classes(ring: &[[i64; 2]]) -> Vec<VertexType> {
    let polygon = polygon(ring);
    let classifier = VertexClassifier::new(&polygon);
    polygon.vertices().into_iter().map(|v| classifier.classify(v)).collect()
}

fn diagonals(ring: &[[i64; 2]]) -> Vec<Edge<usize>> {
    let polygon = polygon(ring);
    compute_monotone_diagonals(&polygon)
        .expect("Partition failed")
        .into_iter()
        .map(|d| d.map(|v| v.usize()))
        .collect()
}

fn assert_diagonals(ring: &[[i64; 2]], expected: &[(usize, usize)]) {
    let found = diagonals(ring);
    assert_eq!(found.len(), expected.len(), "Found {:?}", found);
    for &(a, b) in expected {
        assert!(found.contains(&Edge::new(a, b)), "Missing {} - {} in {:?}", a, b, found);
    }
}

#[test]
fn square() {
    assert_eq!(classes(&util::polygon::square()), vec![Regular, End, Regular, Start]);
    assert_eq!(classes(&util::polygon::square_clockwise()), vec![Regular, Start, Regular, End]);
    assert_diagonals(&util::polygon::square(), &[]);
}

#[test]
fn clockwise_triangle() {
    let triangle = polygon(&util::polygon::arrow_triangle());
    let classifier = VertexClassifier::new(&triangle);
    assert_eq!(classifier.winding(), Winding::Clockwise);
    assert_eq!(classes(&util::polygon::arrow_triangle()), vec![Start, Regular, End]);
    assert_eq!(classify_vertex(&triangle, triangle.head()), Start);
}

#[test]
fn star() {
    assert_eq!(classes(&util::polygon::star()), vec![Regular, Start, Merge, Start, Regular, End, Split, End]);
    assert_diagonals(&util::polygon::star(), &[(4, 2), (0, 6)]);
}

#[test]
fn cusps() {
    assert_eq!(classes(&util::polygon::box_with_downward_cusp()), vec![Start, Regular, End, Start, Merge]);
    assert_diagonals(&util::polygon::box_with_downward_cusp(), &[(1, 4)]);

    assert_eq!(classes(&util::polygon::box_with_upward_cusp()), vec![Start, End, Split, End, Regular]);
    assert_diagonals(&util::polygon::box_with_upward_cusp(), &[(4, 2)]);
}

#[test]
fn combs() {
    let comb = classes(&util::polygon::comb());
    for (i, kind) in comb.iter().enumerate() {
        assert_eq!(*kind == Merge, [3, 5, 7].contains(&i), "Vertex {} is {}", i, kind);
    }
    assert_diagonals(&util::polygon::comb(), &[(5, 7), (3, 5), (0, 3)]);

    let inverted = classes(&util::polygon::inverted_comb());
    for (i, kind) in inverted.iter().enumerate() {
        assert_eq!(*kind == Split, [2, 4, 6].contains(&i), "Vertex {} is {}", i, kind);
    }
    assert_diagonals(&util::polygon::inverted_comb(), &[(8, 2), (2, 4), (4, 6)]);
}

#[test]
fn hourglass() {
    assert_eq!(classes(&util::polygon::hourglass()), vec![End, Split, End, Start, Merge, Start]);
    assert_diagonals(&util::polygon::hourglass(), &[(4, 1)]);
}

#[test]
fn nested_notches() {
    assert_diagonals(&util::polygon::half_frame(), &[(0, 2)]);
    assert_diagonals(&[[0, 0], [4, 0], [4, 4], [3, 1], [2, 4], [1, 1], [0, 4]], &[(3, 5), (0, 3)]);
    assert_diagonals(&util::polygon::spiral(), &[(2, 10), (4, 8), (0, 12)]);
}

#[test]
fn sweep_order() {
    let star = polygon(&util::polygon::star());
    let order: Vec<usize> = sweep_sorted_vertices(&star).into_iter().map(|v| v.usize()).collect();
    assert_eq!(order, vec![3, 1, 2, 4, 0, 6, 5, 7]);
}
