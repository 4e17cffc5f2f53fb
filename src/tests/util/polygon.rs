use rand::Rng;

pub type Ring = Vec<[i64; 2]>;

pub fn square() -> Ring {
    vec![[0, 0], [10, 0], [10, 10], [0, 10]]
}

pub fn square_clockwise() -> Ring {
    vec![[0, 0], [0, 10], [10, 10], [10, 0]]
}

pub fn star() -> Ring {
    vec![[1, 0], [2, 2], [0, 1], [-2, 2], [-1, 0], [-2, -2], [0, -1], [2, -2]]
}

pub fn half_frame() -> Ring {
    vec![[0, 0], [5, 5], [95, 5], [95, 95], [100, 100], [100, 0]]
}

/// Listed clockwise: apex, side vertex, bottom
pub fn arrow_triangle() -> Ring {
    vec![[0, 100], [100, 0], [0, -100]]
}

/// The last vertex dips into the box from the top edge
pub fn box_with_downward_cusp() -> Ring {
    vec![[-100, 100], [-100, -100], [100, -100], [100, 100], [0, 0]]
}

/// The third vertex rises into the box from the bottom edge
pub fn box_with_upward_cusp() -> Ring {
    vec![[-100, 100], [-100, -100], [0, 0], [100, -100], [100, 100]]
}

pub fn comb() -> Ring {
    vec![[0, 0], [30, 0], [30, 10], [25, 4], [20, 10], [15, 4], [10, 10], [5, 4], [0, 10]]
}

pub fn inverted_comb() -> Ring {
    vec![[0, 10], [0, 0], [5, 6], [10, 0], [15, 6], [20, 0], [25, 6], [30, 0], [30, 10]]
}

pub fn hourglass() -> Ring {
    vec![[0, 0], [10, 5], [20, 0], [20, 20], [10, 15], [0, 20]]
}

pub fn spiral() -> Ring {
    vec![
        [0, 0], [60, 0], [60, 60], [10, 60], [10, 20], [40, 20], [40, 40],
        [30, 40], [30, 30], [20, 30], [20, 50], [50, 50], [50, 10], [0, 10],
    ]
}

pub fn all() -> Vec<Ring> {
    vec![
        square(), square_clockwise(), star(), half_frame(), arrow_triangle(), box_with_downward_cusp(),
        box_with_upward_cusp(), comb(), inverted_comb(), hourglass(), spiral(),
    ]
}

/// `n` points evenly spaced on a circle, listed clockwise from the top
pub fn regular(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
            let (x, y) = theta.sin_cos();
            [x * radius, y * radius]
        })
        .collect()
}

/// A star-shaped ring around the origin: one vertex per angular sector, at a random angle within the middle of
/// the sector and a random radius
pub fn random_star<R: Rng>(rng: &mut R, n: usize) -> Ring {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64 + 0.2 + 0.6 * rng.gen::<f64>()) / (n as f64);
            let radius = rng.gen_range(100..=1000) as f64;
            let (y, x) = theta.sin_cos();
            [(x * radius).round() as i64, (y * radius).round() as i64]
        })
        .collect()
}
