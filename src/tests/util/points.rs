use rand::{Rng, SeedableRng, rngs::StdRng};

use super::vtest::VTest;

pub fn square() -> Vec<[f64; 2]> {
    vec![[0., 0.], [1., 0.], [0., 1.], [1., 1.]]
}

pub fn triangle() -> Vec<[f64; 2]> {
    vec![[0., 0.], [2., 0.], [1., 1.73]]
}

/// `n` evenly spaced points on the line through the origin in direction `(dx, dy)`
pub fn collinear(n: usize, dx: f64, dy: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| [i as f64 * dx, i as f64 * dy]).collect()
}

/// `w` by `h` points with unit spacing, listed row by row
pub fn grid(w: usize, h: usize) -> Vec<[f64; 2]> {
    (0..h).flat_map(|y| (0..w).map(move |x| [x as f64, y as f64])).collect()
}

/// `n` points evenly spaced around a circle
pub fn circle(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * radius, y * radius]
    }).collect()
}

/// `n` points uniformly distributed in `[-100, 100)` squared, reproducible from `seed`
pub fn random(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| [rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)]).collect()
}

/// Random points on the integer lattice, so duplicates, collinear runs and co-circular quadruples are common
pub fn random_lattice(n: usize, extent: i32, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| [rng.gen_range(0..extent) as f64, rng.gen_range(0..extent) as f64]).collect()
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}
