//! Property tests for the circular histogram descriptor.
//!
//! Neighbourhoods are generated from a seeded RNG so failures reproduce.

use approx::assert_relative_eq;
use chakra::{CghConfig, CircularHistogram, Descriptor, MAX_DISTANCE, Point2D, TWO_PI};
use rand::prelude::*;
use rand::rngs::StdRng;

fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Random neighbourhood of `count` points around `center`, with the center
/// inserted at `central_index`.
fn random_neighborhood(
    rng: &mut StdRng,
    center: Point2D,
    count: usize,
    radius: f64,
    central_index: usize,
) -> Vec<Point2D> {
    let mut points: Vec<Point2D> = (0..count)
        .map(|_| {
            let r = rng.random_range(0.01..radius);
            let a = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
            let p = Point2D::from_polar(r, a);
            Point2D::new(center.x + p.x, center.y + p.y)
        })
        .collect();
    points.insert(central_index.min(points.len()), center);
    points
}

fn computed(neighbors: &[Point2D], central_index: usize, sectors: usize) -> CircularHistogram {
    let mut desc = CircularHistogram::new(0.5, sectors).unwrap();
    desc.compute(neighbors, central_index).unwrap();
    desc
}

#[test]
fn histogram_sums_to_one() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);

    for trial in 0..200 {
        let count = rng.random_range(6..60);
        let central = rng.random_range(0..=count);
        let sectors = rng.random_range(1..64);
        let center = Point2D::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
        let neighbors = random_neighborhood(&mut rng, center, count, 0.5, central);

        let desc = computed(&neighbors, central, sectors);

        assert_eq!(desc.bins().len(), sectors, "trial {}", trial);
        assert!(desc.is_valid(), "trial {}", trial);
        assert!(desc.bins().iter().all(|&v| v >= 0.0), "trial {}", trial);
        assert_relative_eq!(desc.bins().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn distance_to_copy_is_zero() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let neighbors = random_neighborhood(&mut rng, Point2D::ZERO, 20, 0.5, 0);
        let desc = computed(&neighbors, 0, 16);
        let copy = desc.clone();
        assert_relative_eq!(desc.distance(&copy), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..100 {
        let a = computed(&random_neighborhood(&mut rng, Point2D::ZERO, 15, 0.5, 0), 0, 12);
        let b = computed(&random_neighborhood(&mut rng, Point2D::ZERO, 30, 0.5, 0), 0, 12);

        let ab = a.distance(&b);
        let ba = b.distance(&a);
        assert_relative_eq!(ab, ba, epsilon = 1e-15);
        assert!(ab >= 0.0);
        // Both are L1-normalized, so chi-squared is bounded by 1
        assert!(ab <= 1.0 + 1e-9);
    }
}

#[test]
fn dominant_direction_example() {
    // 8 sectors of π/4; seven neighbours roughly along +X
    let center = Point2D::new(2.0, 3.0);
    let mut neighbors = vec![center];
    for i in 0..7 {
        let p = Point2D::from_polar(0.1 + 0.05 * i as f64, 0.02 * (i as f64 + 1.0));
        neighbors.push(Point2D::new(center.x + p.x, center.y + p.y));
    }

    let desc = computed(&neighbors, 0, 8);
    let h = desc.histogram();

    assert!(desc.is_valid());
    let peak = h
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(peak, desc.sector_of(0.0));
    assert_eq!(peak, 4);
    assert!(h[3] > 0.0 && h[5] > 0.0);
    assert!(h[3] < h[4] && h[5] < h[4]);
    assert_relative_eq!(h.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn rotate_by_whole_turns_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    for sectors in [1, 3, 5, 7, 8, 12, 16, 36, 360] {
        let neighbors = random_neighborhood(&mut rng, Point2D::ZERO, 25, 0.5, 0);
        let desc = computed(&neighbors, 0, sectors);

        assert_eq!(desc.rotated(0.0), desc, "sectors = {}", sectors);
        assert_eq!(desc.rotated(TWO_PI), desc, "sectors = {}", sectors);
        assert_eq!(desc.rotated(-TWO_PI), desc, "sectors = {}", sectors);
    }
}

#[test]
fn rotate_there_and_back() {
    let mut rng = StdRng::seed_from_u64(17);
    let neighbors = random_neighborhood(&mut rng, Point2D::ZERO, 25, 0.5, 0);
    let desc = computed(&neighbors, 0, 16);

    for k in -20..=20 {
        let theta = k as f64 * desc.sector_width();
        let mut d = desc.clone();
        d.rotate(theta);
        d.rotate(-theta);
        assert_eq!(d.bins(), desc.bins(), "k = {}", k);
    }
}

#[test]
fn rotation_recovers_turned_scan() {
    // Same keypoint seen after the sensor turned by 5 sectors
    let mut rng = StdRng::seed_from_u64(29);
    let sectors = 24;
    let width = TWO_PI / sectors as f64;
    let turn = 5.0 * width;

    let local: Vec<Point2D> = (0..30)
        .map(|_| {
            // Keep clear of sector boundaries
            let sector = rng.random_range(0..sectors) as f64;
            let offset = rng.random_range(0.2..0.8);
            Point2D::from_polar(
                rng.random_range(0.05..0.4),
                -std::f64::consts::PI + (sector + offset) * width,
            )
        })
        .collect();
    let turned: Vec<Point2D> = local
        .iter()
        .map(|p| {
            let (s, c) = turn.sin_cos();
            Point2D::new(p.x * c - p.y * s, p.x * s + p.y * c)
        })
        .collect();

    let mut a_pts = vec![Point2D::ZERO];
    a_pts.extend(local);
    let mut b_pts = vec![Point2D::ZERO];
    b_pts.extend(turned);

    let a = computed(&a_pts, 0, sectors);
    let b = computed(&b_pts, 0, sectors);

    // Candidate rotation search, as a matcher would do it
    let best = (0..sectors)
        .map(|k| {
            let theta = k as f64 * width;
            (k, a.rotated(theta).distance(&b))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .unwrap();

    assert_eq!(best.0, 5);
    assert_relative_eq!(best.1, 0.0, epsilon = 1e-12);
}

#[test]
fn uniform_histogram_is_rotation_invariant() {
    let desc = CircularHistogram::from_histogram(1.0, vec![0.25; 4]).unwrap();
    assert_eq!(desc.rotated(desc.sector_width()).histogram(), vec![0.25; 4]);
}

#[test]
fn peak_moves_one_sector() {
    let desc = CircularHistogram::from_histogram(1.0, vec![0.7, 0.1, 0.1, 0.1]).unwrap();
    let rotated = desc.rotated(desc.sector_width());
    assert_eq!(rotated.histogram(), vec![0.1, 0.7, 0.1, 0.1]);
}

#[test]
fn different_sector_counts_are_incomparable() {
    let mut rng = StdRng::seed_from_u64(3);
    let neighbors = random_neighborhood(&mut rng, Point2D::ZERO, 20, 0.5, 0);
    let a = computed(&neighbors, 0, 8);
    let b = computed(&neighbors, 0, 16);

    assert_eq!(a.distance(&b), MAX_DISTANCE);
    assert_eq!(Descriptor::distance(&b, &a), MAX_DISTANCE);
}

#[test]
fn degenerate_neighborhood_is_invalid_and_finite() {
    init_logging();
    let desc = computed(&[Point2D::new(1.0, 1.0)], 0, 8);

    assert!(!desc.is_valid());
    assert!(desc.bins().iter().all(|&v| v == 0.0));

    // Compares without NaN
    let other = computed(&[Point2D::new(1.0, 1.0)], 0, 8);
    assert_eq!(desc.distance(&other), 0.0);
}

#[test]
fn descriptor_from_shipped_config() {
    let config = CghConfig::load(std::path::Path::new("configs/descriptor.yaml")).unwrap();
    assert_eq!(config, CghConfig::default());

    let desc = CircularHistogram::from_config(&config).unwrap();
    assert_eq!(desc.sector_count(), config.sector_count);
    assert_relative_eq!(desc.radius(), config.radius);
    assert_eq!(desc.min_neighbors(), 7);
}

#[test]
fn load_default_reads_shipped_config() {
    let config = CghConfig::load_default().unwrap();
    assert_eq!(config.sector_count, 16);
    assert!(config.validate().is_ok());
}
