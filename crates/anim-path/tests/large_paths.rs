//! Simplification on long paths.
//!
//! Realistic traced outlines run to tens of thousands of points. These run on
//! the default test thread stack.

use anim_core::Point;
use anim_path::{simplify, simplify_flat};

/// Points on a convex arc; every interior point sits off its chord.
fn parabola(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f32;
            Point::new(x, x * x * 1e-3)
        })
        .collect()
}

#[test]
fn test_hundred_thousand_point_arc() {
    let arc = parabola(100_000);
    let s = simplify(&arc, 0.0);
    assert_eq!(s.first(), arc.first());
    assert_eq!(s.last(), arc.last());
    assert!(s.len() > 2);
    assert!(s.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn test_long_straight_line_collapses() {
    let line: Vec<Point> = (0..50_000).map(|i| Point::new(i as f32, 0.0)).collect();
    assert_eq!(simplify(&line, 0.5), vec![line[0], line[49_999]]);
}

#[test]
fn test_noisy_line_respects_tolerance() {
    // Deterministic jitter in [-0.2, 0.2].
    let noisy: Vec<Point> = (0..20_000)
        .map(|i| {
            let jitter = ((i * 7919) % 401) as f32 / 1000.0 - 0.2;
            Point::new(i as f32, jitter)
        })
        .collect();

    let s = simplify(&noisy, 0.5);
    assert_eq!(s.len(), 2);

    let tight = simplify(&noisy, 0.05);
    assert!(tight.len() > 2);
    assert_eq!(simplify(&tight, 0.05), tight);
}

#[test]
fn test_flat_buffer_large() {
    let arc = parabola(10_000);
    let flat: Vec<f32> = arc.iter().flat_map(|p| [p.x, p.y]).collect();
    let out = simplify_flat(&flat, 1.0).unwrap();
    assert_eq!(out.len() % 2, 0);
    assert_eq!(&out[..2], &flat[..2]);
    assert_eq!(&out[out.len() - 2..], &flat[flat.len() - 2..]);
}
