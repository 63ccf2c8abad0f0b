use ordered_float::OrderedFloat;

use crate::{Sign, in_circle, orientation};

fn distinct(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut points = points.to_vec();
    points.sort_by_key(|p| (OrderedFloat(p[0]), OrderedFloat(p[1])));
    points.dedup();
    points
}

/// Corners of the convex hull of sorted, distinct points in counterclockwise order, without collinear
/// boundary points. Only the two extremes if every point is collinear.
fn hull_corners(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }

    fn half(points: impl Iterator<Item=[f64; 2]>) -> Vec<[f64; 2]> {
        let mut chain: Vec<[f64; 2]> = Vec::new();
        for p in points {
            while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) != Sign::Positive {
                chain.pop();
            }
            chain.push(p);
        }
        chain.pop();
        chain
    }

    let mut hull = half(points.iter().copied());
    hull.extend(half(points.iter().rev().copied()));
    hull
}

fn on_segment(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> bool {
    orientation(a, b, p) == Sign::Zero
        && p[0] >= a[0].min(b[0]) && p[0] <= a[0].max(b[0])
        && p[1] >= a[1].min(b[1]) && p[1] <= a[1].max(b[1])
}

/// Number of distinct points on the boundary of the convex hull, collinear boundary points included
pub fn hull_size(points: &[[f64; 2]]) -> usize {
    let points = distinct(points);
    let corners = hull_corners(&points);
    if corners.len() < 3 {
        return points.len();
    }
    points.iter()
        .filter(|p| (0..corners.len()).any(|i| on_segment(corners[i], corners[(i + 1) % corners.len()], **p)))
        .count()
}

fn signed_area(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])) / 2.
}

pub fn assert_counterclockwise(points: &[[f64; 2]], triangles: &[[usize; 3]]) {
    for &[a, b, c] in triangles {
        assert_eq!(orientation(points[a], points[b], points[c]), Sign::Positive, "Triangle {:?} is not counterclockwise", [a, b, c]);
    }
}

/// No point lies strictly inside the circumcircle of any triangle
pub fn assert_delaunay(points: &[[f64; 2]], triangles: &[[usize; 3]]) {
    for &[a, b, c] in triangles {
        let (pa, pb, pc) = (points[a], points[b], points[c]);
        for (i, p) in points.iter().enumerate() {
            if *p == pa || *p == pb || *p == pc {
                continue;
            }
            assert_ne!(in_circle(pa, pb, pc, *p), Sign::Positive, "Point {} {:?} is inside the circumcircle of {:?}", i, p, [a, b, c]);
        }
    }
}

/// `2 * (m - 1) - h` triangles for `m` distinct points with `h` on the hull, none if they are all collinear
pub fn assert_triangle_count(points: &[[f64; 2]], triangles: &[[usize; 3]]) {
    let distinct = distinct(points);
    let expected = if hull_corners(&distinct).len() < 3 {
        0
    } else {
        2 * (distinct.len() - 1) - hull_size(&distinct)
    };
    assert_eq!(triangles.len(), expected);
}

/// The triangles exactly tile the convex hull
pub fn assert_area_coverage(points: &[[f64; 2]], triangles: &[[usize; 3]]) {
    let corners = hull_corners(&distinct(points));
    let hull_area = if corners.len() < 3 {
        0.
    } else {
        (1..corners.len() - 1).map(|i| signed_area(corners[0], corners[i], corners[i + 1])).sum()
    };
    let triangle_area: f64 = triangles.iter().map(|&[a, b, c]| signed_area(points[a], points[b], points[c])).sum();
    let tolerance = 1e-9 * hull_area.max(1.);
    assert!((hull_area - triangle_area).abs() <= tolerance, "Triangles cover {} of a hull with area {}", triangle_area, hull_area);
}

pub fn assert_valid_triangulation(points: &[[f64; 2]], triangles: &[[usize; 3]]) {
    assert_counterclockwise(points, triangles);
    assert_triangle_count(points, triangles);
    assert_area_coverage(points, triangles);
    assert_delaunay(points, triangles);
}

/// Rotates each triangle to start at its smallest index and sorts the list, for order independent comparison
pub fn normalized(triangles: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut triangles: Vec<_> = triangles.iter()
        .map(|t| {
            let mut t = *t;
            let min = (0..3).min_by_key(|i| t[*i]).unwrap_or(0);
            t.rotate_left(min);
            t
        })
        .collect();
    triangles.sort_unstable();
    triangles
}
