/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Fan triangulation of convex faces

use na::Vector3;

/// Estimate the normal of a polygon using Newell's method, summing the cross
/// products of consecutive vertex positions.
///
/// Returns a zero vector if the polygon has no area (ie all points are colinear).
pub fn newell_normal(points: &[Vector3<f32>]) -> Vector3<f32> {
    newell_sum(points)
        .try_normalize(f64::EPSILON)
        .map(|n| n.cast::<f32>())
        .unwrap_or_else(Vector3::zeros)
}

/// Unnormalised Newell sum, twice the signed area along each axis.
///
/// Each term is on the order of coord², so this is accumulated in f64 to keep
/// small faces far from the origin from losing their sign.
fn newell_sum(points: &[Vector3<f32>]) -> Vector3<f64> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(Vector3::zeros(), |acc: Vector3<f64>, (a, b)| {
            acc + a.cast::<f64>().cross(&b.cast::<f64>())
        })
}

/// True if the points wind the opposite way to `plane_normal`.
/// Polygons with no area are never considered reversed.
pub fn is_reversed(points: &[Vector3<f32>], plane_normal: &Vector3<f32>) -> bool {
    newell_sum(points).dot(&plane_normal.cast::<f64>()) < 0.0
}

/// Triangulate a convex polygon as a fan around its first point.
///
/// Indices are relative to the first point. Every triangle winds so that its
/// normal agrees with `plane_normal`. Polygons with less than 3 points give
/// no triangles.
pub fn triangulate(points: &[Vector3<f32>], plane_normal: &Vector3<f32>) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let reversed = is_reversed(points, plane_normal);
    (1..n as u32 - 1)
        .map(|i| {
            if reversed {
                [0, i + 1, i]
            } else {
                [0, i, i + 1]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri_normal(points: &[Vector3<f32>], tri: &[u32; 3]) -> Vector3<f32> {
        let v0 = points[tri[0] as usize];
        let v1 = points[tri[1] as usize];
        let v2 = points[tri[2] as usize];

        (v1 - v0).cross(&(v2 - v0))
    }

    fn hexagon(z: f32) -> Vec<Vector3<f32>> {
        (0..6)
            .map(|i| {
                let a = (i as f32) * std::f32::consts::PI / 3.0;
                Vector3::new(a.cos() * 32.0 + 100.0, a.sin() * 32.0 - 50.0, z)
            })
            .collect()
    }

    #[test]
    fn triangle_count() {
        let up = Vector3::new(0.0, 0.0, 1.0);
        let points = hexagon(0.0);

        for n in 0..=6 {
            let expected = if n < 3 { 0 } else { n - 2 };
            assert_eq!(triangulate(&points[..n], &up).len(), expected);
        }
    }

    #[test]
    fn winding_agrees_with_normal() {
        let up = Vector3::new(0.0, 0.0, 1.0);
        let down = -up;

        let ccw = hexagon(16.0);
        let cw: Vec<_> = ccw.iter().rev().cloned().collect();

        for points in [&ccw, &cw] {
            for normal in [&up, &down] {
                for tri in triangulate(points, normal) {
                    assert!(tri_normal(points, &tri).dot(normal) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn natural_order_kept() {
        let up = Vector3::new(0.0, 0.0, 1.0);
        let quad = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];

        assert_eq!(triangulate(&quad, &up), vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(triangulate(&quad, &-up), vec![[0, 2, 1], [0, 3, 2]]);
    }

    #[test]
    fn newell_is_unit() {
        let n = newell_normal(&hexagon(-8.0));
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-4);
    }

    #[test]
    fn small_faces_far_from_origin() {
        let up = Vector3::new(0.0, 0.0, 1.0);

        for &offset in &[4096.0f32, 8192.0, 12288.0, 16384.0] {
            for &width in &[0.5f32, 1.0, 1.5, 2.0] {
                let (ox, oy) = (offset, offset - width);
                let quad = [
                    Vector3::new(ox, oy, 64.0),
                    Vector3::new(ox + width, oy, 64.0),
                    Vector3::new(ox + width, oy + width, 64.0),
                    Vector3::new(ox, oy + width, 64.0),
                ];

                assert!(!is_reversed(&quad, &up), "reversed at {} w={}", offset, width);
                assert_eq!(triangulate(&quad, &up), vec![[0, 1, 2], [0, 2, 3]]);
                assert!((newell_normal(&quad) - up).norm() < 1e-4);
            }
        }
    }

    #[test]
    fn colinear_not_reversed() {
        let line = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0),
        ];

        assert_eq!(newell_normal(&line), Vector3::zeros());
        assert_eq!(
            triangulate(&line, &Vector3::new(0.0, 0.0, -1.0)),
            vec![[0, 1, 2]]
        );
    }
}
