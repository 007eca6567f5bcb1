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

//! Shared level-building helpers for the integration tests

#![allow(dead_code)]

use mortar_levels::{Brush, Face, Level};
use nalgebra::{Vector2, Vector3};

pub fn face(texture: Option<&str>, points: &[[f32; 3]], normal: [f32; 3]) -> Face {
    let normal = Vector3::from(normal);

    // Pick axes in the face's plane, the way editors do for new faces
    let (u_axis, v_axis) = if normal.z.abs() >= normal.x.abs() && normal.z.abs() >= normal.y.abs() {
        (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0))
    } else if normal.x.abs() >= normal.y.abs() {
        (Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0))
    } else {
        (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0))
    };

    Face {
        points: points.iter().map(|p| Vector3::from(*p)).collect(),
        normal,
        texture: texture.map(str::to_string),
        u_axis,
        v_axis,
        rotation: 0.0,
        scale: Vector2::new(1.0, 1.0),
        shift: Vector2::zeros(),
    }
}

/// An axis-aligned box brush from `min` to `max`, each face using `texture`.
/// Half the faces have their points listed against their normal.
pub fn cuboid(texture: &str, min: [f32; 3], max: [f32; 3]) -> Brush {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    let t = Some(texture);

    let faces = vec![
        face(t, &[[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]], [0.0, 0.0, 1.0]),
        face(t, &[[x0, y0, z0], [x1, y0, z0], [x1, y1, z0], [x0, y1, z0]], [0.0, 0.0, -1.0]),
        face(t, &[[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]], [1.0, 0.0, 0.0]),
        face(t, &[[x0, y0, z0], [x0, y1, z0], [x0, y1, z1], [x0, y0, z1]], [-1.0, 0.0, 0.0]),
        face(t, &[[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]], [0.0, 1.0, 0.0]),
        face(t, &[[x0, y0, z0], [x0, y0, z1], [x1, y0, z1], [x1, y0, z0]], [0.0, -1.0, 0.0]),
    ];

    Brush {
        faces: faces.into_boxed_slice(),
    }
}

pub fn level(brushes: Vec<Brush>) -> Level {
    Level::new(brushes)
}

/// A path in the temp directory that won't clash with other tests.
pub fn scratch_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mortar-{}-{}.json", name, std::process::id()))
}
