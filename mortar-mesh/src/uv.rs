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

//! Projecting face vertices into texture space

use mortar_levels::Face;
use na::{Rotation3, Unit, Vector2, Vector3};

/// Pick the axis that texture rotation happens about, based on the face normal.
///
/// Y wins if the normal leans more along Y than Z. Otherwise X wins if it
/// dominates both others, and Z is used for everything else, including ties.
pub fn rotation_axis(normal: &Vector3<f32>) -> Unit<Vector3<f32>> {
    let (x, y, z) = (normal.x.abs(), normal.y.abs(), normal.z.abs());

    if y > z {
        Vector3::y_axis()
    } else if x > y && x > z {
        Vector3::x_axis()
    } else {
        Vector3::z_axis()
    }
}

/// The face's U and V axes, scaled then rotated.
pub fn texture_axes(face: &Face) -> (Vector3<f32>, Vector3<f32>) {
    let rot = Rotation3::from_axis_angle(
        &rotation_axis(&face.normal),
        face.rotation.to_radians(),
    );

    let u = face.u_axis / face.scale.x;
    let v = face.v_axis / face.scale.y;

    (rot * u, rot * v)
}

/// Texture coordinates for each point of `face`, given the texture's size in pixels.
///
/// Results aren't clamped or wrapped, so may lie outside `0..1`.
pub fn project(face: &Face, width: u32, height: u32) -> Vec<Vector2<f32>> {
    let (u, v) = texture_axes(face);
    let size = Vector2::new(width as f32, height as f32);

    face.points
        .iter()
        .map(|p| {
            let uv = Vector2::new(p.dot(&u), p.dot(&v)) + face.shift;
            uv.component_div(&size)
        })
        .collect()
}
