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

//! Flat vertex and index buffers for one draw call

use na::{Vector2, Vector3};

/// Flat positions, normals, UVs and 16 bit indices, ready to be uploaded.
///
/// Positions and normals are 3 floats per vertex, UVs are 2. Every index
/// refers to a vertex already in the buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u16>,

    /// Number of vertices written so far.
    cursor: u32,
}

impl MeshBuffer {
    pub fn new() -> MeshBuffer {
        MeshBuffer::default()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.cursor as usize
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// A buffer with nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0 || self.indices.is_empty()
    }

    /// Append one face. `points` and `uvs` must be the same length, and every
    /// index in `triangles` must be less than it. Positions are multiplied by
    /// `unit_scale`, and every vertex gets the same `normal`.
    ///
    /// The caller must make sure the buffer won't pass `MAX_BUFFER_VERTICES`.
    pub fn push_face(
        &mut self,
        points: &[Vector3<f32>],
        unit_scale: f32,
        normal: &Vector3<f32>,
        uvs: &[Vector2<f32>],
        triangles: &[[u32; 3]],
    ) {
        debug_assert_eq!(points.len(), uvs.len());
        debug_assert!(
            self.cursor as usize + points.len() <= crate::config::MAX_BUFFER_VERTICES
        );

        for tri in triangles {
            for i in tri {
                debug_assert!((*i as usize) < points.len());
                self.indices.push((self.cursor + i) as u16);
            }
        }

        for (point, uv) in points.iter().zip(uvs.iter()) {
            self.positions.extend((point * unit_scale).iter());
            self.normals.extend(normal.iter());
            self.uvs.extend(uv.iter());
        }

        self.cursor += points.len() as u32;
    }

    /// Take the underlying vectors, in the order positions, normals, uvs, indices.
    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<u16>) {
        (self.positions, self.normals, self.uvs, self.indices)
    }
}
