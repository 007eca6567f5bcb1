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

//! Building the buffers for one texture

use log::trace;
use mortar_levels::Face;

use crate::{
    buffer::MeshBuffer, config::MeshConfig, error::MeshError, triangulate::triangulate, uv,
};

/// Build buffers for a list of faces that all use the same `width` x `height` texture.
///
/// Faces are added in order. Degenerate faces are skipped. Once the next face
/// won't fit under the configured vertex limit, a new buffer is started, so
/// this usually returns one buffer, sometimes more, and none if there was
/// nothing to draw.
pub fn assemble(
    faces: &[&Face],
    width: u32,
    height: u32,
    config: &MeshConfig,
) -> Result<Vec<MeshBuffer>, MeshError> {
    let limit = config.buffer_limit();
    let mut done = Vec::new();
    let mut current = MeshBuffer::new();

    for face in faces {
        if face.is_degenerate() {
            trace!("Skipping face with {} points", face.points.len());
            continue;
        }

        let n = face.points.len();
        if n > limit {
            return Err(MeshError::FaceTooLarge {
                vertices: n,
                max: limit,
            });
        }

        if current.vertex_count() + n > limit {
            trace!(
                "Buffer full at {} vertices, starting another",
                current.vertex_count()
            );
            done.push(std::mem::take(&mut current));
        }

        let triangles = triangulate(&face.points, &face.normal);
        let uvs = uv::project(face, width, height);
        current.push_face(&face.points, config.unit_scale, &face.normal, &uvs, &triangles);
    }

    done.push(current);
    done.retain(|b| !b.is_empty());

    Ok(done)
}
