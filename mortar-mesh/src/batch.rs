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

//! Building every draw batch for a level

use log::{debug, info};
use mortar_levels::{Face, HasBrushes};

use crate::{
    assemble::assemble,
    buffer::MeshBuffer,
    config::MeshConfig,
    error::MeshError,
    grouping::TextureGroups,
    texture::{ResolvedTexture, TextureProvider},
};

/// Everything needed for one draw call: a texture and the geometry that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch<H> {
    /// The texture name, as spelled by the first face that used it.
    pub texture_name: String,
    pub texture: ResolvedTexture<H>,
    pub mesh: MeshBuffer,
}

impl<H> DrawBatch<H> {
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// A texture bucket that's had its texture looked up, waiting to be assembled.
struct Job<'a, H> {
    name: &'a str,
    faces: &'a [&'a Face],
    texture: ResolvedTexture<H>,
}

/// Builds draw batches from levels.
#[derive(Debug, Clone, Default)]
pub struct BatchBuilder {
    config: MeshConfig,
}

impl BatchBuilder {
    pub fn new(config: MeshConfig) -> BatchBuilder {
        BatchBuilder { config }
    }

    /// Build batches for every texture used in `level`.
    ///
    /// Batches come out in the order textures were first used. Textures with
    /// no drawable faces produce no batches, and never get resolved. A texture
    /// with too many vertices for one buffer produces several batches in a row.
    pub fn build<L, P>(
        &self,
        level: &L,
        provider: &mut P,
    ) -> Result<Vec<DrawBatch<P::Handle>>, MeshError>
    where
        L: HasBrushes,
        P: TextureProvider,
        P::Handle: Clone,
    {
        let groups = TextureGroups::from_level(level);
        debug!(
            "Grouped {} faces into {} textures",
            groups.faces_len(),
            groups.len()
        );

        let mut jobs = Vec::with_capacity(groups.len());
        for bucket in groups.iter() {
            if !bucket.has_geometry() {
                debug!("Dropping texture {:?}, nothing to draw", bucket.name());
                continue;
            }

            let texture = provider.resolve(bucket.name());
            if texture.width == 0 || texture.height == 0 {
                return Err(MeshError::EmptyTexture(bucket.name().to_string()));
            }

            jobs.push(Job {
                name: bucket.name(),
                faces: bucket.faces(),
                texture,
            });
        }

        let meshes = self.assemble_all(&jobs)?;

        let mut batches = Vec::with_capacity(jobs.len());
        for (job, buffers) in jobs.into_iter().zip(meshes) {
            for mesh in buffers {
                batches.push(DrawBatch {
                    texture_name: job.name.to_string(),
                    texture: job.texture.clone(),
                    mesh,
                });
            }
        }

        info!(
            "Built {} batches: {} vertices, {} triangles",
            batches.len(),
            batches.iter().map(DrawBatch::vertex_count).sum::<usize>(),
            batches.iter().map(DrawBatch::triangle_count).sum::<usize>()
        );

        Ok(batches)
    }

    #[cfg(not(feature = "parallel"))]
    fn assemble_all<H>(&self, jobs: &[Job<'_, H>]) -> Result<Vec<Vec<MeshBuffer>>, MeshError> {
        jobs.iter()
            .map(|job| self.assemble_job(job.faces, job.texture.width, job.texture.height))
            .collect()
    }

    /// Buckets don't depend on each other, so they can be assembled on a thread pool.
    /// Results come back in the same order as the sequential version.
    #[cfg(feature = "parallel")]
    fn assemble_all<H>(&self, jobs: &[Job<'_, H>]) -> Result<Vec<Vec<MeshBuffer>>, MeshError> {
        use rayon::prelude::*;

        let sizes: Vec<_> = jobs
            .iter()
            .map(|job| (job.faces, job.texture.width, job.texture.height))
            .collect();

        sizes
            .par_iter()
            .map(|(faces, width, height)| self.assemble_job(faces, *width, *height))
            .collect()
    }

    fn assemble_job(
        &self,
        faces: &[&Face],
        width: u32,
        height: u32,
    ) -> Result<Vec<MeshBuffer>, MeshError> {
        assemble(faces, width, height, &self.config)
    }
}
