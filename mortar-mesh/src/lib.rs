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

//! Turns the brush faces of a level into triangle meshes, one set of buffers
//! per texture, ready to be handed to a renderer.

extern crate nalgebra as na;

#[macro_use]
extern crate derive_builder;

pub mod assemble;
pub mod batch;
pub mod buffer;
pub mod config;
pub mod error;
pub mod grouping;
pub mod session;
pub mod texture;
pub mod triangulate;
pub mod uv;

pub use assemble::assemble;
pub use batch::{BatchBuilder, DrawBatch};
pub use buffer::MeshBuffer;
pub use config::{MeshConfig, MeshConfigBuilder};
pub use error::{full_error_display, MeshError};
pub use grouping::{TextureBucket, TextureGroups};
pub use session::{LevelSession, RenderState, Renderer};
pub use texture::{FixedSizeProvider, FsTextureProvider, ResolvedTexture, TextureProvider};
