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

//! Brush-based levels, as produced by Quake-family level editors.
//! Only the data model and the seams for loading it live here; turning faces
//! into meshes is done by `mortar-mesh`.

extern crate nalgebra as na;

mod json;
mod level;
mod loader;
pub mod traits;
pub mod types;

pub use json::JsonLoader;
pub use level::Level;
pub use loader::{load_or_empty, MapLoader};
pub use traits::{Brush, Face, HasBrushes, NULL_TEXTURE};
