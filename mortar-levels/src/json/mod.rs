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

//! Loading levels from JSON brush dumps.
//!
//! A brush dump is what an editor or compiler writes out after it has already
//! clipped each brush's planes into polygons:
//!
//! ```json
//! { "brushes": [ { "faces": [ {
//!     "points": [[0, 0, 0], [64, 0, 0], [64, 64, 0]],
//!     "normal": [0, 0, 1],
//!     "texture": "base/floor",
//!     "u_axis": [1, 0, 0],
//!     "v_axis": [0, -1, 0],
//!     "rotation": 0,
//!     "scale": [1, 1],
//!     "shift": [0, 0]
//! } ] } ] }
//! ```

use std::{fs::File, io::BufReader, path::Path};

use log::debug;

use crate::{
    level::Level,
    loader::MapLoader,
    traits::HasBrushes,
    types::Result,
};

/// Reads brush dumps from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

impl JsonLoader {
    /// Parse and validate a brush dump that's already in memory.
    pub fn from_slice(data: &[u8]) -> Result<Level> {
        let level: Level = serde_json::from_slice(data)?;
        level.validate()?;

        Ok(level)
    }
}

impl MapLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<Level> {
        let file = File::open(path)?;
        let level: Level = serde_json::from_reader(BufReader::new(file))?;
        level.validate()?;

        debug!(
            "Loaded {:?}: {} brushes, {} faces",
            path,
            level.brushes_len(),
            level.faces_len()
        );

        Ok(level)
    }
}
