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

//! A complete, loaded level

use serde::{Deserialize, Serialize};

use crate::traits::brushes::*;
use crate::types::Result;

/// A loaded level. Immutable once loaded; reloading makes a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub(crate) brushes: Box<[Brush]>,
}

impl Level {
    pub fn new(brushes: Vec<Brush>) -> Level {
        Level {
            brushes: brushes.into_boxed_slice(),
        }
    }

    /// A level with no brushes, used when there is nothing to load.
    pub fn empty() -> Level {
        Level::default()
    }

    /// Validate every face, failing on the first bad one.
    pub fn validate(&self) -> Result<()> {
        for (brush_idx, brush) in self.brushes.iter().enumerate() {
            for (face_idx, face) in brush.faces.iter().enumerate() {
                face.validate(brush_idx, face_idx)?;
            }
        }

        Ok(())
    }
}

impl HasBrushes for Level {
    type BrushesIter<'a> = std::slice::Iter<'a, Brush>;

    fn brushes_iter(&self) -> Self::BrushesIter<'_> {
        self.brushes.iter()
    }

    fn brushes_len(&self) -> u32 {
        self.brushes.len() as u32
    }

    fn get_brush(&self, index: u32) -> Option<&Brush> {
        self.brushes.get(index as usize)
    }
}
