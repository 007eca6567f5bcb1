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

//! Brushes and access to them

use serde::{Deserialize, Serialize};

use super::faces::Face;

/// A convex solid, described by the faces that bound it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub faces: Box<[Face]>,
}

/// Something that holds brushes, in a fixed order.
pub trait HasBrushes {
    type BrushesIter<'a>: Iterator<Item = &'a Brush>
    where
        Self: 'a;

    fn brushes_iter(&self) -> Self::BrushesIter<'_>;
    fn brushes_len(&self) -> u32;
    fn get_brush(&self, index: u32) -> Option<&Brush>;

    /// Every face of every brush, brush by brush.
    fn faces_iter(&self) -> impl Iterator<Item = &Face> + '_ {
        self.brushes_iter().flat_map(|b| b.faces.iter())
    }

    fn faces_len(&self) -> usize {
        self.brushes_iter().map(|b| b.faces.len()).sum()
    }
}
