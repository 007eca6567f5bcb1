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

//! The seam between level files and everything else

use std::{io::ErrorKind, path::Path};

use log::warn;

use crate::{
    level::Level,
    types::{LevelError, Result},
};

/// Something that can turn a level file into brushes.
///
/// Implementations should validate what they load (see `Level::validate`),
/// so that nothing downstream has to deal with zero scales.
pub trait MapLoader {
    fn load(&self, path: &Path) -> Result<Level>;
}

/// Load the level at `path`, treating a missing file as an empty level.
/// Any other error is passed on.
pub fn load_or_empty<L: MapLoader + ?Sized>(loader: &L, path: &Path) -> Result<Level> {
    match loader.load(path) {
        Err(LevelError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("Level file {:?} not found, using an empty level", path);
            Ok(Level::empty())
        }
        x => x,
    }
}
