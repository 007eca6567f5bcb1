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

//! Errors encountered while loading a level.

use thiserror::Error;

/// An error encountered while loading or validating a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Couldn't read level file")]
    Io(#[from] std::io::Error),

    #[error("Malformed level file")]
    Parse(#[from] serde_json::Error),

    /// Projection divides by the texture scale, so it can never be zero.
    #[error("Face {face} of brush {brush} has a zero texture scale")]
    ZeroScale { brush: usize, face: usize },

    #[error("Face {face} of brush {brush} has a non-finite component")]
    NonFinite { brush: usize, face: usize },
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, LevelError>;
