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

use na::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::types::{LevelError, Result};

/// The texture name used for faces that don't reference one.
pub const NULL_TEXTURE: &str = "NULL";

/// One planar, convex polygon bounding a brush.
///
/// Points are ordered consistently around the polygon, but the direction
/// (clockwise or not, seen from `normal`) is up to whatever produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Polygon vertices, in editor units (inches).
    pub points: Vec<Vector3<f32>>,

    /// Unit normal of the supporting plane.
    pub normal: Vector3<f32>,

    #[serde(default)]
    pub texture: Option<String>,

    /// Texture U axis, before scale and rotation.
    pub u_axis: Vector3<f32>,

    /// Texture V axis, before scale and rotation.
    pub v_axis: Vector3<f32>,

    /// Degrees about the face normal.
    #[serde(default)]
    pub rotation: f32,

    pub scale: Vector2<f32>,

    #[serde(default = "Vector2::zeros")]
    pub shift: Vector2<f32>,
}

impl Face {
    /// The name of this face's texture, or `NULL_TEXTURE` if it has none.
    /// An empty name counts as none.
    pub fn texture_name(&self) -> &str {
        match self.texture.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => NULL_TEXTURE,
        }
    }

    /// Faces with less than 3 points have no area and produce no geometry.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Check the parts of this face that meshing relies on but doesn't re-check.
    /// `brush` and `face` are only used for error reporting.
    pub fn validate(&self, brush: usize, face: usize) -> Result<()> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return Err(LevelError::ZeroScale { brush, face });
        }

        let finite = self
            .points
            .iter()
            .chain([&self.normal, &self.u_axis, &self.v_axis])
            .all(|v| v.iter().all(|c| c.is_finite()))
            && self.scale.iter().chain(self.shift.iter()).all(|c| c.is_finite())
            && self.rotation.is_finite();

        if !finite {
            return Err(LevelError::NonFinite { brush, face });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(texture: Option<&str>) -> Face {
        Face {
            points: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ],
            normal: Vector3::new(0.0, 0.0, 1.0),
            texture: texture.map(str::to_string),
            u_axis: Vector3::new(1.0, 0.0, 0.0),
            v_axis: Vector3::new(0.0, 1.0, 0.0),
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
            shift: Vector2::zeros(),
        }
    }

    #[test]
    fn missing_texture_is_null() {
        assert_eq!(face(None).texture_name(), NULL_TEXTURE);
        assert_eq!(face(Some("")).texture_name(), NULL_TEXTURE);
        assert_eq!(face(Some("base/wall")).texture_name(), "base/wall");
    }

    #[test]
    fn zero_scale_rejected() {
        let mut f = face(Some("wall"));
        assert!(f.validate(0, 0).is_ok());

        f.scale.y = 0.0;
        assert!(matches!(
            f.validate(2, 5),
            Err(LevelError::ZeroScale { brush: 2, face: 5 })
        ));
    }

    #[test]
    fn nan_rejected() {
        let mut f = face(Some("wall"));
        f.points[1].z = f32::NAN;
        assert!(matches!(
            f.validate(0, 0),
            Err(LevelError::NonFinite { .. })
        ));
    }
}
