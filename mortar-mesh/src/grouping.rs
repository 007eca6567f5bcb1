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

//! Partitioning faces by the texture they use

use std::collections::HashMap;

use mortar_levels::{Face, HasBrushes};

/// All the faces that use one texture, in the order they were found.
#[derive(Debug, Clone)]
pub struct TextureBucket<'a> {
    name: String,
    key: String,
    faces: Vec<&'a Face>,
}

impl<'a> TextureBucket<'a> {
    /// The texture name as spelled by the first face that used it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The case-folded name this bucket is keyed by.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn faces(&self) -> &[&'a Face] {
        &self.faces
    }

    /// True if at least one face in this bucket would produce triangles.
    pub fn has_geometry(&self) -> bool {
        self.faces.iter().any(|f| !f.is_degenerate())
    }
}

/// Faces grouped by texture name, ignoring case.
/// Buckets are kept in the order their textures were first seen.
#[derive(Debug, Clone, Default)]
pub struct TextureGroups<'a> {
    buckets: Vec<TextureBucket<'a>>,
    lookup: HashMap<String, usize>,
}

/// Texture names are compared without regard to case.
pub fn texture_key(name: &str) -> String {
    name.to_lowercase()
}

impl<'a> TextureGroups<'a> {
    /// Group every face of every brush in `level`.
    pub fn from_level<L: HasBrushes>(level: &'a L) -> TextureGroups<'a> {
        Self::from_faces(level.faces_iter())
    }

    pub fn from_faces<I: IntoIterator<Item = &'a Face>>(faces: I) -> TextureGroups<'a> {
        let mut groups = TextureGroups::default();
        for face in faces {
            groups.insert(face);
        }

        groups
    }

    fn insert(&mut self, face: &'a Face) {
        let name = face.texture_name();
        let key = texture_key(name);

        let idx = match self.lookup.get(&key) {
            Some(idx) => *idx,
            None => {
                self.buckets.push(TextureBucket {
                    name: name.to_string(),
                    key: key.clone(),
                    faces: Vec::new(),
                });
                self.lookup.insert(key, self.buckets.len() - 1);

                self.buckets.len() - 1
            }
        };

        self.buckets[idx].faces.push(face);
    }

    /// Get the bucket for `name`, if any face uses it.
    pub fn get(&self, name: &str) -> Option<&TextureBucket<'a>> {
        self.lookup
            .get(&texture_key(name))
            .map(|idx| &self.buckets[*idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextureBucket<'a>> {
        self.buckets.iter()
    }

    /// Number of distinct textures.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of faces across all buckets.
    pub fn faces_len(&self) -> usize {
        self.buckets.iter().map(|b| b.faces.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortar_levels::{Brush, Level, NULL_TEXTURE};
    use na::{Vector2, Vector3};

    fn face(texture: Option<&str>, n_points: usize) -> Face {
        Face {
            points: (0..n_points)
                .map(|i| Vector3::new(i as f32, (i * i) as f32, 0.0))
                .collect(),
            normal: Vector3::new(0.0, 0.0, 1.0),
            texture: texture.map(str::to_string),
            u_axis: Vector3::new(1.0, 0.0, 0.0),
            v_axis: Vector3::new(0.0, 1.0, 0.0),
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
            shift: Vector2::zeros(),
        }
    }

    fn brush(faces: Vec<Face>) -> Brush {
        Brush {
            faces: faces.into_boxed_slice(),
        }
    }

    #[test]
    fn case_insensitive() {
        let level = Level::new(vec![
            brush(vec![face(Some("WALL"), 4), face(Some("floor"), 4)]),
            brush(vec![face(Some("wall"), 3), face(Some("Wall"), 5)]),
        ]);
        let groups = TextureGroups::from_level(&level);

        assert_eq!(groups.len(), 2);

        let wall = groups.get("wAlL").unwrap();
        assert_eq!(wall.name(), "WALL");
        assert_eq!(wall.key(), "wall");
        assert_eq!(
            wall.faces().iter().map(|f| f.points.len()).collect::<Vec<_>>(),
            vec![4, 3, 5]
        );
    }

    #[test]
    fn no_faces_lost() {
        let level = Level::new(vec![
            brush(vec![face(Some("a"), 0), face(None, 2), face(Some("A"), 4)]),
            brush(vec![face(Some(""), 1), face(Some("b"), 3)]),
            brush(vec![]),
        ]);
        let groups = TextureGroups::from_level(&level);

        assert_eq!(groups.faces_len(), level.faces_len());
        assert_eq!(groups.faces_len(), 5);

        // Missing and empty names share the sentinel bucket
        let null = groups.get(NULL_TEXTURE).unwrap();
        assert_eq!(null.faces().len(), 2);
        assert!(!null.has_geometry());
    }

    #[test]
    fn buckets_in_discovery_order() {
        let level = Level::new(vec![brush(vec![
            face(Some("c"), 3),
            face(Some("a"), 3),
            face(Some("C"), 3),
            face(Some("b"), 3),
        ])]);
        let groups = TextureGroups::from_level(&level);

        let names: Vec<_> = groups.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_level() {
        let level = Level::empty();
        let groups = TextureGroups::from_level(&level);

        assert!(groups.is_empty());
        assert_eq!(groups.faces_len(), 0);
    }
}
