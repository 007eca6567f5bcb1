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

//! Resolves a texture name to an image on the filesystem

use std::{
    collections::HashMap,
    path::PathBuf,
};

use log::{debug, warn};

use super::{ResolvedTexture, TextureProvider, FALLBACK_SIZE};
use crate::grouping::texture_key;

/// Looks for textures under a directory, trying each extension in turn.
///
/// The handle is the path of the image that was found, or `None` for the
/// placeholder. Results are cached by case-folded name.
pub struct FsTextureProvider {
    root: PathBuf,
    extensions: Vec<String>,
    fallback: (u32, u32),
    cache: HashMap<String, ResolvedTexture<Option<PathBuf>>>,
}

impl FsTextureProvider {
    pub fn new<P: Into<PathBuf>>(root: P) -> FsTextureProvider {
        FsTextureProvider {
            root: root.into(),
            extensions: vec!["png".to_string(), "tga".to_string(), "jpg".to_string()],
            fallback: (FALLBACK_SIZE, FALLBACK_SIZE),
            cache: HashMap::new(),
        }
    }

    /// Extensions to try, in order, when the name doesn't point at a file itself.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Size of the placeholder. Zero dimensions are bumped up to 1.
    pub fn with_fallback_size(mut self, width: u32, height: u32) -> Self {
        self.fallback = (width.max(1), height.max(1));
        self
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        std::iter::once(self.root.join(name))
            .chain(
                self.extensions
                    .iter()
                    .map(|ext| self.root.join(format!("{}.{}", name, ext))),
            )
            .collect()
    }

    fn find(&self, name: &str) -> Option<(PathBuf, u32, u32)> {
        self.candidates(name)
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match image::image_dimensions(&path) {
                Ok((w, h)) if w > 0 && h > 0 => Some((path, w, h)),
                Ok(_) => {
                    warn!("Texture {:?} has no pixels", path);
                    None
                }
                Err(e) => {
                    warn!("Couldn't read texture {:?}: {}", path, e);
                    None
                }
            })
    }
}

impl TextureProvider for FsTextureProvider {
    type Handle = Option<PathBuf>;

    fn resolve(&mut self, name: &str) -> ResolvedTexture<Option<PathBuf>> {
        let key = texture_key(name);
        if let Some(tex) = self.cache.get(&key) {
            return tex.clone();
        }

        let tex = match self.find(name) {
            Some((path, width, height)) => {
                debug!("Resolved texture {:?} to {:?} ({}x{})", name, path, width, height);
                ResolvedTexture {
                    width,
                    height,
                    handle: Some(path),
                }
            }
            None => {
                warn!("Couldn't find texture {:?}, using placeholder", name);
                ResolvedTexture {
                    width: self.fallback.0,
                    height: self.fallback.1,
                    handle: None,
                }
            }
        };

        self.cache.insert(key, tex.clone());
        tex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mortar-textures-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_texture_uses_fallback() {
        let mut provider = FsTextureProvider::new(scratch_dir("missing"));
        let tex = provider.resolve("base/nothing_here");

        assert_eq!(tex.width, FALLBACK_SIZE);
        assert_eq!(tex.height, FALLBACK_SIZE);
        assert_eq!(tex.handle, None);
    }

    #[test]
    fn custom_fallback_size() {
        let mut provider = FsTextureProvider::new(scratch_dir("custom"))
            .with_fallback_size(0, 32);
        let tex = provider.resolve("nothing");

        assert_eq!((tex.width, tex.height), (1, 32));
    }

    #[test]
    fn finds_by_extension() {
        let dir = scratch_dir("found");
        RgbaImage::from_pixel(16, 8, Rgba([255, 0, 255, 255]))
            .save(dir.join("brick.png"))
            .unwrap();

        let mut provider = FsTextureProvider::new(&dir).with_extensions(vec!["tga", "png"]);
        let tex = provider.resolve("brick");

        assert_eq!((tex.width, tex.height), (16, 8));
        assert_eq!(tex.handle, Some(dir.join("brick.png")));

        // Cached regardless of case
        assert_eq!(provider.resolve("BRICK"), tex);
    }
}
