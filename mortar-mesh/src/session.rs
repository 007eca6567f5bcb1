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

//! Keeping a renderer supplied with batches for a level, including reloads

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use mortar_levels::{load_or_empty, MapLoader};

use crate::{
    batch::{BatchBuilder, DrawBatch},
    texture::TextureProvider,
};

/// Toggles owned by the render loop, passed to the renderer each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub wireframe: bool,

    /// Set to have the level reloaded before the next frame.
    pub reload_requested: bool,
}

/// Something that can take finished batches and draw them.
pub trait Renderer {
    type Handle;

    /// Take ownership of a complete new set of batches, dropping the old set.
    fn replace_batches(&mut self, batches: Vec<DrawBatch<Self::Handle>>) -> Result<()>;

    /// Draw the current set of batches.
    fn draw(&mut self, state: &RenderState) -> Result<()>;
}

/// A level file, and the renderer showing it.
pub struct LevelSession<ML, TP, R> {
    loader: ML,
    provider: TP,
    renderer: R,
    builder: BatchBuilder,
    path: PathBuf,

    pub state: RenderState,
}

impl<ML, TP, R> LevelSession<ML, TP, R>
where
    ML: MapLoader,
    TP: TextureProvider,
    TP::Handle: Clone,
    R: Renderer<Handle = TP::Handle>,
{
    /// Create a new session, loading the level at `path` straight away.
    pub fn new<P: Into<PathBuf>>(
        loader: ML,
        provider: TP,
        renderer: R,
        builder: BatchBuilder,
        path: P,
    ) -> Result<Self> {
        let mut session = LevelSession {
            loader,
            provider,
            renderer,
            builder,
            path: path.into(),
            state: RenderState::default(),
        };
        session.reload()?;

        Ok(session)
    }

    /// Throw away the current batches and build new ones from the level file.
    /// A missing file gives an empty level.
    pub fn reload(&mut self) -> Result<()> {
        let level = load_or_empty(&self.loader, &self.path)
            .with_context(|| format!("Error loading level {:?}", self.path))?;

        let batches = self
            .builder
            .build(&level, &mut self.provider)
            .context("Error building level meshes")?;

        info!("Loaded {:?} as {} batches", self.path, batches.len());

        self.renderer
            .replace_batches(batches)
            .context("Error handing batches to renderer")
    }

    pub fn request_reload(&mut self) {
        self.state.reload_requested = true;
    }

    pub fn toggle_wireframe(&mut self) {
        self.state.wireframe = !self.state.wireframe;
    }

    /// Render a single frame, reloading first if that's been requested.
    pub fn frame(&mut self) -> Result<()> {
        if self.state.reload_requested {
            self.state.reload_requested = false;
            self.reload()?;
        }

        self.renderer.draw(&self.state)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
