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

//! Loads a brush dump, builds its draw batches, and logs what a renderer would be given.
//!
//! Usage: `dump-level [LEVEL] [TEXTURE_DIR]`, defaulting to the room next to this file.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use log::info;
use mortar_levels::JsonLoader;
use mortar_mesh::{
    full_error_display, BatchBuilder, DrawBatch, FsTextureProvider, LevelSession,
    MeshConfigBuilder, RenderState, Renderer,
};

/// Stands in for a GPU renderer, logging each batch instead of uploading it.
#[derive(Default)]
struct LogRenderer {
    batches: Vec<DrawBatch<Option<PathBuf>>>,
}

impl Renderer for LogRenderer {
    type Handle = Option<PathBuf>;

    fn replace_batches(&mut self, batches: Vec<DrawBatch<Self::Handle>>) -> Result<()> {
        for batch in batches.iter() {
            info!(
                "{:<24} {:>4}x{:<4} {:>6} verts {:>6} tris  ({})",
                batch.texture_name,
                batch.texture.width,
                batch.texture.height,
                batch.vertex_count(),
                batch.triangle_count(),
                match &batch.texture.handle {
                    Some(path) => path.display().to_string(),
                    None => "placeholder".to_string(),
                }
            );
        }

        // Old batches are dropped here
        self.batches = batches;
        Ok(())
    }

    fn draw(&mut self, state: &RenderState) -> Result<()> {
        info!(
            "Frame: {} draw calls, {} triangles{}",
            self.batches.len(),
            self.batches.iter().map(DrawBatch::triangle_count).sum::<usize>(),
            if state.wireframe { " (wireframe)" } else { "" }
        );
        Ok(())
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", full_error_display(err));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    // Initialise logger
    simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        simplelog::ConfigBuilder::new()
            .set_max_level(log::LevelFilter::Debug)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    let mut args = env::args().skip(1);
    let level_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./demos/dump-level/room.json"));
    let texture_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./demos/dump-level/textures"));

    let config = MeshConfigBuilder::default()
        .build()
        .context("Error building mesh config")?;

    let mut session = LevelSession::new(
        JsonLoader,
        FsTextureProvider::new(texture_dir),
        LogRenderer::default(),
        BatchBuilder::new(config),
        level_path,
    )?;

    session.frame()?;

    // Reloads throw everything away and start again
    session.request_reload();
    session.toggle_wireframe();
    session.frame()?;

    info!(
        "{} batches live for {}",
        session.renderer().batches.len(),
        session.path().display()
    );

    Ok(())
}
