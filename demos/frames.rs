//! Image-file helpers shared by the demo binaries

use anyhow::{Context, Result};
use lowpoly_core::Frame;
use lowpoly_pipeline::FrameSource;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Decode an image file into an RGBA frame
pub fn load_frame(path: &Path) -> Result<Frame> {
    let image = image::open(path)
        .with_context(|| format!("failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Frame::new(width, height, image.into_raw())?)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// A directory of still images played back as video, in file-name order
pub struct ImageSequence {
    paths: std::vec::IntoIter<PathBuf>,
}

impl ImageSequence {
    pub fn open(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
            if entry.file_type().is_file() && is_image(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        if paths.is_empty() {
            anyhow::bail!("no image files found in {}", dir.display());
        }

        Ok(Self {
            paths: paths.into_iter(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }

    /// Dimensions of the next frame, read from the file header only
    pub fn peek_dimensions(&self) -> Result<(u32, u32)> {
        let path = self
            .paths
            .as_slice()
            .first()
            .context("image sequence is exhausted")?;
        image::image_dimensions(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

impl FrameSource for ImageSequence {
    fn next_frame(&mut self) -> Option<Frame> {
        // undecodable files are skipped rather than ending playback
        for path in self.paths.by_ref() {
            match load_frame(&path) {
                Ok(frame) => return Some(frame),
                Err(err) => warn!(path = %path.display(), error = %err, "skipping frame"),
            }
        }
        None
    }
}
