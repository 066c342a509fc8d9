// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image size probes.

use std::collections::HashMap;
use std::future::Future;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::ProbeError;

/// Natural pixel size of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width / height`, or `None` when either side is zero.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(f64::from(self.width) / f64::from(self.height))
        }
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Resolves an image reference to its natural size.
///
/// Implementations must not block for long: sampling runs every probe of a
/// batch concurrently on the host's executor.
pub trait AspectProbe {
    /// Determines the natural size of `image_ref`.
    fn probe(&self, image_ref: &str) -> impl Future<Output = Result<ImageSize, ProbeError>>;
}

impl<P: AspectProbe + ?Sized> AspectProbe for &P {
    fn probe(&self, image_ref: &str) -> impl Future<Output = Result<ImageSize, ProbeError>> {
        (**self).probe(image_ref)
    }
}

/// Reads image headers from the file system.
///
/// Only the header is decoded, so probing large images is cheap. Relative
/// references are resolved against an optional root directory.
#[derive(Clone, Debug, Default)]
pub struct FileProbe {
    root: Option<PathBuf>,
}

impl FileProbe {
    /// Creates a probe that resolves relative references against `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Path an image reference resolves to.
    #[must_use]
    pub fn resolve(&self, image_ref: &str) -> PathBuf {
        let path = Path::new(image_ref.trim_start_matches('/'));
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(image_ref),
        }
    }
}

impl AspectProbe for FileProbe {
    async fn probe(&self, image_ref: &str) -> Result<ImageSize, ProbeError> {
        let path = self.resolve(image_ref);
        let dimensions = ImageReader::open(&path)?
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(dimensions.into())
    }
}

/// Reads image headers from bytes held in memory.
///
/// Useful when the host fetches images itself (for example over HTTP) and
/// only needs their sizes.
#[derive(Clone, Debug, Default)]
pub struct MemoryProbe {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryProbe {
    /// Registers encoded image bytes under `image_ref`.
    pub fn insert(&mut self, image_ref: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(image_ref.into(), bytes);
    }

    /// Removes a registered image.
    pub fn remove(&mut self, image_ref: &str) -> Option<Vec<u8>> {
        self.images.remove(image_ref)
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AspectProbe for MemoryProbe {
    async fn probe(&self, image_ref: &str) -> Result<ImageSize, ProbeError> {
        let bytes = self
            .images
            .get(image_ref)
            .ok_or_else(|| ProbeError::NotFound(image_ref.to_owned()))?;
        let dimensions = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(dimensions.into())
    }
}
