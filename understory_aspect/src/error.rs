// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why an image's natural size could not be determined.
///
/// Probe errors never escape a sampling batch; they are logged and the item
/// falls back to a fixed extent.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The image could not be read.
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// The image header could not be decoded.
    #[error("failed to decode image header: {0}")]
    Decode(#[from] image::ImageError),

    /// No image is registered under the requested reference.
    #[error("unknown image reference `{0}`")]
    NotFound(String),
}
