// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_aspect --heading-base-level=0

//! Understory Aspect: asynchronous aspect ratio sampling for image strips.
//!
//! A focal-point strip cannot lay itself out until it knows how wide (or tall)
//! each image is at the strip's fixed cross-axis size. This crate measures
//! natural image sizes concurrently and turns them into main-axis extents:
//!
//! - [`AspectProbe`]: how to find an image's natural size. [`FileProbe`] reads
//!   image headers from disk; [`MemoryProbe`] reads them from bytes the host
//!   already fetched.
//! - [`sample_aspects`]: probes every image concurrently and returns one
//!   [`AspectSample`] per input, in input order. A failed probe yields
//!   [`AspectSample::Fallback`] for that item only.
//! - [`SampleGate`], [`SampleRequest`], [`SampleOutcome`]: generation
//!   bookkeeping so a slow, superseded sample can never overwrite a newer one.
//!
//! ## Example
//!
//! ```rust
//! use futures::executor::block_on;
//! use understory_aspect::{AspectSample, MemoryProbe, SampleGate, SampleRequest};
//! use understory_strip_layout::Axis;
//!
//! let mut png = Vec::new();
//! image::RgbImage::new(8, 4)
//!     .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
//!     .unwrap();
//!
//! let mut probe = MemoryProbe::default();
//! probe.insert("wide.png", png);
//!
//! let mut gate = SampleGate::default();
//! let request = SampleRequest::new(
//!     gate.begin(),
//!     vec!["wide.png".into(), "missing.png".into()],
//!     384.0,
//!     Axis::Horizontal,
//! );
//! let outcome = block_on(request.run(&probe));
//!
//! assert!(gate.accept(outcome.generation));
//! assert_eq!(outcome.samples[0], AspectSample::Measured { ratio: 2.0 });
//! assert_eq!(outcome.samples[1], AspectSample::Fallback);
//! assert_eq!(outcome.main_extents(300.0), vec![768.0, 300.0]);
//! ```

mod error;
mod probe;
mod sample;

pub use error::ProbeError;
pub use probe::{AspectProbe, FileProbe, ImageSize, MemoryProbe};
pub use sample::{AspectSample, SampleGate, SampleOutcome, SampleRequest, sample_aspects};
