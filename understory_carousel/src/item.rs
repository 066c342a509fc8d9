// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One carousel slide, owned by the host.
///
/// Order is significant: it defines adjacency for stepping and snapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier.
    pub id: String,
    /// Image reference handed to the aspect probe.
    pub image_ref: String,
    /// Caption shown on the active slide.
    pub title: String,
}

impl Item {
    /// Creates an item.
    #[must_use]
    pub fn new(id: impl Into<String>, image_ref: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            title: title.into(),
        }
    }
}
