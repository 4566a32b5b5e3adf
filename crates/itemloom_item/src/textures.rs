//! The texture blob capability seam.
//!
//! Applying an encoded texture to a skull is a platform capability, not a
//! data-model concern, so it sits behind a trait. The stock implementation
//! stores the blob verbatim on skull-shaped metadata and ignores everything
//! else.

use crate::meta::{ItemMeta, SubMeta};

/// Applies and reads encoded texture blobs on item metadata.
///
/// Implementations must treat non-skull metadata as out of scope: setting is
/// a silent no-op and reading returns `None`.
pub trait TexturesCodec: Send + Sync {
    /// Stores an encoded texture blob on skull-shaped metadata.
    fn set_encoded(&self, meta: &mut ItemMeta, encoded: &str);

    /// Reads the encoded texture blob from skull-shaped metadata.
    fn encoded(&self, meta: &ItemMeta) -> Option<String>;
}

/// The stock codec: keeps the blob as an opaque string on the skull
/// sub-record without validating its contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileTexturesCodec;

impl ProfileTexturesCodec {
    /// Creates the stock codec.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TexturesCodec for ProfileTexturesCodec {
    fn set_encoded(&self, meta: &mut ItemMeta, encoded: &str) {
        if let SubMeta::Skull { textures } = meta.sub_mut() {
            *textures = Some(encoded.to_owned());
        }
    }

    fn encoded(&self, meta: &ItemMeta) -> Option<String> {
        match meta.sub() {
            SubMeta::Skull { textures } => textures.clone(),
            _ => None,
        }
    }
}
