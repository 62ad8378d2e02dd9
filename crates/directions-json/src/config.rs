//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Knobs shared by [`Decoder`](crate::Decoder) and [`Encoder`](crate::Encoder).
///
/// Every field has a default, so a config file only needs to name the
/// settings it changes:
///
/// ```toml
/// serialize_nulls = true
/// intern_pool_capacity = 4096
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Write `"name": null` for absent known fields instead of omitting them.
    pub serialize_nulls: bool,
    /// Upper bound on distinct strings a decoder's pool retains.
    /// `None` keeps every distinct value for the decoder's lifetime.
    pub intern_pool_capacity: Option<usize>,
}

impl CodecConfig {
    pub fn with_serialize_nulls(mut self, serialize_nulls: bool) -> Self {
        self.serialize_nulls = serialize_nulls;
        self
    }

    pub fn with_intern_pool_capacity(mut self, capacity: usize) -> Self {
        self.intern_pool_capacity = Some(capacity);
        self
    }
}
