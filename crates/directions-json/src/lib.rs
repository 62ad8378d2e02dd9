//! directions-json - hand-written JSON codec core for directions models.
//!
//! Model nodes that need more than the serde-derived default codec implement
//! [`JsonCodec`] on top of the pieces in this crate:
//!
//! - [`Unrecognized`]: the ordered store of JSON members a node did not
//!   recognise, re-emitted verbatim on encode.
//! - [`StringPool`]: call-scoped interning for small-vocabulary string fields.
//! - [`read`] and [`ObjectWriter`]: typed field decoders and the declared-order
//!   object writer.
//! - [`Decoder`] / [`Encoder`]: text entry points configured by [`CodecConfig`].

pub mod codec;
pub mod config;
pub mod error;
pub mod intern;
pub mod point;
pub mod read;
pub mod unrecognized;
pub mod write;

pub use codec::{decode_default, encode_default, Decoder, Encoder, JsonCodec};
pub use config::CodecConfig;
pub use error::DecodeError;
pub use intern::StringPool;
pub use point::Point;
pub use unrecognized::{HasUnrecognized, Unrecognized};
pub use write::ObjectWriter;

/// Re-exported so node crates name one JSON value type.
pub use serde_json::{Map, Value};
