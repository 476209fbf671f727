#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Serde format adapters for smart enum values.
//!
//! Three independent codecs read and write [`registry::EnumValue`]s through
//! any serde serializer or deserializer:
//!
//! - [`IntCodec`] — the bare integer form.
//! - [`TextCodec`] — the text form, e.g. `"partyTime, hungry"`.
//! - [`StringArrayCodec`] — one string per contributing name, e.g.
//!   `["partyTime", "hungry"]`.
//!
//! Every codec holds a reference to the [`registry::EnumRegistry`] it
//! resolves against and a per-site [`CodecOptions`]. Reads go through the
//! registry's resolution engines, so all three forms agree on
//! canonicalization; strict reads surface resolution failures through the
//! deserializer's error type, while `safe_convert` absorbs them into the
//! registry's default value.
//!
//! # Examples
//!
//! ```
//! use codec::{CodecOptions, TextCodec};
//! use registry::EnumRegistry;
//!
//! let meals = EnumRegistry::builder("Meal")
//!     .flags(true)
//!     .option("None", 0)
//!     .option("Breakfast", 1)
//!     .option("Lunch", 2)
//!     .build()
//!     .expect("declarations are valid");
//!
//! let options = CodecOptions::new().camel_case_text(true);
//! let codec = TextCodec::with_options(&meals, options);
//!
//! let value = meals.from_value(3).expect("covered by declared flags");
//! let json = codec
//!     .serialize(&value, serde_json::value::Serializer)
//!     .expect("serializes to a string");
//! assert_eq!(json, serde_json::json!("breakfast, lunch"));
//!
//! let back = codec.deserialize(json).expect("parses back");
//! assert_eq!(back, value);
//! ```
//!
//! For struct fields, pair the codecs with `serialize_with` /
//! `deserialize_with` functions that borrow a registry from a
//! [`registry::LazyRegistry`].

mod array;
mod int;
mod options;
mod read;
mod text;

pub use array::StringArrayCodec;
pub use int::IntCodec;
pub use options::CodecOptions;
pub use text::TextCodec;
