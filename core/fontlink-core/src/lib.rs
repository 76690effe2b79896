//! fontlink-core: build Google Webfonts stylesheet `<link>` tags
//!
//! Given a mixed bag of font names and name-to-weights mappings, this
//! library normalizes each into a `Name:weights` token, strings the
//! tokens together into a `family` query parameter, and hands back the
//! `<link>` description pointing at the webfonts stylesheet service.
//! It never talks to the network itself; it only builds the URL.
//!
//! The whole thing is a pure function of its inputs. No state, no I/O,
//! safe to call from anywhere, as many times as you like.
//!
//! ```
//! use fontlink_core::args::{FontArg, FontMap, FontName, Weight};
//! use fontlink_core::link::build;
//!
//! let args = vec![FontArg::Map(FontMap::new().entry(
//!     FontName::Ident("droid_sans".to_string()),
//!     vec![Weight::Value(400), Weight::Value(700)],
//! ))];
//!
//! let tag = build(&args, false)?;
//! assert_eq!(
//!     tag.href,
//!     "http://fonts.googleapis.com/css?family=Droid+Sans:400,700"
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Two front doors:
//!
//! - [`link::build`] takes the typed [`args::FontArg`] model and cannot
//!   fail except on an empty argument list.
//! - [`link::build_from_values`] accepts loose `serde_json::Value`
//!   arguments and validates their shape, for callers whose input is
//!   dynamic (configuration files, CLI JSON documents).

pub mod args;
pub mod link;
pub mod output;
