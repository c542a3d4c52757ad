//! Reads the format parameters of RIFF/WAVE files.
//!
//! Only the leading chunks of a file are read: the RIFF group header, the form type, and the
//! `fmt ` chunk that directly follows it. The format chunk body is consumed exactly as declared,
//! so any extended format information is skipped.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! use wavefmt::config::ParseOptions;
//!
//! # fn main() -> wavefmt::error::Result<()> {
//! let format_info = wavefmt::read_from_path("tests/files/assets/minimal.wav", ParseOptions::new())?;
//!
//! println!("Format code: {}", format_info.format_code());
//! println!("Channels: {}", format_info.channels());
//! println!("Sample rate: {}", format_info.sample_rate());
//! println!("Bitrate: {}", format_info.bitrate());
//! # Ok(()) }
//! ```
//!
//! ## Strict parsing
//!
//! By default, the chunk identifiers are never checked. [`ParsingMode::Strict`](config::ParsingMode::Strict)
//! requires `RIFF`, `WAVE` and `fmt ` in their expected positions, along with a sane channel count
//! and sample rate.
//!
//! ```rust,no_run
//! use wavefmt::config::{ParseOptions, ParsingMode};
//!
//! # fn main() -> wavefmt::error::Result<()> {
//! let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
//! let format_info = wavefmt::read_from_path("tests/files/assets/minimal.wav", parse_options)?;
//! # Ok(()) }
//! ```
//!
//! # Bitrate
//!
//! [`FormatInfo::bitrate`] is computed as the `fmt ` chunk's *byte rate* multiplied by 8. The actual
//! bits per sample is available through [`read_header`] and [`FmtChunk::bits_per_sample`].

pub mod chunk;
pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod wav;

pub use crate::wav::read::{read_from, read_from_path, read_header};
pub use crate::wav::{FmtChunk, FormatInfo, WaveHeader};
