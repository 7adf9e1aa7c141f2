//! # infolex
//!
//! A tokenizer for configuration-style text plus a compact `\key\value`
//! "info string" codec, the two text services shared by every subsystem of
//! a definition-driven engine.
//!
//! ## What's here?
//!
//! - **Lexer**: one-token-at-a-time scanning with comment skipping, quoted
//!   strings, line tracking, and an optional separator-aware grammar
//! - **Compressor**: single-pass comment stripping and whitespace
//!   canonicalization over the same grammar
//! - **Info strings**: bounded key/value buffers in the wire shape
//!   `\key\value\key\value`, with lookup, iteration, editing, and
//!   validation under two size tiers
//!
//! ## Key Features
//!
//! - **Permissive by default**: malformed input degrades to empty or
//!   truncated tokens; only an explicit grammar mismatch is an error
//! - **Byte-exact quoting**: quoted content survives both the lexer and
//!   the compressor untouched
//! - **Load-bearing limits**: the token capacity and both info-string
//!   ceilings match the wire contracts of the original engine
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! infolex = "0.1"
//! ```
//!
//! ### Tokenizing definition text
//!
//! ```rust
//! use infolex::Lexer;
//!
//! let text = r#"
//! // weapon definition
//! weapon "rocket launcher" {
//!     damage 100
//! }
//! "#;
//!
//! let mut lexer = Lexer::new(text, "weapons.def");
//! assert_eq!(lexer.token(), "weapon");
//! assert_eq!(lexer.token(), "rocket launcher");
//! lexer.skip_braced_section();
//! assert!(lexer.token().is_empty());
//! ```
//!
//! ### Editing info strings
//!
//! ```rust
//! use infolex::info;
//!
//! let mut user = String::new();
//! info::set_value(&mut user, "name", "Dave").unwrap();
//! info::set_value(&mut user, "score", "10").unwrap();
//!
//! assert_eq!(user, "\\name\\Dave\\score\\10");
//! assert_eq!(info::value_for_key(&user, "Score"), Some("10"));
//! ```
//!
//! ### Structured access with InfoMap
//!
//! ```rust
//! use infolex::{infomap, InfoLimit};
//!
//! let map = infomap! {
//!     "name" => "Dave",
//!     "model" => "ranger",
//! };
//!
//! let wire = map.encode(InfoLimit::Standard).unwrap();
//! assert_eq!(wire, "\\name\\Dave\\model\\ranger");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Tokenizing**: O(n) over the input, one token per call, no
//!   backtracking
//! - **Compression**: single pass, output never longer than the input
//! - **Info strings**: lookup, removal, and append are O(buffer length)
//!
//! ## Concurrency
//!
//! There is no shared state. Each [`Lexer`] owns its session (cursor,
//! origin label, line counters), so independent parses never interfere.
//! Codec results borrow from or are owned by the caller's buffer.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the grammar and wire-format reference.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`parse_config.rs`** - Driving the lexer over definition text
//! - **`info_strings.rs`** - Building and editing info strings
//!
//! Run any example with: `cargo run --example <name>`

pub mod compress;
pub mod error;
pub mod format;
pub mod info;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod tables;

pub use compress::{compress, compress_in_place};
pub use error::{Error, Result};
pub use info::{InfoLimit, BIG_INFO_STRING, MAX_INFO_STRING};
pub use lexer::{Lexer, Token, MAX_TOKEN_CHARS};
pub use map::InfoMap;
