//! # fsmanifest Architecture
//!
//! fsmanifest is a small example application. It loads its data files through
//! Bazel-style runfiles, turns a message into words and word statistics, and
//! reports the result as text or JSON.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Application (app.rs)                                       │
//! │  - Explicit init step producing an immutable AppContext     │
//! │  - process_message: message → ProcessResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!               │                              │
//!               ▼                              ▼
//! ┌───────────────────────────┐  ┌──────────────────────────────┐
//! │  strings.rs, processor.rs │  │  Resource Layer (locator/)   │
//! │  - Pure text transforms   │  │  - ResourceLocator trait     │
//! │  - JSON / YAML wrappers   │  │  - Runfiles + in-memory      │
//! └───────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Library code returns Rust values and never writes to stdout or stderr, with
//! one exception: [`processor::JsonProcessor::pretty_print`]. The
//! only other side effects are reading resources through a locator and the
//! opt-in network [`probe`].
//!
//! ## Module Overview
//!
//! - [`app`]: Application init and message processing
//! - [`strings`]: Word splitting and other string helpers
//! - [`processor`]: JSON / YAML serialization with sorted keys
//! - [`locator`]: Resource lookup abstraction and implementations
//! - [`settings`]: Settings file with defaults
//! - [`probe`]: The optional outbound HTTP check
//! - [`model`]: `ProcessResult`, `WordStats`, `ProbeReport`
//! - [`error`]: Error types

pub mod app;
pub mod error;
pub mod locator;
pub mod model;
pub mod probe;
pub mod processor;
pub mod settings;
pub mod strings;
