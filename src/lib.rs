// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Renderer-agnostic interaction engine for a 3D gallery room.
//!
//! Galleria turns pointer and keyboard input into the three pieces of state
//! an interactive gallery viewer presents: the set of objects to outline,
//! the cursor style, and which info panel is active. Picking runs on the
//! CPU against lightweight collider geometry; the actual meshes, textures,
//! and the outline post-process belong to the embedding renderer.
//!
//! # Key entry points
//!
//! - [`engine::GalleryEngine`] - the composition root hosts drive per frame
//! - [`selection::SelectionController`] - the pointer → selection/panel core
//! - [`options::Options`] - runtime configuration with TOML preset support
//! - [`Viewer`] - a standalone winit shell (`viewer` feature)
//!
//! # Architecture
//!
//! Raw window events flow through an [`input::InputProcessor`] that owns
//! viewport and button state and emits [`engine::GalleryCommand`] values;
//! the engine dispatches commands to the orbit camera and the selection
//! controller, which writes its decisions into presenter state
//! ([`highlight::OutlineHighlight`], [`panel::PanelModel`]) the host reads
//! back each frame. Scene manifests load on a background thread and publish
//! the selectable pool to the controller exactly once.

pub mod camera;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod input;
pub mod options;
pub mod panel;
pub mod picking;
pub mod scene;
pub mod selection;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{GalleryCommand, GalleryEngine};
pub use error::GalleriaError;
pub use highlight::CursorStyle;
pub use input::{InputEvent, InputProcessor, PointerButton};
pub use options::Options;
pub use selection::SelectionController;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
