//! Shape Image Batch Generator
//!
//! Procedurally generates batches of raster images, each containing a
//! single randomly coloured geometric shape (a star or a square) centred
//! on a solid white background, optionally blurred, and written to disk
//! as PNG files. Intended as a synthetic-dataset generator for testing
//! or prototyping, e.g. seeding an image-classification pipeline with
//! labelled shape examples.
//!
//! # Features
//!
//! - Two shapes: a filled square and a ten-vertex star polygon
//! - Uniform random RGB fill colour per image
//! - Optional Gaussian-blur distortion pass
//! - Reproducible batches with seeded random number generation
//!
//! # Quick Start
//!
//! ```no_run
//! use shapegen::{generate_shape_images, BatchConfig};
//!
//! let config = BatchConfig {
//!     count: 5,
//!     width: 300,
//!     height: 300,
//!     shape_size: 100,
//!     seed: Some(42), // Use a seed for reproducibility
//!     ..Default::default()
//! };
//!
//! let result = generate_shape_images(config).unwrap();
//! assert_eq!(result.files.len(), 5);
//! ```
//!
//! # Output
//!
//! Files are named `image_1.png` through `image_N.png` (1-based, no
//! zero-padding) inside the configured output directory, which is created
//! on demand. Re-running with the same configuration overwrites the same
//! filenames.

#![doc(html_root_url = "https://docs.rs/shapegen/0.1.0")]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Batch generation module
pub mod generator;
/// Shape rendering module
pub mod render;

// Re-export main types for convenience
pub use generator::{
    generate_shape_images, BatchConfig, BatchGenerator, BatchResult, GeneratorError,
};
pub use render::{
    distort, render_shape, shape_origin, Color, ShapeKind, BACKGROUND, DISTORT_SIGMA,
};
