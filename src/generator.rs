/**
 * Shape Image Batch Generator
 *
 * Produces a batch of synthetic raster images, each containing a single
 * randomly coloured star or square centred on a white background, and
 * writes them to disk as PNG files named `image_1.png` through
 * `image_N.png`.
 *
 * BATCH CONTRACT
 * ==============
 * Every iteration is fully independent: a fresh canvas is allocated, a
 * colour and a shape kind are sampled, the shape is rendered, optionally
 * blurred, then encoded and flushed before the next image begins. Nothing
 * persists across iterations except the PRNG stream, so a batch with a
 * fixed seed reproduces byte-for-byte.
 *
 * The output directory is created up front (idempotently, parents
 * included); a failure there aborts the run before anything is written.
 * A per-image encode or write failure aborts the remaining batch with no
 * retry. Re-running with the same configuration overwrites the same
 * filenames without error.
 */

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::render::{distort, render_shape, Color, ShapeKind};

/// Configuration for a generation batch
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of images to generate
    pub count: u32,
    /// Width of each image in pixels
    pub width: u32,
    /// Height of each image in pixels
    pub height: u32,
    /// Directory the images are written into (created if absent)
    pub output_dir: PathBuf,
    /// Bounding size of the shape in pixels
    pub shape_size: u32,
    /// Apply a Gaussian blur to each finished canvas
    pub distort: bool,
    /// Optional random seed for reproducible batches
    pub seed: Option<u32>,
    /// Show a progress bar while generating
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 10,
            width: 300,
            height: 300,
            output_dir: PathBuf::from("data/img"),
            shape_size: 100,
            distort: false,
            seed: None,
            verbose: false,
        }
    }
}

/// Result of a successful generation batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Paths of the files written, in generation order
    pub files: Vec<PathBuf>,
}

/// Error types for batch generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Width or height is zero
    #[error("Width and height must be positive")]
    InvalidDimensions,

    /// Shape size is zero
    #[error("Shape size must be positive")]
    InvalidShapeSize,

    /// Shape size exceeds the canvas
    #[error("Shape size {shape_size} does not fit within a {width}x{height} canvas")]
    ShapeTooLarge {
        /// Requested bounding size of the shape
        shape_size: u32,
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },

    /// Output directory could not be created
    #[error("Failed to create output directory {path:?}: {source}")]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// Failed to encode or write an image file
    #[error("Failed to save image: {0}")]
    ImageSave(#[from] image::ImageError),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/**
 * Mulberry32 seeded random number generator
 * Fast, high-quality PRNG for reproducible results
 */
struct SeededRandom {
    seed: u32,
}

impl SeededRandom {
    fn new(seed: Option<u32>) -> Self {
        Self {
            seed: seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_millis() as u32
            }),
        }
    }

    fn next(&mut self) -> f32 {
        self.seed = self.seed.wrapping_add(0x6D2B79F5);
        let mut t = self.seed ^ (self.seed >> 15);
        t = t.wrapping_mul(1 | self.seed);
        t ^= t.wrapping_add(t.wrapping_mul(t ^ (t >> 7)).wrapping_mul(61 | t));
        ((t ^ (t >> 14)) as f32) / 4294967296.0
    }

    /// Uniform sample from [0, 255]
    fn next_channel(&mut self) -> u8 {
        (self.next() * 256.0) as u8
    }
}

/**
 * Main type for generating shape image batches
 */
pub struct BatchGenerator {
    // Configuration
    count: u32,
    width: u32,
    height: u32,
    output_dir: PathBuf,
    shape_size: u32,
    distort: bool,
    random: SeededRandom,

    // Progress bar
    progress: Option<ProgressBar>,
}

impl BatchGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: BatchConfig) -> Result<Self> {
        // Validation
        if config.width == 0 || config.height == 0 {
            return Err(GeneratorError::InvalidDimensions);
        }
        if config.shape_size == 0 {
            return Err(GeneratorError::InvalidShapeSize);
        }
        if config.shape_size > config.width.min(config.height) {
            return Err(GeneratorError::ShapeTooLarge {
                shape_size: config.shape_size,
                width: config.width,
                height: config.height,
            });
        }

        let progress = if config.verbose {
            Some(ProgressBar::new(config.count as u64))
        } else {
            None
        };

        if let Some(pb) = &progress {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len} {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
        }

        Ok(Self {
            count: config.count,
            width: config.width,
            height: config.height,
            output_dir: config.output_dir,
            shape_size: config.shape_size,
            distort: config.distort,
            random: SeededRandom::new(config.seed),
            progress,
        })
    }

    /// Emit the per-file notification for a freshly written image
    fn notify_saved(&self, path: &Path) {
        match &self.progress {
            Some(pb) => {
                pb.println(format!("Saved: {}", path.display()));
                pb.inc(1);
            }
            None => println!("Saved: {}", path.display()),
        }
    }

    /**
     * Generate the batch
     *
     * Writes `count` PNG files into the output directory and returns the
     * paths written. A zero count is a valid no-op: the directory is still
     * created and the summary still printed.
     */
    pub fn generate(mut self) -> Result<BatchResult> {
        fs::create_dir_all(&self.output_dir).map_err(|source| GeneratorError::DirectoryCreate {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut files = Vec::with_capacity(self.count as usize);

        for i in 0..self.count {
            let color = Color::new(
                self.random.next_channel(),
                self.random.next_channel(),
                self.random.next_channel(),
            );
            let kind = if self.random.next() < 0.5 {
                ShapeKind::Star
            } else {
                ShapeKind::Square
            };

            let mut img = render_shape(self.width, self.height, self.shape_size, kind, color);
            if self.distort {
                img = distort(&img);
            }

            let path = self.output_dir.join(format!("image_{}.png", i + 1));
            img.save(&path)?;
            self.notify_saved(&path);
            files.push(path);
        }

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }
        println!(
            "All {} images generated and saved successfully in '{}'!",
            self.count,
            self.output_dir.display()
        );

        Ok(BatchResult { files })
    }
}

/**
 * Convenience function to generate a batch of shape images
 */
pub fn generate_shape_images(config: BatchConfig) -> Result<BatchResult> {
    let generator = BatchGenerator::new(config)?;
    generator.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(output_dir: PathBuf) -> BatchConfig {
        BatchConfig {
            count: 3,
            width: 64,
            height: 64,
            output_dir,
            shape_size: 32,
            distort: false,
            seed: Some(42),
            verbose: false,
        }
    }

    /// Concatenated bytes of every file in a batch, in order
    fn batch_bytes(result: &BatchResult) -> Vec<u8> {
        let mut bytes = Vec::new();
        for path in &result.files {
            bytes.extend(fs::read(path).unwrap());
        }
        bytes
    }

    #[test]
    fn test_seeded_random_deterministic() {
        let mut rng1 = SeededRandom::new(Some(42));
        let mut rng2 = SeededRandom::new(Some(42));

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next(), rng2.next());
        }
    }

    #[test]
    fn test_seeded_random_range() {
        let mut rng = SeededRandom::new(Some(12345));

        // All values should be in [0, 1)
        for _ in 0..1000 {
            let val = rng.next();
            assert!(val >= 0.0 && val < 1.0);
        }
    }

    #[test]
    fn test_next_channel_covers_range() {
        let mut rng = SeededRandom::new(Some(7));

        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for _ in 0..10_000 {
            let val = rng.next_channel();
            min = min.min(val);
            max = max.max(val);
        }

        // A uniform sampler over [0, 255] reaches both ends of the range
        assert!(min < 16);
        assert!(max > 239);
    }

    #[test]
    fn test_config_validation() {
        let dir = TempDir::new().unwrap();

        // Valid config should work
        let config = test_config(dir.path().to_path_buf());
        assert!(BatchGenerator::new(config).is_ok());

        // Zero width should fail
        let config = BatchConfig {
            width: 0,
            ..test_config(dir.path().to_path_buf())
        };
        assert!(matches!(
            BatchGenerator::new(config),
            Err(GeneratorError::InvalidDimensions)
        ));

        // Zero height should fail
        let config = BatchConfig {
            height: 0,
            ..test_config(dir.path().to_path_buf())
        };
        assert!(matches!(
            BatchGenerator::new(config),
            Err(GeneratorError::InvalidDimensions)
        ));

        // Zero shape size should fail
        let config = BatchConfig {
            shape_size: 0,
            ..test_config(dir.path().to_path_buf())
        };
        assert!(matches!(
            BatchGenerator::new(config),
            Err(GeneratorError::InvalidShapeSize)
        ));

        // Shape larger than the canvas should fail
        let config = BatchConfig {
            shape_size: 65,
            ..test_config(dir.path().to_path_buf())
        };
        assert!(matches!(
            BatchGenerator::new(config),
            Err(GeneratorError::ShapeTooLarge { .. })
        ));
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("out");

        let config = BatchConfig {
            shape_size: 999,
            ..test_config(output_dir.clone())
        };
        assert!(BatchGenerator::new(config).is_err());
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_generate_writes_expected_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path().to_path_buf());

        let result = generate_shape_images(config).unwrap();

        assert_eq!(result.files.len(), 3);
        for i in 1..=3 {
            let path = dir.path().join(format!("image_{}.png", i));
            assert!(path.exists());
            assert_eq!(result.files[i - 1], path);
            assert_eq!(image::image_dimensions(&path).unwrap(), (64, 64));
        }

        // No stray files beyond the batch
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_generate_zero_count() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("empty");
        let config = BatchConfig {
            count: 0,
            ..test_config(output_dir.clone())
        };

        let result = generate_shape_images(config).unwrap();

        assert!(result.files.is_empty());
        assert!(output_dir.exists());
        assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("deeply").join("nested").join("img");
        let config = test_config(output_dir.clone());

        let result = generate_shape_images(config).unwrap();

        assert_eq!(result.files.len(), 3);
        assert!(output_dir.join("image_1.png").exists());
    }

    #[test]
    fn test_generate_reproducible() {
        let dir1 = TempDir::new().unwrap();
        let dir2 = TempDir::new().unwrap();

        let result1 = generate_shape_images(test_config(dir1.path().to_path_buf())).unwrap();
        let result2 = generate_shape_images(test_config(dir2.path().to_path_buf())).unwrap();

        // Same seed should produce byte-identical batches
        assert_eq!(batch_bytes(&result1), batch_bytes(&result2));
    }

    #[test]
    fn test_generate_different_seeds() {
        let dir1 = TempDir::new().unwrap();
        let dir2 = TempDir::new().unwrap();

        let config1 = BatchConfig {
            seed: Some(111),
            ..test_config(dir1.path().to_path_buf())
        };
        let config2 = BatchConfig {
            seed: Some(222),
            ..test_config(dir2.path().to_path_buf())
        };

        let result1 = generate_shape_images(config1).unwrap();
        let result2 = generate_shape_images(config2).unwrap();

        // Different seeds should produce different batches
        assert_ne!(batch_bytes(&result1), batch_bytes(&result2));
    }

    #[test]
    fn test_rerun_overwrites_existing_files() {
        let dir = TempDir::new().unwrap();

        let first = generate_shape_images(test_config(dir.path().to_path_buf())).unwrap();
        let config = BatchConfig {
            seed: Some(99),
            ..test_config(dir.path().to_path_buf())
        };
        let second = generate_shape_images(config).unwrap();

        assert_eq!(first.files, second.files);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_generate_with_distortion() {
        let dir = TempDir::new().unwrap();
        let config = BatchConfig {
            distort: true,
            ..test_config(dir.path().to_path_buf())
        };

        let result = generate_shape_images(config).unwrap();

        assert_eq!(result.files.len(), 3);
        for path in &result.files {
            assert_eq!(image::image_dimensions(path).unwrap(), (64, 64));
        }
    }

    #[test]
    fn test_single_image_end_to_end() {
        let dir = TempDir::new().unwrap();
        let config = BatchConfig {
            count: 1,
            width: 10,
            height: 10,
            shape_size: 4,
            ..test_config(dir.path().to_path_buf())
        };

        let result = generate_shape_images(config).unwrap();
        assert_eq!(result.files.len(), 1);

        let img = image::open(&result.files[0]).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (10, 10));

        // Background stays white outside the centred 4-pixel bounding box
        assert_eq!(*img.get_pixel(0, 0), crate::render::BACKGROUND);
        assert_eq!(*img.get_pixel(9, 9), crate::render::BACKGROUND);

        // The shape carries exactly one non-background colour
        let mut shape_colors: Vec<_> = img
            .pixels()
            .filter(|p| **p != crate::render::BACKGROUND)
            .collect();
        shape_colors.dedup();
        assert_eq!(shape_colors.len(), 1);
    }
}
