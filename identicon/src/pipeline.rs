// THEORY:
// The `pipeline` module is the top-level API of the identicon engine. It wraps the
// pure stages in `core_modules` behind a single `IdenticonPipeline` and adds a
// place on disk to put the result.
//
// The pipeline is synchronous and holds no mutable state. Each call to `process`
// derives one `Identicon`, paints one canvas and writes one PNG. Runs for
// different inputs share nothing.

use std::path::{Component, Path, PathBuf};

use image::ImageError;

use crate::core_modules::canvas::{self, paint};
use crate::core_modules::error::RenderError;

pub use crate::core_modules::identicon::Identicon;

/// Configuration for the IdenticonPipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory that receives `<name>.png`. Must already exist. Names are always
    /// resolved beneath it, even when they start with `/`.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// The main, top-level struct for the identicon engine.
#[derive(Debug, Clone, Default)]
pub struct IdenticonPipeline {
    config: PipelineConfig,
}

impl IdenticonPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pure stages for `input`.
    pub fn generate(&self, input: &[u8]) -> Identicon {
        Identicon::new(input)
    }

    /// Where `identicon` is written by `render`.
    pub fn output_path(&self, identicon: &Identicon) -> PathBuf {
        let file_name = identicon.file_name();
        // Root and drive prefixes would make `join` discard `output_dir`.
        let relative: PathBuf = Path::new(&file_name)
            .components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
            .collect();
        self.config.output_dir.join(relative)
    }

    /// Paints `identicon` and writes it under the configured output directory.
    pub fn render(&self, identicon: &Identicon) -> Result<PathBuf, RenderError> {
        let path = self.output_path(identicon);
        canvas::render(identicon.color, &identicon.rectangles, &path)?;
        Ok(path)
    }

    /// Generates and renders in one step, returning the written path.
    pub fn process(&self, input: &[u8]) -> Result<PathBuf, RenderError> {
        let identicon = self.generate(input);
        self.render(&identicon)
    }

    /// Paints `identicon` and returns the PNG bytes without writing a file.
    pub fn png_bytes(&self, identicon: &Identicon) -> Result<Vec<u8>, ImageError> {
        paint(identicon.color, &identicon.rectangles).to_png_bytes()
    }
}
