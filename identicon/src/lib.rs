// THEORY:
// This file is the main entry point for the `identicon` library crate.
// It exposes two layers:
// - `core_modules`: the individual, pure stages of the transform (digest, color,
//   grid, cell filter, rectangle mapper) plus the `Canvas` renderer that consumes
//   their result.
// - `pipeline`: the high-level `IdenticonPipeline` that composes the stages and
//   persists the rendered image according to a `PipelineConfig`.
//
// Most consumers only need the pipeline. The stage modules stay public so the
// intermediate values (grid, cells, rectangles) can be inspected and tested.

pub mod core_modules;
pub mod pipeline;

pub use crate::core_modules::error::RenderError;
pub use crate::core_modules::identicon::Identicon;
pub use crate::pipeline::{IdenticonPipeline, PipelineConfig};
