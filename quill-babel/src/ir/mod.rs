//! Intermediate representations shared by the pipeline stages.
//!
//! - [`blocks`]: what the tokenizer produces, one [`blocks::Block`] per body line.
//! - [`nodes`]: the presentational tree a display layer paints.

pub mod blocks;
pub mod nodes;
