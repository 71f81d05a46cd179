//! Sample document generators.
//!
//! Each module builds one self-contained document and writes it to a fixed path under
//! `results/`.  The `document` functions expose the assembled document so tests can render
//! it without touching the filesystem.

pub mod canvas_cut;
pub mod cell_borders;
pub mod run_all;
pub mod styled_text;

/// Title of the public-domain novella used as sample text throughout.
pub(crate) const SAMPLE_TITLE: &str = "The Strange Case of Dr. Jekyll and Mr. Hyde";

/// Author of the sample text.
pub(crate) const SAMPLE_AUTHOR: &str = "Robert Louis Stevenson";
