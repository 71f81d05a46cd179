//! Sample PDF documents built on top of [`genpdf`].
//!
//! The crate bundles three small document generators: a paragraph mixing styled text runs, a
//! paragraph rendered into a cut-out region of the page, and a table whose borders are drawn
//! with rounded corners.  The supporting modules provide the shared plumbing: document
//! bootstrap ([`builder`]), font discovery ([`fonts`]), styled text spans ([`text`]), custom
//! elements ([`elements`]) and output handling ([`output`]).

pub mod builder;
pub mod elements;
pub mod fonts;
pub mod output;
pub mod samples;
pub mod text;
