//! Core library for the spare-parts-feed command line application.
//!
//! The library turns a folder of vendor JSON documents, each describing one
//! vehicle's spare-parts category tree, into a single XML shop feed. Input
//! and output adapters live under [`parts::feed::io`], the typed document
//! model in [`parts::feed::model`], the tree walk in [`parts::feed::flatten`],
//! deduplication by product code in [`parts::feed::aggregate`], and the run
//! orchestration under [`parts::feed::convert`].

pub mod parts;

pub use parts::feed::{
    Result, ToolError, aggregate, config, convert, error, flatten, io, model, shop,
};
