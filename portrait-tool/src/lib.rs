//! Portrait asset pipeline: converts portrait images to DDS textures and
//! generates the portrait, species and category config files that reference
//! them.

pub mod clausewitz;
pub mod cli;
pub mod conflict;
pub mod constants;
pub mod converter;
pub mod dds_writer;
pub mod error;
pub mod generator;
pub mod naming;
pub mod records;
pub mod reporter;
pub mod settings;
pub mod tool;

pub use error::{Result, ToolError};
pub use settings::{Archetype, ConflictPolicy, ConverterKind, ToolSettings};
pub use tool::{PortraitTool, RunOptions, RunReport};
