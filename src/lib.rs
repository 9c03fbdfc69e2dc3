//! docfill: fill `.docx` form templates with Vietnamese text generated by Gemini.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FillExit, FillOptions, FillOutcome, connect_gemini, discover_variables, fill,
    generate_content, render_document,
};
pub use domain::{AppError, Discovery, FieldMapping, GenerationOutcome, PlaceholderSet};
