//! Core library for the atlas-tools command line application.
//!
//! The library exposes the pipeline stages that power the command-line
//! interface as well as the integration tests. The modules are structured
//! to keep responsibilities narrow and composable: IO adapters live under
//! [`io`], data representations inside [`model`], the grouping logic in
//! [`aggregate`], and the conversion orchestration under [`convert`].

pub mod aggregate;
pub mod convert;
pub mod error;
pub mod io;
pub mod model;

pub use error::{Result, ToolError};
