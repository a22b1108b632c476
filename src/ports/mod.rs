//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the outside world (document export).

mod exporter;

pub use exporter::ReportExporter;
