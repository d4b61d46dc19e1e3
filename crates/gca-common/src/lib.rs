//! Common types and utilities for the gca analyzers.
//!
//! This crate provides foundational types used across all gca crates:
//! - Diagnostic records, severities and rule descriptors
//! - The rule message table (`DiagnosticKind` -> code, title, template)
//! - Source spans and file locations
//! - Analysis limits and thresholds

// Diagnostics - records, descriptors, message templates
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticDescriptor, DiagnosticKind, format_message,
};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::{Location, Span};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
