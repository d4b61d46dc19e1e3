//! Centralized limits and thresholds for the analyzers.
//!
//! Snapshots handed to the engine come from external hosts, so nothing
//! guarantees that a base-type chain or a nested argument list is finite or
//! acyclic. Every walk over host data is bounded by one of these limits.

// =============================================================================
// Type Hierarchy Limits
// =============================================================================

/// Maximum number of base types followed when checking derivation.
///
/// Real class hierarchies are rarely deeper than a dozen levels; a chain
/// longer than this is treated as a cyclic (malformed) hierarchy and the walk
/// answers "not derived".
pub const MAX_BASE_TYPE_DEPTH: usize = 256;

/// Maximum number of interfaces visited when collecting the transitive
/// interface set of a type.
pub const MAX_INTERFACE_VISITS: usize = 4096;

// =============================================================================
// Argument Limits
// =============================================================================

/// Maximum number of nested constructor arguments inspected for a single
/// comparer-typed argument.
pub const MAX_NESTED_CONSTRUCTOR_ARGUMENTS: usize = 64;
