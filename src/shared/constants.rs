// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Staff role - sees every ticket, may filter by completion and assign employees
pub const ROLE_STAFF: &str = "staff";

// =============================================================================
// TICKET LIST FILTERS
// =============================================================================

/// `status` query value that narrows the staff list to completed tickets
pub const STATUS_DONE: &str = "done";
