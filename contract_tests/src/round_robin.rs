//! Round-robin decision contract.
