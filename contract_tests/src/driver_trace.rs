//! Driver-level trace contracts.
//!
//! These pin the end-to-end behavior of the event loop plus policy
//! handlers: canonical traces for small workloads under each policy.
