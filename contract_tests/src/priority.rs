//! Priority-preemptive decision contract.
