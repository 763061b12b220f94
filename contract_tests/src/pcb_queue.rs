//! PCB and ready-queue value contracts.
