//! Purpose: Internal JSON parsing boundary shared by runtime callsites.
//! Exports: `parse` module with decode helpers used by the client, registry and CLI.
//! Role: Single seam for parser usage so callsites avoid ad hoc decode logic.
//! Invariants: Body decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
