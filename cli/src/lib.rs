//! Console front end for the tuckshop purchase simulator.
//!
//! The session state machine and prompting helpers are generic over
//! `BufRead`/`Write` so tests can script an entire session against
//! in-memory buffers; the `tuckshop` binary wires them to stdin/stdout.

pub mod prompt;
pub mod session;
