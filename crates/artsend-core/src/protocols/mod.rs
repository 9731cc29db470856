//! Protocol encoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, ranges, and constants (source of truth)
//! - `writer`: safe byte writes over a preallocated packet buffer
//! - `encoder`: domain-level encoding (no direct byte indexing)
//! - `parser`: decoding for verification (round-trip and dry-run checks)
//! - `error`: explicit, actionable errors
//!
//! Encoders are pure and contain no I/O; sockets and addressing live in the
//! `transport` layer.

pub mod artnet;
