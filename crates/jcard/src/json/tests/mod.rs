//! Codec-level tests: whole-document round trips and failure recovery.

mod fixtures;
mod recovery;
