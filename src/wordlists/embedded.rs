//! Embedded word pool
//!
//! Groups compiled into the binary at build time.

// Include generated pool from build script
include!(concat!(env!("OUT_DIR"), "/groups.rs"));
