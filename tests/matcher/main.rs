//! Integration tests for Layer 3: Matcher
//!
//! Tests matching modes, disallow toggles, and mismatch-set reporting.

mod modes;
