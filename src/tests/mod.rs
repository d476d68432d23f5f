//! Cross-module tests for the annotation core.
//!
//! These tests exercise whole workflows (session gestures driving the
//! mapper, compressed views feeding the overlay projectors) rather than a
//! single module's contract.
