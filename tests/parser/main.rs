//! Integration tests for Layer 3: Parser
//!
//! Tests for command classification and the action engine.

mod actions;
mod commands;
