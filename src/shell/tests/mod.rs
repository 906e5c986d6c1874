//! Unit tests for the interactive shell.
//!
//! Rendering tests check the pure string producers; menu tests drive the
//! state machine with scripted input buffers.

mod menu_tests;
