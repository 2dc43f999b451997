//! Unit tests for the Waypath CLI.
