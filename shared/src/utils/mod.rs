//! Utility functions shared across the client core

pub mod format;
