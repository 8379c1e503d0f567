//! Test helpers module
//!
//! This module provides builders and utilities for testing the
//! CampusFabric participation core.

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
