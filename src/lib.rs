//! Test harness for ng-gen: fixture workspaces shared by the integration tests

pub mod fixtures;

pub use ng_gen_core as core;
