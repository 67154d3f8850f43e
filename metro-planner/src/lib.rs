//! Metro route planner.
//!
//! Answers: "how do I get from this station to that one with the fewest
//! line changes?" over a static multi-line metro network.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
