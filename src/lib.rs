// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod charts;
pub mod csv;
pub mod file;
pub mod gui;
pub mod official;
pub mod progress;
pub mod report;
pub mod runner;
pub mod season;
pub mod store;
pub mod votes;
