#![allow(dead_code, unused_macros)]

#[macro_use]
pub mod db;
pub mod factories;
pub mod mocks;
