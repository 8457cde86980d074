// src/handlers/mod.rs

pub mod history;
pub mod questions;
pub mod quiz;
