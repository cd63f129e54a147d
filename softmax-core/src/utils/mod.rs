// src/utils/mod.rs

pub mod testing;
