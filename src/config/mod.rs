// src/config/mod.rs

pub mod selftest_config;
