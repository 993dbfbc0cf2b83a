#![allow(dead_code)]

pub mod fake_backend;
pub mod fixtures;
pub mod stub_server;
