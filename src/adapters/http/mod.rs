//! HTTP source adapter

pub mod client;

pub use client::ResourceClient;
