//! Application services: orchestrate domain types through the ports.

pub mod squad;
