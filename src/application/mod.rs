//! Application layer: business logic on top of the storage contract.

pub mod services;
