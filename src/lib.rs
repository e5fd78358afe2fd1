//! Greenhouse Dashboard - ThingSpeak sensor readings next to predicted values
//!
//! This library exposes the core modules for testing and reuse.

pub mod channels;
pub mod charts;
pub mod common;
pub mod config;
pub mod error;
pub mod layout;
pub mod predictions;
pub mod routes;
pub mod startup;
pub mod table;
pub mod thingspeak;
