//! Domain layer
//!
//! The item entity and the ports it needs from the outside world. Nothing in
//! here knows about HTTP or SeaORM.

pub mod entities;
pub mod ports;
