//! Alert Routing Tree
//!
//! Native route representation consumed by the routing engine, the duration
//! parser it depends on, and the wire JSON twin used across the API boundary.

mod duration;
mod error;
mod route;
mod wire;

pub use duration::{format_duration, parse_duration};
pub use error::ParseError;
pub use route::{Route, Walk};
pub use wire::RouteJsonWrapper;
