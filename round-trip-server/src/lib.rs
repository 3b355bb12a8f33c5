//! Round-trip rail itinerary server.
//!
//! A web application that answers: "If I ride out from this station,
//! which trains get me there and back, and how long can I stay?"

pub mod config;
pub mod domain;
pub mod loader;
pub mod planner;
pub mod web;
