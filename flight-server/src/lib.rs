//! Flight journey search server.
//!
//! A web service that answers: "which itineraries, direct or with
//! connections, get me from one airport to another on a given date?"
//! Itineraries are assembled from a flat list of flight events fetched
//! from an upstream feed.

pub mod domain;
pub mod engine;
pub mod feed;
pub mod settings;
pub mod web;
