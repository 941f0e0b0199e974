#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub(crate) mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod formatting;
pub mod generation;
pub mod observability;
pub mod pipeline;
pub mod util;
