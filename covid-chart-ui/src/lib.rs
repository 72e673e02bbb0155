//! Dioxus components for the COVID tracker web app.
//!
//! This crate provides:
//! - `state`: the `Screen` held in a Dioxus Signal and shared via context
//! - `components`: selectors, the SVG spark chart and its readouts

pub mod components;
pub mod state;
