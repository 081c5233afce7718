//! Presentation: applying a language to the host document.
//!
//! - `applier`: `set_language`, text and placeholder substitution
//! - `services`: the services section built from the fixed pillar table
//! - `controls`: the two language switch controls

pub mod applier;
pub mod controls;
pub mod services;

pub use applier::{Applied, Applier, RenderSummary};
pub use controls::{handle_click, ClickEvent, SwitchOutcome};
pub use services::{
    populate_services, render_services_markup, ServicePillar, ServicesMarkup, ServicesOutcome,
    SERVICE_PILLARS,
};
