//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like rows, links, and cards.
pub mod action_link;
pub mod label_value;
pub mod pico;
