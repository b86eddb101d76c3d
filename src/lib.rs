// SPDX-License-Identifier: MPL-2.0
//! `trigon` is an interactive triangle centers explorer built with the
//! Iced GUI framework.
//!
//! Drag the vertices of a triangle and watch the classical centers
//! (centroid, circumcenter, incenter, orthocenter) move live. The app
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/trigon/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod ui;
