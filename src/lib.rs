// SPDX-License-Identifier: MPL-2.0
//! `alter_ego` is a single-page storefront built with the Iced GUI framework.
//!
//! It renders a fixed product catalog over a decorative animated 3D background
//! and keeps an in-memory shopping cart with toast feedback. There is no
//! server, no persistence of cart state, and no payment processing.

#![doc(html_root_url = "https://docs.rs/alter_ego/0.1.0")]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
