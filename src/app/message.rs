// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::cart_panel;
use crate::ui::header;
use crate::ui::product_grid;
use crate::ui::toast;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    ProductGrid(product_grid::Message),
    CartPanel(cart_panel::Message),
    Toast(toast::Message),
    /// Periodic frame tick advancing the decorative background rotation.
    AnimationTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
