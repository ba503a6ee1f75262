// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across components.

pub mod button;
pub mod container;
