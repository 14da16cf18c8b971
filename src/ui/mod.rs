// SPDX-License-Identifier: MPL-2.0
//! UI components: the gallery grid, the detail overlay, shared styles and
//! design tokens.

pub mod design_tokens;
pub mod facts;
pub mod gallery;
pub mod modal;
pub mod styles;
