//! # Foodpad Core
//!
//! Form state and view state for authoring one food item at a time.
//!
//! This crate contains the pure state machines behind the authoring screen:
//! - [`FoodForm`]: the in-progress food item, its nutrient list, and the
//!   derived "next nutrient to add" candidate
//! - [`AppView`]: top-level view state plus the barcode value in transit from
//!   the scanner to the form
//! - [`CatalogApi`]: the async seam to the remote catalog service, consumed by
//!   [`FoodForm::save`]
//! - [`AppConfig`]: runtime configuration resolved once at startup
//!
//! **No transport concerns**: HTTP lives in `foodpad-api`, image handling in
//! `foodpad-scan`. Everything here is synchronous except `save`.

pub mod api;
pub mod config;
pub mod form;
pub mod view;

pub use api::{CatalogApi, CatalogError};
pub use config::{AppConfig, ConfigError};
pub use form::{FoodForm, MutationOutcome, SaveOutcome};
pub use view::{AppView, ViewKind};
