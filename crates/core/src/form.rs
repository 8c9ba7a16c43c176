//! The food-item authoring form.
//!
//! [`FoodForm`] is the mutable state behind the "create food" screen. One
//! instance exists per authoring session, exclusively owned by the screen that
//! created it, and is discarded without persistence if the user navigates away
//! before saving.
//!
//! Two rules shape every mutation:
//! - no two nutrient entries share a kind
//! - the "next nutrient to add" candidate is recomputed synchronously after
//!   every change to the nutrient list, so observers never see a candidate
//!   that is already present (the one exception is [`FoodForm::set_nutrient_to_add`],
//!   which deliberately accepts whatever the view hands it)
//!
//! Views observe changes through a pull-based revision counter: every applied
//! mutation increments [`FoodForm::revision`].

use crate::api::{CatalogApi, CatalogError};
use foodpad_types::{
    FoodItemRecord, FundamentalFoodItem, NutrientEntry, NutrientKind, Percentage,
};

/// Whether a mutation changed the form.
///
/// Operations that target a nutrient kind which is absent (or try to add when
/// nothing remains) are no-ops rather than errors. They return `Ignored` so
/// callers and tests can see the no-op instead of it being silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Ignored,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// The result of a save attempt that did not fail.
///
/// An empty brand skips the network call entirely. That skip is deliberate
/// current behaviour, not an error, but it is reported distinctly so callers
/// can surface it if they choose to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The catalog accepted the food item.
    Saved,
    /// The brand field was empty; no network call was made.
    SkippedEmptyBrand,
}

/// The in-progress food item being authored.
#[derive(Debug, Clone, Default)]
pub struct FoodForm {
    title: String,
    brand: String,
    barcode: String,
    nutrients: Vec<NutrientEntry>,
    nutrient_to_add: Option<NutrientKind>,
    revision: u64,
}

impl FoodForm {
    /// Creates an empty form with the full catalog available.
    pub fn new() -> Self {
        let mut form = Self {
            title: String::new(),
            brand: String::new(),
            barcode: String::new(),
            nutrients: Vec::new(),
            nutrient_to_add: None,
            revision: 0,
        };
        form.recompute_candidate();
        form
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// The nutrient entries in insertion order, which is the display order.
    pub fn nutrients(&self) -> &[NutrientEntry] {
        &self.nutrients
    }

    /// The next candidate kind offered for addition, or `None` when every
    /// kind in the catalog is already present.
    pub fn nutrient_to_add(&self) -> Option<NutrientKind> {
        self.nutrient_to_add
    }

    /// Monotonic change counter. Views poll this to detect mutations; every
    /// applied mutation increments it exactly once.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update_title(&mut self, title: &str) {
        self.title = title.to_owned();
        self.bump();
    }

    pub fn update_brand(&mut self, brand: &str) {
        self.brand = brand.to_owned();
        self.bump();
    }

    pub fn update_barcode(&mut self, barcode: &str) {
        self.barcode = barcode.to_owned();
        self.bump();
    }

    /// The kinds still eligible for addition, in catalog order.
    ///
    /// Always the exact complement of the kinds already present: the union of
    /// both sets is the whole catalog and their intersection is empty.
    pub fn remaining_kinds(&self) -> Vec<NutrientKind> {
        NutrientKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    /// Appends the current candidate kind with a zero percentage.
    ///
    /// Ignored when no candidate is available, or when the candidate is
    /// already present (reachable only via [`FoodForm::set_nutrient_to_add`]);
    /// the nutrient list is never corrupted either way.
    pub fn add_nutrient(&mut self) -> MutationOutcome {
        let Some(kind) = self.nutrient_to_add else {
            tracing::debug!("add_nutrient ignored: no nutrient kind remaining");
            return MutationOutcome::Ignored;
        };
        if self.contains(kind) {
            tracing::debug!(%kind, "add_nutrient ignored: kind already present");
            return MutationOutcome::Ignored;
        }

        self.nutrients.push(NutrientEntry {
            kind,
            percentage: Percentage::zero(),
        });
        self.recompute_candidate();
        self.bump();
        MutationOutcome::Applied
    }

    /// Removes the entry for `kind`. Ignored when no such entry exists.
    pub fn remove_nutrient(&mut self, kind: NutrientKind) -> MutationOutcome {
        let before = self.nutrients.len();
        self.nutrients.retain(|entry| entry.kind != kind);
        if self.nutrients.len() == before {
            tracing::debug!(%kind, "remove_nutrient ignored: kind not present");
            return MutationOutcome::Ignored;
        }

        self.recompute_candidate();
        self.bump();
        MutationOutcome::Applied
    }

    /// Overwrites the percentage for `kind` from raw form input.
    ///
    /// Unparsable input degrades to `0`. Ignored when the kind is not present,
    /// which indicates a stale reference held by the caller.
    pub fn update_nutrient_percentage(&mut self, kind: NutrientKind, raw: &str) -> MutationOutcome {
        match self.nutrients.iter_mut().find(|entry| entry.kind == kind) {
            Some(entry) => {
                entry.percentage = Percentage::parse_lossy(raw);
                self.bump();
                MutationOutcome::Applied
            }
            None => {
                tracing::debug!(%kind, "update_nutrient_percentage ignored: kind not present");
                MutationOutcome::Ignored
            }
        }
    }

    /// Sets the candidate kind without checking that it is still remaining.
    ///
    /// The view's selection widget drives this, so the value is taken
    /// verbatim. A candidate that is already present is caught later by
    /// [`FoodForm::add_nutrient`].
    pub fn set_nutrient_to_add(&mut self, kind: NutrientKind) {
        self.nutrient_to_add = Some(kind);
        self.bump();
    }

    /// Builds the wire-format record from the current state.
    ///
    /// Brand and barcode are collected by the form but excluded here, matching
    /// the catalog's create-food-item schema.
    pub fn to_record(&self) -> FoodItemRecord {
        FoodItemRecord {
            fundamental: FundamentalFoodItem {
                title: self.title.clone(),
                nutrients: self.nutrients.clone(),
            },
        }
    }

    /// Hands the finished food item to the catalog service.
    ///
    /// An empty brand skips the call and resolves with
    /// [`SaveOutcome::SkippedEmptyBrand`]; this is the only validation the
    /// save path performs. A failing call propagates untouched: the form does
    /// not retry and does not inspect the failure.
    pub async fn save(&self, api: &dyn CatalogApi) -> Result<SaveOutcome, CatalogError> {
        if self.brand.is_empty() {
            tracing::warn!("save skipped: brand is empty");
            return Ok(SaveOutcome::SkippedEmptyBrand);
        }

        let record = self.to_record();
        api.create_food_item(&record).await?;
        tracing::info!(title = %self.title, "food item saved");
        Ok(SaveOutcome::Saved)
    }

    fn contains(&self, kind: NutrientKind) -> bool {
        self.nutrients.iter().any(|entry| entry.kind == kind)
    }

    fn recompute_candidate(&mut self) {
        self.nutrient_to_add = self.remaining_kinds().into_iter().next();
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
