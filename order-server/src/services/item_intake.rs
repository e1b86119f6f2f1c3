//! Menu item intake
//!
//! Two-phase creation mirroring the mobile flow: a draft (name,
//! description, price) is optionally annotated by the classifier, then the
//! restaurant reviews and submits the final payload. Classifier output
//! only pre-fills editable fields; an abandoned or failed classification
//! leaves the tags unset rather than blocking creation.

use crate::auth::Session;
use crate::classify::{ClassificationService, TagSuggestion};
use crate::db::{CatalogStore, repository};
use shared::error::{AppError, AppResult};
use shared::models::{FoodItem, FoodItemCreate, Role};
use std::sync::Arc;
use validator::Validate;

/// Phase-one draft: basic information about the dish
#[derive(Debug, Clone, Validate)]
pub struct ItemDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0.01, message = "price must be positive"))]
    pub price: f64,
}

#[derive(Debug)]
pub struct ItemIntakeService {
    catalog: Arc<CatalogStore>,
    classifier: Option<Arc<ClassificationService>>,
}

impl ItemIntakeService {
    pub fn new(catalog: Arc<CatalogStore>, classifier: Option<Arc<ClassificationService>>) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    /// Pre-fill the phase-two payload from a draft
    ///
    /// Best-effort: with no classifier configured, or on any classifier
    /// failure, the tags default to unset and the restaurant fills them in
    /// by hand.
    pub async fn suggest(&self, draft: &ItemDraft) -> AppResult<FoodItemCreate> {
        draft.validate()?;

        let suggestion = match &self.classifier {
            Some(classifier) => match classifier.classify(&draft.description).await {
                Ok(suggestion) => suggestion,
                Err(err) => {
                    tracing::warn!(error = %err, "Classification failed, defaulting tags");
                    TagSuggestion::default()
                }
            },
            None => TagSuggestion::default(),
        };

        Ok(FoodItemCreate {
            name: draft.name.clone(),
            description: draft.description.clone(),
            ingredients: vec![],
            price: draft.price,
            calories: suggestion.calories,
            contains_gluten: suggestion.contains_gluten,
            contains_lactose: suggestion.contains_lactose,
            nut_allergy: suggestion.nut_allergy,
            cholesterol_risk: suggestion.cholesterol_risk,
            diabetes_risk: suggestion.diabetes_risk,
            hypertension_risk: suggestion.hypertension_risk,
            high_carb: suggestion.high_carb,
            high_fat: suggestion.high_fat,
        })
    }

    /// Store the reviewed item under the calling restaurant
    pub fn create_item(&self, session: &Session, payload: FoodItemCreate) -> AppResult<FoodItem> {
        if session.role != Role::Restaurant {
            return Err(AppError::permission_denied(
                "only restaurant accounts can create menu items",
            ));
        }
        payload.validate()?;

        let item = repository::food_item::insert(&self.catalog, &session.user_id, payload)?;
        tracing::info!(
            item_id = %item.id,
            restaurant_id = %item.restaurant_id,
            name = %item.name,
            "Menu item created"
        );
        Ok(item)
    }
}
