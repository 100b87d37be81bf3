//! Category CRUD and usage ranking.

use std::sync::Arc;

use tracing::info;

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_database::repositories::category::CategoryRepository;
use reporthub_entity::category::{Category, CategoryUsage};

use crate::context::RequestContext;

/// Hard ceiling for the top-categories listing.
const MAX_TOP_LIMIT: i64 = 50;

/// Category management.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Category repository.
    categories: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(categories: Arc<CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Lists all categories.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    /// Loads one category by id.
    pub async fn get(&self, id: i64) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Creates a new category.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Category name cannot be empty"));
        }

        let category = self.categories.create(name, description).await?;
        info!(category_id = category.id, created_by = ctx.user_id, "Category created");
        Ok(category)
    }

    /// Updates a category's name and/or description.
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Category> {
        if let Some(n) = name {
            if n.trim().is_empty() {
                return Err(AppError::validation("Category name cannot be empty"));
            }
        }
        self.categories.update(id, name, description).await
    }

    /// Deletes a category that no report uses.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.categories.delete(id).await? {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }
        Ok(())
    }

    /// The most-used categories, at most `limit` (clamped to 1..=50).
    pub async fn top(&self, limit: i64) -> AppResult<Vec<CategoryUsage>> {
        self.categories.top_used(limit.clamp(1, MAX_TOP_LIMIT)).await
    }
}
