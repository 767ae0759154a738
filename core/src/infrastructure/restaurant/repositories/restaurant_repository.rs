use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Select,
    sea_query::{Expr, Func, LikeExpr, SelectStatement},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        restaurant::{
            entities::{ComplianceStatus, Restaurant, RestaurantSummary},
            ports::RestaurantRepository,
            value_objects::{
                CHATBOT_RATINGS, ChatbotQuery, RestaurantSearchFilter, RestaurantSort,
                SimilarityQuery,
            },
        },
    },
    entity::{
        favorite_restaurants,
        restaurant_categories,
        restaurants::{Column, Entity, Model},
    },
    infrastructure::restaurant::mappers::{group_categories, map_summaries},
};

const LIKE_ESCAPE: char = '\\';

/// Lowercased `%keyword%` where `%` and `_` in `keyword` match literally.
fn escaped_contains(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn contains_pattern(keyword: &str) -> LikeExpr {
    LikeExpr::new(escaped_contains(keyword)).escape(LIKE_ESCAPE)
}

#[derive(Debug, Clone)]
pub struct PostgresRestaurantRepository {
    pub db: DatabaseConnection,
}

impl PostgresRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ids of restaurants carrying at least one of the aliases.
    fn with_any_category(categories: Vec<String>) -> SelectStatement {
        restaurant_categories::Entity::find()
            .select_only()
            .column(restaurant_categories::Column::RestaurantId)
            .filter(restaurant_categories::Column::Alias.is_in(categories))
            .into_query()
    }

    async fn load_categories(
        &self,
        restaurant_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, CoreError> {
        if restaurant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = restaurant_categories::Entity::find()
            .filter(restaurant_categories::Column::RestaurantId.is_in(restaurant_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load restaurant categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(group_categories(rows))
    }

    async fn with_categories(&self, model: Option<Model>) -> Result<Option<Restaurant>, CoreError> {
        let Some(model) = model else {
            return Ok(None);
        };

        let mut restaurant = Restaurant::from(model);
        restaurant.categories = self
            .load_categories(vec![restaurant.id])
            .await?
            .remove(&restaurant.id)
            .unwrap_or_default();

        Ok(Some(restaurant))
    }

    async fn summaries(&self, select: Select<Entity>) -> Result<Vec<RestaurantSummary>, CoreError> {
        let models = select.all(&self.db).await.map_err(|e| {
            error!("Failed to query restaurants: {}", e);
            CoreError::InternalServerError
        })?;

        let ids = models.iter().map(|m| m.id).collect();
        let categories = self.load_categories(ids).await?;

        Ok(map_summaries(models, categories))
    }
}

impl RestaurantRepository for PostgresRestaurantRepository {
    async fn get_by_id(&self, restaurant_id: Uuid) -> Result<Option<Restaurant>, CoreError> {
        let model = Entity::find_by_id(restaurant_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_categories(model).await
    }

    async fn get_by_business_id(&self, business_id: String) -> Result<Option<Restaurant>, CoreError> {
        let model = Entity::find()
            .filter(Column::BusinessId.eq(business_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant by business id: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_categories(model).await
    }

    async fn find_similar(&self, query: SimilarityQuery) -> Result<Vec<RestaurantSummary>, CoreError> {
        let select = Entity::find()
            .filter(Column::Neighborhood.eq(query.neighborhood))
            .filter(Column::Compliance.eq(query.compliance.as_str()))
            .filter(Column::Id.in_subquery(Self::with_any_category(query.categories)))
            // false sorts first: the source restaurant leads when it matches
            .order_by(Expr::col((Entity, Column::Id)).ne(query.exclude_id), Order::Asc)
            .order_by_asc(Column::Id)
            .limit(query.limit);

        self.summaries(select).await
    }

    async fn find_chatbot_candidates(
        &self,
        query: ChatbotQuery,
    ) -> Result<Vec<RestaurantSummary>, CoreError> {
        let select = Entity::find()
            .filter(Column::Neighborhood.eq(query.location))
            .filter(Column::Compliance.eq(ComplianceStatus::Compliant.as_str()))
            .filter(Column::Rating.is_in(CHATBOT_RATINGS))
            .filter(Column::Id.in_subquery(Self::with_any_category(query.categories)))
            .order_by_asc(Column::Id);

        self.summaries(select).await
    }

    async fn search(
        &self,
        filter: RestaurantSearchFilter,
    ) -> Result<(Vec<RestaurantSummary>, u64), CoreError> {
        let mut select = Entity::find();

        if let Some(keyword) = filter.keyword {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col((Entity, Column::Name))))
                    .like(contains_pattern(&keyword)),
            );
        }
        if !filter.neighborhoods.is_empty() {
            select = select.filter(Column::Neighborhood.is_in(filter.neighborhoods));
        }
        if !filter.categories.is_empty() {
            select =
                select.filter(Column::Id.in_subquery(Self::with_any_category(filter.categories)));
        }
        if !filter.prices.is_empty() {
            select = select.filter(Column::Price.is_in(filter.prices));
        }
        if let Some(min_rating) = filter.min_rating {
            select = select.filter(Column::Rating.gte(min_rating));
        }
        if let Some(compliance) = filter.compliance {
            select = select.filter(Column::Compliance.eq(compliance.as_str()));
        }
        if let Some(user_id) = filter.favorites_of {
            let favorites = favorite_restaurants::Entity::find()
                .select_only()
                .column(favorite_restaurants::Column::RestaurantId)
                .filter(favorite_restaurants::Column::UserId.eq(user_id))
                .into_query();
            select = select.filter(Column::Id.in_subquery(favorites));
        }

        let total = select.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count restaurants: {}", e);
            CoreError::InternalServerError
        })?;

        select = match filter.sort {
            Some(RestaurantSort::RatingAsc) => select.order_by_asc(Column::Rating),
            Some(RestaurantSort::RatingDesc) => select.order_by_desc(Column::Rating),
            Some(RestaurantSort::NameAsc) => select.order_by_asc(Column::Name),
            Some(RestaurantSort::NameDesc) => select.order_by_desc(Column::Name),
            None => select,
        };
        let select = select
            .order_by_asc(Column::Id)
            .offset(filter.offset)
            .limit(filter.limit);

        Ok((self.summaries(select).await?, total))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbBackend;

    use super::*;

    #[test]
    fn test_keyword_wildcards_are_escaped() {
        assert_eq!(escaped_contains("100%_Pure"), r"%100\%\_pure%");
        assert_eq!(escaped_contains(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_plain_keyword_is_wrapped() {
        assert_eq!(escaped_contains("Joe's Pizza"), "%joe's pizza%");
    }

    #[test]
    fn test_keyword_filter_declares_escape_character() {
        let sql = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((Entity, Column::Name))))
                    .like(contains_pattern("50%")),
            )
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }
}
