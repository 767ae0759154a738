use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    domain::restaurant::entities::{ComplianceStatus, Restaurant, RestaurantSummary},
    entity::{restaurant_categories, restaurants},
};

impl From<&restaurants::Model> for Restaurant {
    fn from(model: &restaurants::Model) -> Self {
        Self {
            id: model.id,
            business_id: model.business_id.clone(),
            name: model.name.clone(),
            address: model.address.clone(),
            postcode: model.postcode.clone(),
            compliance: model.compliance.parse().unwrap_or(ComplianceStatus::Unknown),
            neighborhood: model.neighborhood.clone(),
            // loaded from restaurant_categories
            categories: Vec::new(),
            rating: model.rating,
            price: model.price.clone(),
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Self::from(&model)
    }
}

pub fn group_categories(rows: Vec<restaurant_categories::Model>) -> HashMap<Uuid, Vec<String>> {
    let mut categories: HashMap<Uuid, Vec<String>> = HashMap::new();
    for row in rows {
        categories.entry(row.restaurant_id).or_default().push(row.alias);
    }
    for aliases in categories.values_mut() {
        aliases.sort();
    }
    categories
}

pub fn map_summaries(
    models: Vec<restaurants::Model>,
    mut categories: HashMap<Uuid, Vec<String>>,
) -> Vec<RestaurantSummary> {
    models
        .into_iter()
        .map(|model| {
            let mut restaurant = Restaurant::from(model);
            restaurant.categories = categories.remove(&restaurant.id).unwrap_or_default();
            RestaurantSummary::from(restaurant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn model(compliance: &str) -> restaurants::Model {
        let now = Utc::now().fixed_offset();
        restaurants::Model {
            id: Uuid::new_v4(),
            business_id: "katz-delicatessen".to_string(),
            name: "Katz's".to_string(),
            address: "205 E Houston St".to_string(),
            postcode: "10002".to_string(),
            compliance: compliance.to_string(),
            neighborhood: Some("Lower East Side".to_string()),
            rating: Some(4.0),
            price: Some("$$".to_string()),
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unrecognized_compliance_maps_to_unknown() {
        assert_eq!(Restaurant::from(model("COVID")).compliance, ComplianceStatus::Unknown);
        assert_eq!(
            Restaurant::from(model("NON_COMPLIANT")).compliance,
            ComplianceStatus::NonCompliant
        );
    }

    #[test]
    fn test_summaries_get_their_categories() {
        let restaurant = model("COMPLIANT");
        let id = restaurant.id;
        let rows = vec![
            restaurant_categories::Model {
                id: Uuid::new_v4(),
                restaurant_id: id,
                alias: "sandwiches".to_string(),
            },
            restaurant_categories::Model {
                id: Uuid::new_v4(),
                restaurant_id: id,
                alias: "delis".to_string(),
            },
        ];

        let summaries = map_summaries(vec![restaurant], group_categories(rows));
        assert_eq!(summaries[0].categories, vec!["delis", "sandwiches"]);
    }
}
