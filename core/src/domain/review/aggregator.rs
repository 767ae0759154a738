use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::review::entities::{MAX_RATING, MIN_RATING, Review};

/// Count, mean and star histogram of a restaurant's visible reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewStats {
    pub reviews_count: u64,
    pub ratings_avg: f64,
    /// Always holds the keys 1 to 5.
    pub ratings_distribution: BTreeMap<u8, u64>,
}

pub fn aggregate_reviews(reviews: &[Review]) -> ReviewStats {
    aggregate_ratings(reviews.iter().map(|r| r.rating))
}

/// Ratings outside 1..=5 count towards `reviews_count` and the mean but not
/// towards the histogram.
pub fn aggregate_ratings<I>(ratings: I) -> ReviewStats
where
    I: IntoIterator<Item = i32>,
{
    let mut ratings_distribution: BTreeMap<u8, u64> =
        (MIN_RATING..=MAX_RATING).map(|star| (star as u8, 0)).collect();
    let mut reviews_count = 0u64;
    let mut total = 0i64;

    for rating in ratings {
        reviews_count += 1;
        total += i64::from(rating);

        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            *ratings_distribution.entry(rating as u8).or_default() += 1;
        }
    }

    let ratings_avg = if reviews_count == 0 {
        0.0
    } else {
        total as f64 / reviews_count as f64
    };

    ReviewStats {
        reviews_count,
        ratings_avg,
        ratings_distribution,
    }
}
