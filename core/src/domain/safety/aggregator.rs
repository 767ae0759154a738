use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::safety::entities::SafetyFeedback;

/// Share of "yes" answers per checklist question, as a percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistStatistics {
    pub responses: u64,
    pub temperature_required: f64,
    pub contact_info_required: f64,
    pub employee_mask: f64,
    pub capacity_compliant: f64,
    pub distance_compliant: f64,
}

/// Questionnaire results shown on a restaurant profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SafetyFeedbackSummary {
    pub latest_feedback: Option<SafetyFeedback>,
    pub average_safety_rating: Option<f64>,
    pub statistics: ChecklistStatistics,
}

fn percentage(yes: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        yes as f64 * 100.0 / total as f64
    }
}

pub fn summarize_feedback(feedback: &[SafetyFeedback]) -> SafetyFeedbackSummary {
    let responses = feedback.len() as u64;
    let mut yes = [0u64; 5];
    let mut total_level = 0i64;

    for item in feedback {
        let c = &item.checklist;
        let answers = [
            c.temperature_required,
            c.contact_info_required,
            c.employee_mask,
            c.capacity_compliant,
            c.distance_compliant,
        ];
        for (count, answer) in yes.iter_mut().zip(answers) {
            *count += u64::from(answer);
        }
        total_level += i64::from(item.safety_level);
    }

    let [temperature, contact, mask, capacity, distance] = yes;

    SafetyFeedbackSummary {
        latest_feedback: feedback.iter().max_by_key(|f| f.created_at).cloned(),
        average_safety_rating: (responses > 0).then(|| total_level as f64 / responses as f64),
        statistics: ChecklistStatistics {
            responses,
            temperature_required: percentage(temperature, responses),
            contact_info_required: percentage(contact, responses),
            employee_mask: percentage(mask, responses),
            capacity_compliant: percentage(capacity, responses),
            distance_compliant: percentage(distance, responses),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::safety::entities::SafetyChecklist;

    fn feedback(level: i32, mask: bool, minutes_ago: i64) -> SafetyFeedback {
        let mut item = SafetyFeedback::new(
            Uuid::new_v4(),
            None,
            level,
            SafetyChecklist {
                employee_mask: mask,
                distance_compliant: true,
                ..Default::default()
            },
        );
        item.created_at = Utc::now() - Duration::minutes(minutes_ago);
        item
    }

    #[test]
    fn test_no_feedback() {
        let summary = summarize_feedback(&[]);

        assert!(summary.latest_feedback.is_none());
        assert!(summary.average_safety_rating.is_none());
        assert_eq!(summary.statistics, ChecklistStatistics::default());
    }

    #[test]
    fn test_latest_average_and_percentages() {
        let newest = feedback(2, false, 1);
        let items = vec![feedback(5, true, 30), newest.clone(), feedback(4, true, 10), feedback(5, true, 60)];

        let summary = summarize_feedback(&items);

        assert_eq!(summary.latest_feedback, Some(newest));
        assert_eq!(summary.average_safety_rating, Some(4.0));
        assert_eq!(summary.statistics.responses, 4);
        assert_eq!(summary.statistics.employee_mask, 75.0);
        assert_eq!(summary.statistics.distance_compliant, 100.0);
        assert_eq!(summary.statistics.temperature_required, 0.0);
    }
}
