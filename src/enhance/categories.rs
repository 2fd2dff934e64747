use indexmap::IndexMap;

use crate::report::{ErrorOccurrence, Feature};

const UNKNOWN_ERROR_TYPE: &str = "UnknownError";

/// Group failures by their literal error type, preserving first-seen order.
pub fn categorize_errors(features: &[Feature]) -> IndexMap<String, Vec<ErrorOccurrence>> {
    let mut categories: IndexMap<String, Vec<ErrorOccurrence>> = IndexMap::new();

    for feature in features {
        for failure in &feature.failures {
            let error_type = failure
                .error_type
                .clone()
                .unwrap_or_else(|| UNKNOWN_ERROR_TYPE.to_string());

            categories.entry(error_type).or_default().push(ErrorOccurrence {
                feature: feature.feature_name.clone(),
                scenario: failure.scenario_name.clone(),
                message: failure.error_message.clone().unwrap_or_default(),
            });
        }
    }

    categories
}
