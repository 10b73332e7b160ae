//! Confidence scoring over populated fields

use paneboard_domain::constants::{
    ADDRESS_CONFIDENCE_WEIGHT, NAME_CONFIDENCE_WEIGHT, PHONE_CONFIDENCE_WEIGHT,
};
use paneboard_domain::{ConfidenceModel, ExtractedFields};

/// Score `fields` under `model`. Always in `[0, 1]`, rounded to two decimals.
pub fn score(model: ConfidenceModel, fields: &ExtractedFields) -> f32 {
    let raw = match model {
        ConfidenceModel::WeightedRequired => weighted_required(fields),
        ConfidenceModel::RequiredFraction => required_fraction(fields),
    };
    round2(raw.clamp(0.0, 1.0))
}

fn weighted_required(fields: &ExtractedFields) -> f32 {
    let mut total = 0.0;
    if is_filled(fields.customer_name.as_deref()) {
        total += NAME_CONFIDENCE_WEIGHT;
    }
    if is_filled(fields.address.as_deref()) {
        total += ADDRESS_CONFIDENCE_WEIGHT;
    }
    if is_filled(fields.phone.as_deref()) {
        total += PHONE_CONFIDENCE_WEIGHT;
    }
    total.min(1.0)
}

fn required_fraction(fields: &ExtractedFields) -> f32 {
    let required = fields.required_fields();
    let filled = required.iter().filter(|value| is_filled(**value)).count();
    // At most six fields; the casts are exact.
    filled as f32 / required.len() as f32
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
