// End-to-end pipeline scenarios with fixture backbones

use image::{DynamicImage, Rgb, RgbImage};
use ndarray::Array4;

use mealscan::backbone::{Backbone, FallbackBackbone};
use mealscan::error::AnalysisError;
use mealscan::gatekeeper::{ForcedAcceptGate, KeywordGate};
use mealscan::labels::LabelVocabulary;
use mealscan::pipeline::{Pipeline, NON_FOOD_NAME};

/// Backbone fixture that returns a canned distribution.
struct FixedBackbone {
    probs: Vec<f32>,
}

impl Backbone for FixedBackbone {
    fn classify(&mut self, _input: &Array4<f32>) -> Result<Vec<f32>, AnalysisError> {
        Ok(self.probs.clone())
    }
}

fn vocab() -> LabelVocabulary {
    LabelVocabulary::new(
        ["sports_car", "cheeseburger", "pizza", "carbonara", "dog"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

fn png_bytes() -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(320, 240, Rgb([180, 120, 60])));
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode");
    buf
}

fn pipeline_with(probs: Vec<f32>) -> Pipeline {
    Pipeline::with_parts(
        Box::new(FixedBackbone { probs }),
        vocab(),
        Box::new(KeywordGate),
        3,
    )
}

#[test]
fn cheeseburger_is_recognized_end_to_end() {
    let mut pipeline = pipeline_with(vec![0.01, 0.80, 0.10, 0.05, 0.04]);

    let result = pipeline.analyze(&png_bytes()).expect("analysis");

    assert!(result.is_food);
    assert_eq!(result.food_name, "Cheeseburger");
    assert_eq!(result.candidates.len(), 3);
    assert!(result.candidates[0].confidence >= result.candidates[1].confidence);
    assert!(result.candidates[1].confidence >= result.candidates[2].confidence);

    let portion = result.portion.expect("accepted image gets a portion");
    assert_eq!(portion.estimated_weight_grams, 250);
}

#[test]
fn sports_car_is_rejected_without_a_portion() {
    let mut pipeline = pipeline_with(vec![0.90, 0.04, 0.03, 0.02, 0.01]);

    let result = pipeline.analyze(&png_bytes()).expect("analysis");

    assert!(!result.is_food);
    assert_eq!(result.food_name, NON_FOOD_NAME);
    assert!(result.portion.is_none(), "no portion may be computed for non-food");
    assert_eq!(result.candidates.len(), 3, "candidates are kept for transparency");
}

#[test]
fn malformed_bytes_abort_with_decode_error() {
    let mut pipeline = pipeline_with(vec![0.2, 0.2, 0.2, 0.2, 0.2]);

    let err = pipeline.analyze(b"truncated garbage").unwrap_err();
    assert!(matches!(err, AnalysisError::Decode(_)));
}

#[test]
fn forced_accept_passes_a_denied_label_through() {
    let mut pipeline = Pipeline::with_parts(
        Box::new(FixedBackbone { probs: vec![0.01, 0.02, 0.02, 0.05, 0.90] }),
        vocab(),
        Box::new(ForcedAcceptGate),
        3,
    );

    let result = pipeline.analyze(&png_bytes()).expect("analysis");
    assert!(result.is_food, "forced accept never rejects");
    assert_eq!(result.food_name, "Dog");
}

#[test]
fn fallback_backbone_is_deterministic_per_instance() {
    let mut backbone = FallbackBackbone::new(10);
    let input = Array4::from_elem((1, 3, 224, 224), 0.5);

    let first = backbone.classify(&input).expect("classify");
    let second = backbone.classify(&input).expect("classify");

    assert_eq!(first, second, "same head and input must give bit-identical output");
    let sum: f32 = first.iter().sum();
    assert!((sum - 1.0).abs() < 1e-4, "fallback output is a distribution");
}

#[test]
fn accepted_result_serializes_to_the_flat_wire_shape() {
    let mut pipeline = pipeline_with(vec![0.01, 0.80, 0.10, 0.05, 0.04]);
    let result = pipeline.analyze(&png_bytes()).expect("analysis");

    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["isFood"], true);
    assert_eq!(json["foodName"], "Cheeseburger");
    assert_eq!(json["portionSize"], "medium");
    assert_eq!(json["estimatedWeightGrams"], 250);
    assert_eq!(json["candidates"][0]["food"], "Cheeseburger");
    assert_eq!(json["candidates"][0]["class"], "cheeseburger");
}

#[test]
fn rejected_result_omits_the_portion_fields() {
    let mut pipeline = pipeline_with(vec![0.90, 0.04, 0.03, 0.02, 0.01]);
    let result = pipeline.analyze(&png_bytes()).expect("analysis");

    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["isFood"], false);
    assert!(json.get("portionSize").is_none());
    assert!(json.get("estimatedWeightGrams").is_none());
}
