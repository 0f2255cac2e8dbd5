//! Behavioural tests for the prediction pipeline through the public API.

use disease_predictor::matching::scoring::confidence_percent;
use disease_predictor::{
    Dataset, DiseaseRecord, DiseasePredictor, MatchingConfig, PredictError, PredictionEngine, PredictionOutcome,
    SymptomSelection, FALLBACK_DESCRIPTION,
};

const DISEASES: &str = "\
Disease,Symptom_1,Symptom_2,Symptom_3,Symptom_4,Symptom_5,Symptom_6,Symptom_7,Symptom_8,Symptom_9,Symptom_10,Symptom_11,Symptom_12,Symptom_13,Symptom_14,Symptom_15,Symptom_16,Symptom_17
D,fever,cough
Common Cold,continuous_sneezing,chills,fatigue,cough,high_fever,headache
Common Cold,continuous_sneezing,chills,cough,high_fever
Malaria,chills,vomiting,high_fever,sweating,headache,nausea,muscle_pain
Typhoid,chills,vomiting,fatigue,high_fever,headache,nausea,constipation,abdominal_pain
Dengue,skin_rash,chills,joint_pain,vomiting,fatigue,high_fever,headache,nausea
Tuberculosis,chills,vomiting,fatigue,weight_loss,cough,high_fever,breathlessness
Pneumonia,chills,fatigue,cough,high_fever,breathlessness,sweating
Short,
";

const DESCRIPTIONS: &str = "\
Disease,Description
Common Cold,The common cold is a viral infection of your nose and throat.
Malaria,An infectious disease caused by protozoan parasites.
";

fn dataset() -> Dataset {
    Dataset::from_text(DISEASES, DESCRIPTIONS).unwrap()
}

#[test]
fn test_fever_headache_example() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("fever, headache").unwrap();

    // Four diseases match both tokens via "high_fever"; D is the first 50% match
    let names: Vec<&str> = outcome
        .predictions()
        .iter()
        .map(|p| p.disease.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Common Cold", "Malaria", "Typhoid", "Dengue", "D"]
    );

    let config = MatchingConfig {
        max_results: 100,
        ..MatchingConfig::default()
    };
    let engine = PredictionEngine::with_config(&dataset, config);
    let outcome = engine.predict("fever, headache").unwrap();
    let d = outcome
        .predictions()
        .iter()
        .find(|p| p.disease == "D")
        .unwrap();
    assert_eq!(d.confidence, 50);
    assert_eq!(d.matching_symptoms, vec!["fever"]);
    assert_eq!(d.description, FALLBACK_DESCRIPTION);
}

#[test]
fn test_repeated_tokens_use_total_count() {
    let dataset = Dataset::from_tables(vec![DiseaseRecord::new("D", vec!["fever"])], Vec::new());
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("fever, fever, cough").unwrap();

    let d = &outcome.predictions()[0];
    assert_eq!(d.disease, "D");
    // One distinct matched token over three input tokens
    assert_eq!(d.confidence, 33);
    assert_eq!(d.matching_symptoms, vec!["fever"]);
}

#[test]
fn test_confidence_is_rounded_ratio() {
    let dataset = dataset();
    let input = "chills, cough, sweating, rash, nausea, itching, headache";
    let config = MatchingConfig {
        max_results: 100,
        ..MatchingConfig::default()
    };
    let engine = PredictionEngine::with_config(&dataset, config);
    let outcome = engine.predict(input).unwrap();

    for p in outcome.predictions() {
        assert!(p.confidence <= 100);
        // Best single row never exceeds the union of matched tokens
        assert!(p.confidence <= confidence_percent(p.matching_symptoms.len(), 7));
    }

    let malaria = outcome
        .predictions()
        .iter()
        .find(|p| p.disease == "Malaria")
        .unwrap();
    // chills, sweating, nausea, headache of 7 tokens
    assert_eq!(malaria.confidence, confidence_percent(4, 7));
    assert_eq!(malaria.confidence, 57);
}

#[test]
fn test_top_five_sorted_with_stable_ties() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("chills").unwrap();

    let names: Vec<&str> = outcome
        .predictions()
        .iter()
        .map(|p| p.disease.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Common Cold", "Malaria", "Typhoid", "Dengue", "Tuberculosis"]
    );
    assert!(outcome.predictions().iter().all(|p| p.confidence == 100));
}

#[test]
fn test_ranking_descending() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine
        .predict("breathlessness, sweating, cough, chills")
        .unwrap();

    let confidences: Vec<u8> = outcome.predictions().iter().map(|p| p.confidence).collect();
    let mut sorted = confidences.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(confidences, sorted);
    assert_eq!(outcome.predictions()[0].disease, "Pneumonia");
    assert_eq!(outcome.predictions()[0].confidence, 100);
}

#[test]
fn test_duplicate_rows_union_matches() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("fatigue, headache, sneezing").unwrap();

    let cold = &outcome.predictions()[0];
    assert_eq!(cold.disease, "Common Cold");
    assert_eq!(cold.confidence, 100);
    assert_eq!(
        cold.matching_symptoms,
        vec!["fatigue", "headache", "sneezing"]
    );
    assert_eq!(
        cold.description,
        "The common cold is a viral infection of your nose and throat."
    );
}

#[test]
fn test_short_row_never_matches() {
    let dataset = dataset();
    let short = dataset
        .records
        .iter()
        .find(|r| r.disease == "Short")
        .unwrap();
    assert!(short.symptoms.iter().all(String::is_empty));

    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("a, e, i, o, u").unwrap();
    assert!(outcome.predictions().iter().all(|p| p.disease != "Short"));
}

#[test]
fn test_empty_input_rejected() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    assert_eq!(engine.predict(""), Err(PredictError::EmptyInput));
    assert_eq!(engine.predict(" \t\n "), Err(PredictError::EmptyInput));
}

#[test]
fn test_no_match_signal() {
    let dataset = dataset();
    let engine = PredictionEngine::new(&dataset);
    let outcome = engine.predict("hair loss").unwrap();
    assert_eq!(outcome, PredictionOutcome::NoMatches);
    assert_eq!(outcome.top_confidence(), None);
}

#[test]
fn test_idempotent_predictions() {
    let predictor = DiseasePredictor::with_dataset(dataset(), MatchingConfig::default());
    let input = "chills, vomiting, pain";
    let first = predictor.predict(input).unwrap();
    let second = predictor.predict(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_selection_feeds_predictor() {
    let predictor = DiseasePredictor::with_dataset(dataset(), MatchingConfig::default());
    let vocabulary = predictor.dataset().unwrap().vocabulary();

    let mut selection = SymptomSelection::new();
    for symptom in vocabulary.search("breath") {
        selection.add(symptom);
    }
    selection.add("sweating");
    selection.add("sweating");
    assert_eq!(selection.to_input(), "breathlessness, sweating");

    let outcome = predictor.predict(&selection.to_input()).unwrap();
    assert_eq!(outcome.predictions()[0].disease, "Pneumonia");
}
