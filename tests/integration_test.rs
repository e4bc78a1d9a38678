// Integration tests for MediRank
use medirank::prelude::*;
use medirank::FALLBACK_EXPLANATION;
use std::io::Write;

fn dengue_vector() -> FeatureVector {
    FeatureVector::from_array([38.5, 45.0, 4.0, 1.0, 0.6, 0.9, 0.9])
}

#[test]
fn test_dengue_exact_match() {
    let references = ReferenceTable::builtin();
    let explanations = ExplanationTable::builtin();

    let ranking = rank(&dengue_vector(), references.diseases()).unwrap();
    let top = ranking.top();
    assert_eq!(top.disease, "Dengue DHF");
    assert_eq!(top.rounded_distance(), 0.0);
    assert_eq!(top.rounded_similarity(), 100.0);

    let why = explain(&top.disease, &explanations);
    assert_eq!(
        why,
        vec![
            "Fever and platelet count match dengue profile closely.",
            "Bleeding and high pain levels are consistent with dengue hemorrhagic fever symptoms.",
            "Nausea and fatigue further support dengue likelihood.",
        ]
    );
}

#[test]
fn test_dengue_ranking_order() {
    let references = ReferenceTable::builtin();
    let ranking = rank(&dengue_vector(), references.diseases()).unwrap();

    // platelet count dominates the distance
    let names: Vec<&str> = ranking.iter().map(|e| e.disease.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Dengue DHF",
            "Malaria",
            "Leukemia",
            "Typhoid Fever",
            "COVID-19",
            "Meningitis",
            "Hepatitis A",
            "Sepsis",
            "Appendicitis",
        ]
    );
}

#[test]
fn test_sepsis_from_record() {
    let record = PatientRecord {
        fever: 39.0,
        platelet: 180.0,
        wbc: 25.0,
        bleeding: Bleeding::No,
        fatigue: Severity::Mild,
        pain: Severity::Moderate,
        nausea: Nausea::None,
        ..Default::default()
    };
    record.validate().unwrap();

    let references = ReferenceTable::builtin();
    let explanations = ExplanationTable::builtin();
    let diagnosis = diagnose(&record, &references, &explanations).unwrap();

    assert_eq!(diagnosis.top, "Sepsis");
    assert_eq!(diagnosis.ranking.top().similarity, 100.0);
    assert_eq!(diagnosis.explanation.len(), 2);
}

#[test]
fn test_default_form_input() {
    // form defaults: 38.5 C, platelet 55, wbc 3.0, no symptoms
    let diagnosis = Diagnoser::builtin()
        .diagnose(&PatientRecord::default())
        .unwrap();

    assert_eq!(diagnosis.top, "Dengue DHF");
    let top = diagnosis.ranking.top();
    assert!(top.similarity > 90.0 && top.similarity < 100.0);
}

#[test]
fn test_single_reference_equal_to_patient() {
    let references = vec![ReferenceDisease::new(
        "Dengue DHF",
        [38.5, 45.0, 4.0, 1.0, 0.6, 0.9, 0.9],
        &["x"],
    )];
    let result = rank(&dengue_vector(), &references);
    assert!(matches!(result, Err(Error::DegenerateInput(_))));
}

#[test]
fn test_empty_references() {
    assert!(matches!(
        rank(&dengue_vector(), &[]),
        Err(Error::EmptyReferenceSet)
    ));
}

#[test]
fn test_unknown_disease_explanation() {
    let explanations = ExplanationTable::builtin();
    assert_eq!(explain("Scurvy", &explanations), vec![FALLBACK_EXPLANATION]);
}

#[test]
fn test_labels_from_strings() {
    let record = PatientRecord {
        fever: 39.5,
        platelet: 70.0,
        wbc: 6.5,
        bleeding: "Yes".parse().unwrap(),
        fatigue: "Severe".parse().unwrap(),
        pain: "Severe".parse().unwrap(),
        nausea: "Frequent".parse().unwrap(),
        ..Default::default()
    };
    let diagnosis = Diagnoser::builtin().diagnose(&record).unwrap();
    assert_eq!(diagnosis.top, "Malaria");

    assert!(matches!(
        "Frequent".parse::<Severity>(),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_table_file_ranks_like_builtin() {
    let builtin = ReferenceTable::builtin();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(builtin.to_json_pretty().unwrap().as_bytes())
        .unwrap();

    let loaded = ReferenceTable::from_path(file.path()).unwrap();
    let patient = FeatureVector::from_array([38.0, 120.0, 9.0, 0.0, 0.3, 0.3, 0.6]);

    let a = rank(&patient, builtin.diseases()).unwrap();
    let b = rank(&patient, loaded.diseases()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_table_file_with_duplicates_rejected() {
    let json = r#"{
        "version": 1,
        "diseases": [
            {"name": "A", "vector": [38, 100, 5, 0, 0, 0, 0], "explanations": ["a"]},
            {"name": "A", "vector": [39, 200, 9, 1, 0.3, 0.6, 0.9], "explanations": ["b"]}
        ]
    }"#;
    assert!(matches!(
        ReferenceTable::from_json_str(json),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_report_from_diagnosis() {
    let record = PatientRecord::default();
    let diagnosis = Diagnoser::builtin().diagnose(&record).unwrap();
    let report = DiagnosisReport::new(&record, &diagnosis);

    assert_eq!(report.top_diagnosis, diagnosis.top);
    assert_eq!(report.ranking.len(), 9);
    assert_eq!(report.inputs.len(), 7);
    let text = report.render_text();
    assert!(text.contains(&format!("Most likely diagnosis: {}", diagnosis.top)));
}
