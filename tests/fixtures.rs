//! Fixture-driven conformance tests.
//!
//! Reads every `tests/fixtures/*.yaml` file, in the shared fixture format
//! (`test_cases[].category`, `cases[]` with free-form inputs plus
//! `expected_distance`, `expected_score`, `expected_range`, `expected`), and
//! checks each case against the public API. All failures are collected and
//! reported together.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use stringmetrics::{
    RawSuggestOptions, damerau_levenshtein, jaro_winkler, levenshtein, normalize_with,
    normalized_damerau_levenshtein, normalized_levenshtein, normalized_osa_similarity,
    osa_distance, substring_similarity, suggest_with,
};

const TOLERANCE: f64 = 1e-10;

// ---------------------------------------------------------------------------
// Fixture format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(rename = "$schema")]
    #[allow(dead_code)]
    schema: String,
    version: String,
    #[serde(default)]
    #[allow(dead_code)]
    notes: Option<String>,
    test_cases: Vec<CategoryGroup>,
}

#[derive(Debug, Deserialize)]
struct CategoryGroup {
    category: String,
    cases: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    #[serde(flatten)]
    inputs: HashMap<String, Value>,
    expected_distance: Option<usize>,
    expected_score: Option<f64>,
    expected_range: Option<ExpectedRange>,
    expected: Option<Value>,
    description: String,
    #[serde(default)]
    #[allow(dead_code)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ExpectedRange {
    start: usize,
    end: usize,
}

impl TestCase {
    fn text(&self, key: &str) -> &str {
        self.inputs.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn opt_text(&self, key: &str) -> Option<&str> {
        self.inputs.get(key).and_then(Value::as_str)
    }

    fn pair(&self) -> (&str, &str) {
        (self.text("input_a"), self.text("input_b"))
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

fn check_pair(
    case: &TestCase,
    distance: fn(&str, &str) -> usize,
    score: fn(&str, &str) -> f64,
) -> Result<(), String> {
    let (a, b) = case.pair();
    let actual_distance = distance(a, b);
    let actual_score = score(a, b);

    if case.expected_distance.is_some_and(|d| d != actual_distance) {
        return Err(format!(
            "distance: expected {:?}, got {actual_distance}",
            case.expected_distance
        ));
    }
    check_score(case.expected_score, actual_score)
}

fn check_score(expected: Option<f64>, actual: f64) -> Result<(), String> {
    match expected {
        Some(e) if (e - actual).abs() >= TOLERANCE => {
            Err(format!("score: expected {e}, got {actual}"))
        }
        _ => Ok(()),
    }
}

fn check_substring(case: &TestCase) -> Result<(), String> {
    let m = substring_similarity(case.text("query"), case.text("candidate"));
    check_score(case.expected_score, m.score)?;
    if let Some(range) = &case.expected_range {
        if m.candidate_range != (range.start..range.end) {
            return Err(format!(
                "range: expected {}..{}, got {:?}",
                range.start, range.end, m.candidate_range
            ));
        }
    }
    Ok(())
}

fn check_normalization(case: &TestCase) -> Result<(), String> {
    let actual = normalize_with(case.text("input"), case.text("preset"), case.opt_text("locale"))
        .map_err(|e| e.to_string())?;
    let expected = case.expected.as_ref().and_then(Value::as_str);
    if expected != Some(actual.as_str()) {
        return Err(format!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}

fn check_suggestions(case: &TestCase) -> Result<(), String> {
    let candidates: Vec<String> = case
        .inputs
        .get("candidates")
        .cloned()
        .map(serde_yaml::from_value::<Vec<String>>)
        .transpose()
        .map_err(|e| e.to_string())?
        .unwrap_or_default();
    let options: RawSuggestOptions = case
        .inputs
        .get("options")
        .cloned()
        .map(serde_yaml::from_value::<RawSuggestOptions>)
        .transpose()
        .map_err(|e| e.to_string())?
        .unwrap_or_default();
    let expected: Vec<String> = case
        .expected
        .clone()
        .map(serde_yaml::from_value::<Vec<String>>)
        .transpose()
        .map_err(|e| e.to_string())?
        .unwrap_or_default();

    let actual: Vec<String> = suggest_with(case.text("query"), &candidates, &options)
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|s| s.value)
        .collect();
    if actual != expected {
        return Err(format!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}

fn run_case(category: &str, case: &TestCase) -> Result<(), String> {
    match category {
        "levenshtein" => check_pair(case, levenshtein, normalized_levenshtein),
        "damerau_osa" => check_pair(case, osa_distance, normalized_osa_similarity),
        "damerau_unrestricted" => {
            check_pair(case, damerau_levenshtein, normalized_damerau_levenshtein)
        }
        "jaro_winkler" => {
            let (a, b) = case.pair();
            check_score(case.expected_score, jaro_winkler(a, b))
        }
        "substring" => check_substring(case),
        "normalization_presets" => check_normalization(case),
        "suggestions" => check_suggestions(case),
        other => Err(format!("unknown category: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

fn load_fixtures() -> Vec<(String, Fixture)> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .expect("fixture directory")
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path).expect("readable fixture");
            let fixture: Fixture = serde_yaml::from_str(&text)
                .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
            (path.display().to_string(), fixture)
        })
        .collect()
}

#[test]
fn fixtures_are_present() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());
    for (file, fixture) in &fixtures {
        assert!(!fixture.version.is_empty(), "{file}: missing version");
        assert!(!fixture.test_cases.is_empty(), "{file}: no test cases");
    }
}

#[test]
fn all_fixture_cases_pass() {
    let mut failures = Vec::new();
    let mut total = 0usize;

    for (file, fixture) in load_fixtures() {
        for group in &fixture.test_cases {
            for case in &group.cases {
                total += 1;
                if let Err(msg) = run_case(&group.category, case) {
                    failures.push(format!(
                        "{file} [{}] {}: {msg}",
                        group.category, case.description
                    ));
                }
            }
        }
    }

    assert!(total > 0);
    assert!(
        failures.is_empty(),
        "{} of {total} fixture cases failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
