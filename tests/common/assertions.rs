use aoa_post::CoefficientRecord;
use std::fs;
use std::path::Path;

/// Assert that no coefficient is NaN or infinite
#[track_caller]
pub fn assert_coefficients_finite(record: &CoefficientRecord) {
    let c = &record.coefficients;
    assert!(c.c_d.is_finite(), "Cd is not finite");
    assert!(c.c_l.is_finite(), "Cl is not finite");
    assert!(
        c.c_m.iter().all(|v| v.is_finite()),
        "Moment coefficients contain non-finite values"
    );
}

/// Assert every face carries the same value
#[track_caller]
pub fn assert_uniform_profile(faces: &[f64], expected: f64, epsilon: f64) {
    for (i, value) in faces.iter().enumerate() {
        assert!(
            (value - expected).abs() <= epsilon,
            "Face {} has {}, expected {}",
            i,
            value,
            expected
        );
    }
}

/// Assert the log holds exactly one header followed by `rows` data rows
#[track_caller]
pub fn assert_results_log(path: &Path, rows: usize) -> Vec<String> {
    let text = fs::read_to_string(path).expect("results log should exist");
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    assert_eq!(lines.len(), rows + 1, "bad line count: {:?}", lines);
    assert_eq!(lines[0], CoefficientRecord::header());
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.as_str() == CoefficientRecord::header())
            .count(),
        1,
        "header written more than once"
    );
    for line in &lines[1..] {
        assert_eq!(line.split('\t').count(), 14, "bad row: {}", line);
    }
    lines
}
