//! Runtime diagnostics for builtin calls.

pub enum DiagnosticKind {
    UnknownBuiltin(String),
    DidYouMean(String),
    ArgumentCountMismatch {
        name: String,
        expected_min: usize,
        expected_max: usize,
        actual: usize,
    },
    TypeMismatch {
        expected: String,
        actual: String,
    },
    TypeMismatchDetailed {
        name: String,
        param: String,
        expected: String,
        actual: String,
    },
    FormatFailed(String),
    InvalidConfig {
        key: String,
        value: String,
    },
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnknownBuiltin(name) => format!("Unknown builtin: {}", name),
            DiagnosticKind::DidYouMean(s) => format!("Did you mean '{}'?", s),
            DiagnosticKind::ArgumentCountMismatch {
                name,
                expected_min,
                expected_max,
                actual,
            } => {
                if expected_min == expected_max {
                    format!(
                        "{}: argument count mismatch: expected {} but got {}",
                        name, expected_min, actual
                    )
                } else {
                    format!(
                        "{}: argument count mismatch: expected {}..{} but got {}",
                        name, expected_min, expected_max, actual
                    )
                }
            }
            DiagnosticKind::TypeMismatch { expected, actual } => {
                format!("Type mismatch: expected {} but got {}", expected, actual)
            }
            DiagnosticKind::TypeMismatchDetailed {
                name,
                param,
                expected,
                actual,
            } => format!(
                "{}: parameter '{}' expects {} but got {}",
                name, param, expected, actual
            ),
            DiagnosticKind::FormatFailed(msg) => format!("Format failed: {}", msg),
            DiagnosticKind::InvalidConfig { key, value } => {
                format!("Ignoring invalid {}={:?}", key, value)
            }
        }
    }
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Closest candidate within half the name's length.
pub fn find_best_match<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut best_match = None;
    let mut min_distance = (name.len() / 2).max(1);
    for candidate in candidates {
        let distance = levenshtein_distance(name, candidate);
        if distance < min_distance || (distance == min_distance && best_match.is_none()) {
            min_distance = distance;
            best_match = Some(candidate);
        }
    }
    best_match
}
