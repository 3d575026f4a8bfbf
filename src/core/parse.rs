// turns the model's numbered YES/NO list back into booleans

use tracing::warn;

/// Parse a YES/NO response into exactly `expected` booleans.
///
/// Falls back to `vec![fallback; expected]` when the response is empty or
/// the number of YES/NO lines does not match `expected`.
pub fn parse_results(text: Option<&str>, expected: usize, fallback: bool) -> Vec<bool> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            warn!(expected, "empty response from model, using fallback");
            return vec![fallback; expected];
        }
    };

    let results: Vec<bool> = text.lines().filter_map(parse_line).collect();

    if results.len() != expected {
        warn!(
            expected,
            got = results.len(),
            response = text,
            "result count mismatch, using fallback"
        );
        return vec![fallback; expected];
    }

    results
}

fn parse_line(line: &str) -> Option<bool> {
    let line = strip_numbering(line.trim()).to_uppercase();

    line.split(|c: char| !c.is_alphanumeric())
        .find_map(|word| match word {
            "YES" => Some(true),
            "NO" => Some(false),
            _ => None,
        })
}

// "12. YES" / "3) NO" -> "YES" / "NO"
fn strip_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix(['.', ')']) {
        Some(r) => r.trim_start(),
        None => line,
    }
}
