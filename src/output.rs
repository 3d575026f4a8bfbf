// output formatting - pretty table or raw json

pub struct Output;

impl Output {
    // nice table format for humans
    pub fn pretty(items: &[String], results: &[bool]) {
        let matched = results.iter().filter(|m| **m).count();
        println!("matched: {matched}/{}\n", results.len());

        let width = items.len().to_string().len().max(1);
        println!("{:>width$} | match | tweet", "#");
        println!("{}-+-------+-{}", "-".repeat(width), "-".repeat(40));

        for (i, (item, hit)) in items.iter().zip(results).enumerate() {
            let verdict = if *hit { "yes" } else { "no" };
            println!("{:>width$} | {verdict:<5} | {}", i + 1, truncate(item, 60));
        }
    }

    // raw json for scripts, same shape as the http api
    pub fn raw(results: &[bool]) {
        let body = serde_json::json!({ "results": results });
        println!("{body}");
    }
}

// single line, capped so long tweets don't wrap the table
fn truncate(text: &str, max: usize) -> String {
    let flat = crate::core::sanitize(text);
    if flat.chars().count() > max {
        let cut: String = flat.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
