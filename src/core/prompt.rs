// prompt building - rule plus a numbered list of tweets

pub const DEFAULT_RULE: &str =
    "Is this tweet about startups, entrepreneurship, building tech products, or business growth?";

pub const INSTRUCTION: &str = "You are a tweet classifier. The user will provide a rule and a list of tweets. \
For each tweet, return \"YES\" or \"NO\" indicating if it matches the user's rule. \
Respond with a numbered list, with each result on a new line. \
Do not add any other text or explanation.";

/// What gets sent to the model: a fixed instruction and the per-request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub instruction: &'static str,
    pub body: String,
}

impl Prompt {
    pub fn new(items: &[String], rule: &str) -> Self {
        let mut lines = vec![
            "My rule is:".to_string(),
            format!("\"{}\"", sanitize(rule)),
            String::new(),
            "Tweets to classify:".to_string(),
        ];

        for (i, item) in items.iter().enumerate() {
            lines.push(format!("{}. \"{}\"", i + 1, sanitize(item)));
        }

        Self {
            instruction: INSTRUCTION,
            body: lines.join("\n"),
        }
    }

    // single blob for providers without a system role
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.instruction, self.body)
    }
}

// quotes and line breaks would break the numbered list framing
pub fn sanitize(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numbers_items_from_one() {
        let prompt = Prompt::new(&items(&["first", "second"]), "rule");
        let lines: Vec<&str> = prompt.body.lines().collect();

        assert_eq!(lines[0], "My rule is:");
        assert_eq!(lines[1], "\"rule\"");
        assert_eq!(lines[3], "Tweets to classify:");
        assert_eq!(lines[4], "1. \"first\"");
        assert_eq!(lines[5], "2. \"second\"");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn quotes_and_newlines_are_replaced() {
        let prompt = Prompt::new(&items(&["say \"hi\"\nthen\r\nleave\rnow"]), "r");

        assert!(prompt.body.contains("1. \"say 'hi' then leave now\""));
        // one line per item, nothing leaks into the framing
        assert_eq!(prompt.body.lines().count(), 5);
    }

    #[test]
    fn rule_is_sanitized_too() {
        let prompt = Prompt::new(&items(&["x"]), "is it \"good\"\nor bad");
        assert!(prompt.body.contains("\"is it 'good' or bad\""));
    }

    #[test]
    fn text_blob_starts_with_instruction() {
        let prompt = Prompt::new(&items(&["x"]), DEFAULT_RULE);
        let text = prompt.to_text();

        assert!(text.starts_with(INSTRUCTION));
        assert!(text.ends_with("1. \"x\""));
        assert!(text.contains(DEFAULT_RULE));
    }
}
