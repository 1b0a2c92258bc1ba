use std::sync::LazyLock;

use regex::Regex;

// Optional verb prefix keeps e.g. "improved 25%" from labeling itself with
// its own verb.
static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:by |improved |increased |reduced |enhanced )?(\d+)%")
        .expect("percent pattern should compile")
});

const CONTEXT_BEFORE: usize = 60;
const CONTEXT_AFTER: usize = 40;
const LABEL_WORDS: usize = 3;

/// One percentage scraped from a free-text impact sentence, for decorative
/// metric badges and bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub value: u32,
    pub label: String,
    pub context: String,
}

impl Metric {
    /// Bar width in percent, saturated so >100% claims still fit the track.
    pub fn bar_width(&self) -> u32 {
        self.value.min(100)
    }
}

/// Extracts every percentage from `impact` together with a short label drawn
/// from the words preceding it and a context window around the match.
pub fn extract_metrics(impact: &str) -> Vec<Metric> {
    PERCENT_RE
        .captures_iter(impact)
        .enumerate()
        .filter_map(|(i, caps)| {
            let digits = caps.get(1)?;
            let value = digits.as_str().parse::<u32>().ok()?;
            let number_token = format!("{}%", digits.as_str());

            let start = floor_char_boundary(impact, digits.start().saturating_sub(CONTEXT_BEFORE));
            let end = ceil_char_boundary(
                impact,
                (digits.end() + 1 + CONTEXT_AFTER).min(impact.len()),
            );
            let context = impact[start..end].trim().to_string();

            let words = context.split_whitespace().collect::<Vec<_>>();
            let label = words
                .iter()
                .position(|w| w.contains(&number_token))
                .map(|at| words[at.saturating_sub(LABEL_WORDS)..at].join(" "))
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| format!("Metric {}", i + 1));

            Some(Metric {
                value,
                label,
                context,
            })
        })
        .collect()
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_every_percentage_in_order() {
        let metrics = extract_metrics(
            "Reduced project delivery time by 30%, improved resource utilization by 25%, \
             and increased team satisfaction scores by 40%",
        );
        let values = metrics.iter().map(|m| m.value).collect::<Vec<_>>();
        assert_eq!(values, vec![30, 25, 40]);
    }

    #[test]
    fn labels_come_from_preceding_words() {
        let metrics = extract_metrics("Reduced onboarding time by 40%");
        assert_eq!(metrics.len(), 1);
        assert!(metrics[0].label.contains("time"));
        assert!(metrics[0].context.contains("40%"));
    }

    #[test]
    fn leading_percentage_falls_back_to_generated_label() {
        let metrics = extract_metrics("35% faster releases");
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].label, "Metric 1");
    }

    #[test]
    fn text_without_percentages_yields_nothing() {
        assert!(extract_metrics("Delivered the migration ahead of schedule").is_empty());
    }

    #[test]
    fn bar_width_saturates_at_one_hundred() {
        let metrics = extract_metrics("throughput up 250%");
        assert_eq!(metrics[0].value, 250);
        assert_eq!(metrics[0].bar_width(), 100);
    }

    #[test]
    fn context_slicing_respects_multibyte_text() {
        // non-ASCII padding on both sides of the match must not panic
        let text = "café ☕ workflow — efficiency improved by 50% across the team ✓";
        let metrics = extract_metrics(text);
        assert_eq!(metrics[0].value, 50);
    }
}
