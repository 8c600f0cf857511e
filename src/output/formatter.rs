use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{
    AdditiveRubric, CriteriaScore, CriteriaSelection, Criterion, ScoreBreakdown,
};
use crate::search::SearchOutcome;

/// Width of the label column in breakdown and criteria tables
const LABEL_WIDTH: usize = 18;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format points with at most one decimal ("8.5", "10", "0")
pub fn format_points(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Format a score in compact notation (1.5k, 2.3M, 847)
pub fn format_score(score: f64) -> String {
    let formatted = if score >= 1_000_000.0 {
        format!("{:.1}M", score / 1_000_000.0)
    } else if score >= 1_000.0 {
        format!("{:.1}k", score / 1_000.0)
    } else {
        return format_points(score);
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Breakdown table: one row per sub-score with its cap, then the total.
pub fn format_breakdown(
    breakdown: &ScoreBreakdown,
    rubric: &AdditiveRubric,
    use_colors: bool,
) -> String {
    let caps = [
        rubric.experience_cap,
        rubric.skills_cap,
        rubric.locum_jobs_cap,
        rubric.platform_activity_cap,
        rubric.volunteering_bonus,
        rubric.location_cap(),
        rubric.employer_match_max,
    ];

    let mut lines: Vec<String> = breakdown
        .components()
        .iter()
        .zip(caps)
        .map(|((label, value), cap)| {
            let value_str = format!("{:>6}", format_points(*value));
            let cap_str = format!("/ {}", format_points(cap));
            if use_colors {
                let value_str = if *value >= cap && cap > 0.0 {
                    value_str.green().to_string()
                } else {
                    value_str
                };
                format!(
                    "{:<width$}{} {}",
                    label,
                    value_str,
                    cap_str.dimmed(),
                    width = LABEL_WIDTH
                )
            } else {
                format!("{:<width$}{} {}", label, value_str, cap_str, width = LABEL_WIDTH)
            }
        })
        .collect();

    let total_str = format!("{:>6}", format_score(breakdown.total));
    let max_str = format!("/ {}", format_points(rubric.nominal_max()));
    lines.push(if use_colors {
        format!(
            "{:<width$}{} {}",
            "Total".bold(),
            total_str.bold(),
            max_str.dimmed(),
            width = LABEL_WIDTH
        )
    } else {
        format!("{:<width$}{} {}", "Total", total_str, max_str, width = LABEL_WIDTH)
    });

    lines.join("\n")
}

/// Breakdown as tab-separated "key<TAB>value" rows for scripting
pub fn format_breakdown_tsv(breakdown: &ScoreBreakdown) -> String {
    let keys = [
        "experience",
        "skills",
        "locum_jobs",
        "platform_activity",
        "volunteering",
        "location",
        "employer_match",
    ];
    keys.iter()
        .zip(breakdown.components())
        .map(|(key, (_, value))| format!("{}\t{}", key, value))
        .chain(std::iter::once(format!("total\t{}", breakdown.total)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Slider table followed by the product and its display form
pub fn format_criteria(
    selection: &CriteriaSelection,
    score: &CriteriaScore,
    use_colors: bool,
) -> String {
    let mut lines: Vec<String> = Criterion::ALL
        .iter()
        .map(|criterion| {
            let (low, high) = criterion.range();
            let value = selection.get(*criterion);
            let range_str = format!("({}-{})", low, high);
            if use_colors {
                format!(
                    "{:<width$}{:>3} {}",
                    criterion.label(),
                    value.bold(),
                    range_str.dimmed(),
                    width = LABEL_WIDTH
                )
            } else {
                format!(
                    "{:<width$}{:>3} {}",
                    criterion.label(),
                    value,
                    range_str,
                    width = LABEL_WIDTH
                )
            }
        })
        .collect();

    let display = score.display();
    lines.push(if use_colors {
        format!(
            "{:<width$}{}",
            "Criteria Score".bold(),
            display.cyan(),
            width = LABEL_WIDTH
        )
    } else {
        format!("{:<width$}{}", "Criteria Score", display, width = LABEL_WIDTH)
    });

    lines.join("\n")
}

/// Criteria as tab-separated rows; the last rows carry the raw and capped product
pub fn format_criteria_tsv(selection: &CriteriaSelection, score: &CriteriaScore) -> String {
    Criterion::ALL
        .iter()
        .map(|criterion| format!("{}\t{}", criterion.key(), selection.get(*criterion)))
        .chain([
            format!("raw\t{}", score.raw),
            format!("capped\t{}", score.capped),
        ])
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_search_outcome(outcome: &SearchOutcome, use_colors: bool) -> String {
    let noun = if outcome.matches == 1 {
        "candidate"
    } else {
        "candidates"
    };
    let count = outcome.matches.to_string();
    if use_colors {
        format!(
            "Found {} matching {} (criteria score: {})",
            count.bold(),
            noun,
            outcome.criteria.display().cyan()
        )
    } else {
        format!(
            "Found {} matching {} (criteria score: {})",
            count,
            noun,
            outcome.criteria.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::criteria_score;

    fn sample_breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            experience: 8.0,
            skills: 8.5,
            locum_jobs: 8.0,
            platform_activity: 10.0,
            volunteering: 10.0,
            location: 5.0,
            employer_match: 85.0,
            total: 134.5,
        }
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(8.0), "8");
        assert_eq!(format_points(8.5), "8.5");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(134.5), "134.5");
    }

    #[test]
    fn test_format_score_small() {
        assert_eq!(format_score(134.5), "134.5");
        assert_eq!(format_score(500.0), "500");
    }

    #[test]
    fn test_format_score_thousand_exact() {
        assert_eq!(format_score(1000.0), "1k");
    }

    #[test]
    fn test_format_score_thousand_decimal() {
        assert_eq!(format_score(1500.0), "1.5k");
    }

    #[test]
    fn test_format_score_million() {
        assert_eq!(format_score(1_000_000.0), "1M");
        assert_eq!(format_score(2_300_000.0), "2.3M");
    }

    #[test]
    fn test_format_breakdown_plain() {
        let result = format_breakdown(&sample_breakdown(), &AdditiveRubric::default(), false);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Experience"));
        assert!(lines[0].contains("8 / 10"));
        assert!(lines[1].contains("8.5 / 15"));
        assert!(lines[6].contains("85 / 110"));
        assert!(lines[7].starts_with("Total"));
        assert!(lines[7].contains("134.5 / 170"));
    }

    #[test]
    fn test_format_breakdown_compact_total() {
        let rubric = AdditiveRubric {
            employer_match_max: 5_000.0,
            ..AdditiveRubric::default()
        };
        let breakdown = ScoreBreakdown {
            employer_match: 1_450.5,
            total: 1_500.0,
            ..sample_breakdown()
        };

        let result = format_breakdown(&breakdown, &rubric, false);
        let lines: Vec<&str> = result.lines().collect();

        assert!(lines[6].contains("1450.5 / 5000"));
        assert!(lines[7].starts_with("Total"));
        assert!(lines[7].contains("1.5k / 5060"));
    }

    #[test]
    fn test_format_breakdown_tsv() {
        let result = format_breakdown_tsv(&sample_breakdown());
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "experience\t8");
        assert_eq!(lines[1], "skills\t8.5");
        assert_eq!(lines[7], "total\t134.5");
    }

    #[test]
    fn test_format_criteria_plain() {
        let selection = CriteriaSelection::uniform(10);
        let score = criteria_score(&selection);
        let result = format_criteria(&selection, &score, false);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Experience"));
        assert!(lines[0].contains("10 (1-10)"));
        assert!(lines[7].contains("(0-10)"));
        assert!(lines[9].contains("Maximum (1,000,000,000)"));
    }

    #[test]
    fn test_format_criteria_tsv() {
        let selection = CriteriaSelection::default();
        let result = format_criteria_tsv(&selection, &criteria_score(&selection));
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "experience\t5");
        assert_eq!(lines[9], "raw\t1953125");
        assert_eq!(lines[10], "capped\t1953125");
    }

    #[test]
    fn test_format_search_outcome() {
        let outcome = SearchOutcome {
            matches: 1,
            criteria: criteria_score(&CriteriaSelection::uniform(1)),
        };
        assert_eq!(
            format_search_outcome(&outcome, false),
            "Found 1 matching candidate (criteria score: 1)"
        );
    }
}
