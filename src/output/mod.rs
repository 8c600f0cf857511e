pub mod formatter;

pub use formatter::{
    format_breakdown, format_breakdown_tsv, format_criteria, format_criteria_tsv, format_points,
    format_score, format_search_outcome, should_use_colors,
};
