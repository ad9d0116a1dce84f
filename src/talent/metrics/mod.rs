//! Per-file metric scorers
//!
//! Every scorer is a pure function of the file content. Content that is not
//! valid UTF-8 yields `FileScoreError::Decode` rather than a zero score.

mod code;
mod complexity;
mod markup;
mod readme;
mod stylesheet;

pub use code::{CODE_EXTENSIONS, score_code_file};
pub use complexity::{
    NEUTRAL_COMPLEXITY_SCORE, complexity_to_score, parse_average_complexity,
    summarize_complexity_report,
};
pub use markup::score_markup_file;
pub use readme::readme_quality;
pub use stylesheet::score_stylesheet_file;
