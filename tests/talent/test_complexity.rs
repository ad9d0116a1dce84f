//! Tests for complexity report interpretation.

use kodegen_tools_talent::talent::metrics::{
    NEUTRAL_COMPLEXITY_SCORE, complexity_to_score, parse_average_complexity,
    summarize_complexity_report,
};

const LIZARD_TABLE: &str = "\
================================================
  NLOC    CCN   token  PARAM  length  location
------------------------------------------------
       3      1     10      0       3 main@1-3@src/app.py
1 file analyzed.
==============================================================
NLOC    Avg.NLOC  AvgCCN  Avg.token  function_cnt    file
--------------------------------------------------------------
      3       3.0     1.0       10.0         1     src/app.py

===========================================================================================================
No thresholds exceeded (cyclomatic_complexity > 15 or length > 1000 or nloc > 1000000 or parameter_count > 100)
==========================================================================================
Total nloc   Avg.NLOC  AvgCCN  Avg.token   Fun Cnt  Warning cnt   Fun Rt   nloc Rt
------------------------------------------------------------------------------------------
         3       3.0     2.5       10.0        1            0      0.00    0.00
";

#[test]
fn test_inline_average() {
    assert_eq!(parse_average_complexity("AvgCCN: 3.2"), Some(3.2));
    assert_eq!(summarize_complexity_report("AvgCCN: 1.0"), 100.0);
    assert_eq!(summarize_complexity_report("AvgCCN: 9"), 0.0);
}

const TWO_FILE_TABLE: &str = "\
==============================================================
NLOC    Avg.NLOC  AvgCCN  Avg.token  function_cnt    file
--------------------------------------------------------------
      4       4.0     1.0       12.0         1     pkg/simple.py
     40      40.0     9.0      200.0         1     pkg/tangled.py

==========================================================================================
Total nloc   Avg.NLOC  AvgCCN  Avg.token   Fun Cnt  Warning cnt   Fun Rt   nloc Rt
------------------------------------------------------------------------------------------
        44      22.0     5.0      106.0        2            0      0.00    0.00
";

#[test]
fn test_tabular_report_prefers_summary_row() {
    assert_eq!(parse_average_complexity(LIZARD_TABLE), Some(2.5));
    assert_eq!(summarize_complexity_report(LIZARD_TABLE), 81.25);
}

#[test]
fn test_folder_figure_covers_every_file() {
    assert_eq!(parse_average_complexity(TWO_FILE_TABLE), Some(5.0));
    assert_eq!(summarize_complexity_report(TWO_FILE_TABLE), 50.0);
}

#[test]
fn test_per_file_table_without_summary() {
    let per_file_only = LIZARD_TABLE
        .lines()
        .take_while(|l| !l.starts_with("No thresholds"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(!per_file_only.contains("Total nloc"));
    assert_eq!(parse_average_complexity(&per_file_only), Some(1.0));
}

#[test]
fn test_missing_figure_is_neutral() {
    assert_eq!(summarize_complexity_report(""), NEUTRAL_COMPLEXITY_SCORE);
    assert_eq!(summarize_complexity_report("lizard: command not found"), 50.0);
    assert_eq!(summarize_complexity_report("AvgCCN: ."), 50.0);
    assert_eq!(summarize_complexity_report("AvgCCN: -3"), 50.0);
}

#[test]
fn test_score_is_monotonic_and_bounded() {
    let mut previous = f64::INFINITY;
    for step in 0..40 {
        let average = f64::from(step) * 0.5;
        let score = complexity_to_score(average);
        assert!((0.0..=100.0).contains(&score));
        assert!(score <= previous);
        previous = score;
    }
    assert_eq!(complexity_to_score(1.0), 100.0);
    assert_eq!(complexity_to_score(0.0), 100.0);
}
