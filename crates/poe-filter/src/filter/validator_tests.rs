//! Tests for the filter validator.

use super::*;

fn messages(report: &ValidationReport) -> Vec<(usize, Severity, &str)> {
    report
        .errors
        .iter()
        .map(|e| (e.line, e.severity, e.message.as_str()))
        .collect()
}

// ==================== Structure Tests ====================

#[test]
fn test_valid_filter() {
    let report = validate_filter(
        "# Currency\nShow\n    BaseType \"Chaos Orb\"\n    SetTextColor 255 0 0\n\nHide\n    Rarity = Normal\n",
    );
    assert!(report.is_valid);
    assert!(report.is_valid_strict());
    assert!(report.errors.is_empty());
}

#[test]
fn test_empty_filter_is_valid() {
    assert!(validate_filter("").is_valid_strict());
    assert!(validate_filter("\n# nothing here\n\n").is_valid_strict());
}

#[test]
fn test_lone_show_has_no_conditions() {
    let report = validate_filter("Show\n");
    assert!(!report.is_valid);
    assert_eq!(
        messages(&report),
        vec![(1, Severity::Error, "Final block has no conditions")]
    );
}

#[test]
fn test_previous_block_without_conditions() {
    let report = validate_filter("Show\n    SetFontSize 40\nHide\n    Rarity Normal\n");
    assert_eq!(
        messages(&report),
        vec![(2, Severity::Error, "Previous block has no conditions")]
    );
}

#[test]
fn test_final_block_reported_on_last_line() {
    let report = validate_filter("Show\n    Rarity Unique\nHide\n    SetFontSize 18\n\n# end\n");
    assert_eq!(
        messages(&report),
        vec![(6, Severity::Error, "Final block has no conditions")]
    );
}

#[test]
fn test_line_outside_block() {
    let report = validate_filter("BaseType \"Chaos Orb\"\nShow\n    Rarity Unique\n");
    assert_eq!(
        messages(&report),
        vec![(1, Severity::Error, "Line must be inside Show/Hide block")]
    );
}

#[test]
fn test_outside_line_is_also_checked() {
    let report = validate_filter("SetFontSize 99\nShow\n    Rarity Unique\n");
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.iter().all(|e| e.line == 1));
}

#[test]
fn test_malformed_numeric_condition_still_counts_as_condition() {
    let report = validate_filter("Show\n    AreaLevel 68\n");
    assert_eq!(
        messages(&report),
        vec![(2, Severity::Error, "AreaLevel requires an operator and a value")]
    );
}

#[test]
fn test_show_with_trailing_comment_is_not_a_block_start() {
    let report = validate_filter("Show # currency\n    Class Currency\n");
    let found = messages(&report);
    assert!(found.contains(&(1, Severity::Error, "Line must be inside Show/Hide block")));
    assert!(found.iter().any(|(line, severity, _)| *line == 1 && *severity == Severity::Warning));
    assert!(found.contains(&(2, Severity::Error, "Line must be inside Show/Hide block")));
}

// ==================== Numeric Condition Tests ====================

#[test]
fn test_numeric_condition_errors() {
    let cases = [
        ("ItemLevel", "ItemLevel requires an operator and a value"),
        ("ItemLevel >=", "ItemLevel requires an operator and a value"),
        ("ItemLevel ~ 5", "Invalid operator '~' for ItemLevel"),
        ("ItemLevel >= five", "ItemLevel value must be a number, got 'five'"),
        ("ItemLevel >= -5", "ItemLevel value must not be negative"),
        ("ItemLevel >= 5 6", "ItemLevel takes a single value"),
    ];

    for (line, expected) in cases {
        let report = validate_filter(&format!("Show\n    {line}\n"));
        assert_eq!(
            messages(&report),
            vec![(2, Severity::Error, expected)],
            "{line}"
        );
    }
}

#[test]
fn test_numeric_condition_valid() {
    for keyword in [
        "AreaLevel",
        "ItemLevel",
        "DropLevel",
        "StackSize",
        "Quality",
        "Sockets",
        "WaystoneTier",
    ] {
        let report = validate_filter(&format!("Show\n    {keyword} >= 0\n"));
        assert!(report.is_valid_strict(), "{keyword}");
    }
}

// ==================== Style Directive Tests ====================

#[test]
fn test_bad_font_size() {
    let report = validate_filter("Show\n    Rarity Unique\n    SetFontSize 10\n");
    assert!(!report.is_valid);
    assert_eq!(
        messages(&report),
        vec![(3, Severity::Error, "Font size must be between 18 and 45")]
    );
}

#[test]
fn test_font_size_bounds() {
    for (size, ok) in [("18", true), ("45", true), ("17", false), ("46", false), ("x", false), ("", false)] {
        let report = validate_filter(&format!("Show\n    Rarity Unique\n    SetFontSize {size}\n"));
        assert_eq!(report.is_valid, ok, "SetFontSize {size}");
    }
}

#[test]
fn test_color_value_range() {
    let report = validate_filter("Show\n    Rarity Unique\n    SetTextColor 300 0 -1\n");
    assert_eq!(
        messages(&report),
        vec![
            (3, Severity::Error, "Invalid color value '300' in SetTextColor (must be 0-255)"),
            (3, Severity::Error, "Invalid color value '-1' in SetTextColor (must be 0-255)"),
        ]
    );
}

#[test]
fn test_color_value_count() {
    let report = validate_filter("Show\n    Rarity Unique\n    SetBorderColor 1 2\n");
    assert_eq!(
        messages(&report),
        vec![(3, Severity::Error, "SetBorderColor requires 3 or 4 values (R G B [A])")]
    );

    let report = validate_filter("Show\n    Rarity Unique\n    SetBackgroundColor 1 2 3 4 999\n");
    assert_eq!(report.error_count(), 2);
}

#[test]
fn test_color_with_alpha_is_valid() {
    let report = validate_filter("Show\n    Rarity Unique\n    SetBackgroundColor 0 0 0 200\n");
    assert!(report.is_valid_strict());
}

#[test]
fn test_play_effect() {
    let report = validate_filter("Show\n    Rarity Unique\n    PlayEffect Orange Temp\n");
    assert!(report.is_valid_strict());

    let report = validate_filter("Show\n    Rarity Unique\n    PlayEffect\n");
    assert_eq!(
        messages(&report),
        vec![(3, Severity::Error, "PlayEffect requires a color")]
    );
}

#[test]
fn test_play_effect_name_is_case_sensitive_with_suggestion() {
    let report = validate_filter("Show\n    Rarity Unique\n    PlayEffect yellow\n");
    assert_eq!(
        messages(&report),
        vec![(
            3,
            Severity::Error,
            "Invalid effect color 'yellow' (did you mean 'Yellow'?)"
        )]
    );

    let report = validate_filter("Show\n    Rarity Unique\n    PlayEffect Zzz\n");
    assert_eq!(
        messages(&report),
        vec![(3, Severity::Error, "Invalid effect color 'Zzz'")]
    );
}

#[test]
fn test_unmodelled_directives_are_accepted() {
    let report = validate_filter(
        "Show\n    Rarity Unique\n    PlayAlertSound 1 300\n    MinimapIcon 0 Red Star\n    DisableDropSound\n",
    );
    assert!(report.is_valid_strict());
}

// ==================== Warning / Validity Tests ====================

#[test]
fn test_unquoted_multi_word_warning() {
    let report = validate_filter("Show\n    BaseType Chaos Orb\n");
    assert_eq!(
        messages(&report),
        vec![(2, Severity::Warning, "Multiple values should be in quotes (BaseType)")]
    );
}

#[test]
fn test_any_quote_character_suppresses_multi_value_warning() {
    let report = validate_filter("Show\n    BaseType Chaos \"Orb\n");
    assert!(report.is_valid_strict());
}

#[test]
fn test_no_warning_for_quoted_or_single_values() {
    for line in [
        "BaseType \"Chaos Orb\" \"Exalted Orb\"",
        "Class Currency",
        "Class == Currency",
        "Class == \"Stackable Currency\"",
    ] {
        let report = validate_filter(&format!("Show\n    {line}\n"));
        assert!(report.is_valid_strict(), "{line}");
    }
}

#[test]
fn test_warnings_alone_keep_filter_valid() {
    let report = validate_filter("Show\n    Class Body Armours\n");
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.error_count(), 0);
    assert!(report.is_valid);
    assert!(report.is_valid());
}

#[test]
fn test_strict_validity_fails_on_warnings() {
    let report = validate_filter("Show\n    Class Body Armours\n");
    assert!(!report.is_valid_strict());
}

#[test]
fn test_errors_fail_both_validity_modes() {
    let report = validate_filter("Show\n    Class Body Armours\n    SetFontSize 2\n");
    assert!(!report.is_valid);
    assert!(!report.is_valid_strict());
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn test_catch_all_is_valid_for_evaluator_but_not_validator() {
    let filter = "Show\n    Rarity Unique\nHide\n";
    assert!(!validate_filter(filter).is_valid);
    assert!(get_item_style(filter, &FilterContext::new("Scroll of Wisdom")).is_hidden);
}

#[test]
fn test_report_serializes() {
    let report = validate_filter("Show\n");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errors"][0]["line"], 1);
    assert_eq!(json["errors"][0]["severity"], "error");
    assert_eq!(json["errors"][0]["message"], "Final block has no conditions");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = ValidationError::warning(7, "Multiple values should be in quotes (Class)");
    assert_eq!(
        diagnostic.to_string(),
        "line 7: warning: Multiple values should be in quotes (Class)"
    );
}
