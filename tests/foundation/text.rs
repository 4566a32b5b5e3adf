//! Integration tests for the color-code translator

use itemloom_foundation::{FORMAT_MARKER, translate_color_codes};

// =============================================================================
// Simple codes
// =============================================================================

#[test]
fn recognized_codes_become_markers() {
    assert_eq!(translate_color_codes("&6gold"), "\u{a7}6gold");
    assert_eq!(translate_color_codes("&lBold&r"), "\u{a7}lBold\u{a7}r");
}

#[test]
fn code_letters_are_lowercased() {
    assert_eq!(translate_color_codes("&A"), "\u{a7}a");
}

#[test]
fn unrecognized_codes_pass_through() {
    assert_eq!(translate_color_codes("&zplain"), "&zplain");
    assert_eq!(translate_color_codes("fish & chips"), "fish & chips");
}

#[test]
fn trailing_ampersand_is_literal() {
    assert_eq!(translate_color_codes("end&"), "end&");
}

// =============================================================================
// Hex runs
// =============================================================================

#[test]
fn hex_runs_expand_per_nibble() {
    let out = translate_color_codes("&#1a2B3cX");
    let m = FORMAT_MARKER;
    assert_eq!(out, format!("{m}x{m}1{m}a{m}2{m}B{m}3{m}cX"));
}

#[test]
fn short_hex_windows_pass_through() {
    assert_eq!(translate_color_codes("&#1a2"), "&#1a2");
}

#[test]
fn non_hex_in_window_passes_through_literally() {
    assert_eq!(translate_color_codes("&#12g456text"), "&#12g456text");
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn translation_is_deterministic() {
    let input = "&6Sunrise &#ffaa00over &lthe &#00aaffsea&";
    assert_eq!(translate_color_codes(input), translate_color_codes(input));
}
