use crate::api::validation::{limit_length, require_id, require_text};

use googletest::prelude::*;

#[test]
fn given_padded_text_when_required_then_trimmed() {
    let result = require_text("city", Some("  Cape Town "), 50);

    assert_eq!(result.unwrap(), "Cape Town");
}

#[test]
fn given_missing_or_blank_text_when_required_then_error() {
    assert_that!(require_text("city", None, 50), err(anything()));
    assert_that!(require_text("city", Some(""), 50), err(anything()));
    assert_that!(require_text("city", Some(" \t "), 50), err(anything()));
}

#[test]
fn given_multibyte_text_when_limited_then_counts_characters() {
    // 6 characters, 7 bytes
    assert_that!(limit_length("city", "Tromsø", 6), ok(anything()));
    assert_that!(limit_length("city", "Tromsø", 5), err(anything()));
}

#[test]
fn given_padded_id_when_required_then_accepted_as_is() {
    assert_that!(require_id("userId", " u1 ", 10), ok(anything()));
}

#[test]
fn given_blank_id_when_required_then_error() {
    assert_that!(require_id("userId", "", 10), err(anything()));
    assert_that!(require_id("userId", "   ", 10), err(anything()));
}

#[test]
fn given_id_with_padding_over_limit_when_required_then_error() {
    // Padding counts toward the limit since it is part of the id
    assert_that!(require_id("userId", " abc ", 4), err(anything()));
}
