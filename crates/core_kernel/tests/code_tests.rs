//! Tests for the code enum registry

use core_kernel::{define_code_enum, CodeEnum};

define_code_enum! {
    /// Contact preference used only in these tests
    pub enum ContactPreference {
        Email = 10 => "Email",
        Phone = 20 => "Phone",
        Post = 30 => "Post",
    }
}

#[test]
fn test_every_variant_round_trips_through_its_code() {
    for variant in ContactPreference::variants() {
        assert_eq!(ContactPreference::from_code(variant.code()), Some(*variant));
    }
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<i32> = ContactPreference::variants().iter().map(|v| v.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), ContactPreference::variants().len());
}

#[test]
fn test_unknown_code_is_not_found() {
    for code in [-1, 0, 11, 31, i32::MAX] {
        assert_eq!(ContactPreference::from_code(code), None);
    }
}

#[test]
fn test_display_uses_label() {
    assert_eq!(ContactPreference::Post.to_string(), "Post");
}

#[test]
fn test_variants_are_restartable() {
    let first: Vec<_> = ContactPreference::variants().to_vec();
    let second: Vec<_> = ContactPreference::variants().to_vec();
    assert_eq!(first, second);
}
