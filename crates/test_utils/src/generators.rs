//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim data and invocations.

use domain_claims::{Claim, Function};
use proptest::prelude::*;

/// Strategy for free-text field values, including quotes and unicode
pub fn field_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 .-]{0,16}",
        Just(String::new()),
        Just("87.5".to_string()),
        Just("\"quoted\"".to_string()),
        Just("ümlaut € ✓".to_string()),
        Just("back\\slash\nnewline".to_string()),
    ]
}

/// Strategy for claim keys
pub fn claim_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| format!("CLAIM{}", n)),
        "[A-Za-z][A-Za-z0-9_-]{0,12}",
    ]
}

/// Strategy for complete claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    proptest::collection::vec(field_value_strategy(), 7).prop_map(|fields| {
        // seven generated fields always form a claim
        Claim::from_fields(&fields).unwrap_or_else(|e| panic!("{}", e))
    })
}

/// Strategy for function names the contract does not expose
pub fn unknown_function_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,20}".prop_filter("must not name a contract function", |name| {
        name.parse::<Function>().is_err()
    })
}

/// Strategy for argument lists whose length differs from `expected`
pub fn wrong_arity_args_strategy(expected: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z0-9]{0,8}", 0..12)
        .prop_filter("length must differ from the expected arity", move |args| {
            args.len() != expected
        })
}
