//! Property-based tests for the path algebra.
//!
//! Note: the resolve and relative modules carry their own quick property
//! tests. This module runs the cross-module laws with many more cases.

use super::relationship::Relationship;
use super::relative::relative;
use super::resolve::{path, resolve};
use super::scope::Path;
use proptest::prelude::*;

// Strategy for generating a single named component
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn named_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 0..8).prop_map(|parts| parts.join("/"))
}

fn noisy_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            3 => component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just("/".to_string()),
        ],
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(s).to_string()) == resolve(s)
    #[test]
    fn resolution_idempotent(tokens in noisy_tokens_strategy()) {
        if let Ok(once) = resolve(&tokens) {
            let twice = resolve([once.to_string()]).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    // relative(p, p) is always the current marker
    #[test]
    fn relative_to_self_is_current(tokens in noisy_tokens_strategy()) {
        if resolve(&tokens).is_ok() {
            prop_assert_eq!(relative(&tokens, &tokens).unwrap(), ".");
        }
    }

    // Applying relative(from, to) to `from` lands on `to`
    #[test]
    fn relative_round_trip(
        head in component_strategy(),
        a in named_path_strategy(),
        b in named_path_strategy(),
    ) {
        let from = format!("{head}/{a}");
        let to = format!("{head}/{b}");
        let rel = relative([&from], [&to]).unwrap();
        prop_assert_eq!(path([from, rel]).unwrap(), path([to]).unwrap());
    }

    // A failed relative is exactly "nothing shared and not from the root"
    #[test]
    fn no_common_root_iff_unrelated_non_root(a in named_path_strategy(), b in named_path_strategy()) {
        let from = resolve([&a]).unwrap();
        let to = resolve([&b]).unwrap();
        let failed = relative([&a], [&b]).is_err();
        prop_assert_eq!(failed, from.common_prefix_len(&to) == 0 && !from.is_root());
    }

    // Scoping then resolving equals resolving the concatenation
    #[test]
    fn scoped_path_matches_concatenation(base in named_path_strategy(), rest in noisy_tokens_strategy()) {
        let scope = Path::new([&base]).unwrap();
        let mut all = vec![base];
        all.extend(rest.iter().cloned());
        prop_assert_eq!(scope.path(&rest).ok(), path(&all).ok());
    }

    // Anything resolved within a scope without `..` stays within it
    #[test]
    fn within_stays_within(base in named_path_strategy(), child in named_path_strategy()) {
        let scope = Path::new([&base]).unwrap();
        let inner = scope.within([&child]).unwrap();
        prop_assert!(Relationship::is_within(&inner.resolved(), &scope.resolved()));
    }
}
