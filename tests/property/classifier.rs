//! Property-based tests for the invocation classifier

use aech_cli_translator::classify::{classify, should_emit_manifest, Invocation, MANIFEST_FLAGS};
use proptest::prelude::*;

/// Any argv whose length is not exactly one is delegated
#[test]
fn test_non_singleton_argv_delegates() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let argv = prop_oneof![
        Just(Vec::new()),
        proptest::collection::vec(
            prop_oneof![Just("--help".to_string()), Just("-h".to_string()), any::<String>()],
            2..6
        ),
    ];

    runner
        .run(&argv, |args| {
            prop_assert!(!should_emit_manifest(&args));
            prop_assert_eq!(classify(&args), Invocation::Delegate);
            Ok(())
        })
        .unwrap();
}

/// A single token emits the manifest iff it is one of the two help flags
#[test]
fn test_single_token_matches_only_help_flags() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |token| {
            let expected = MANIFEST_FLAGS.contains(&token.as_str());
            prop_assert_eq!(should_emit_manifest(&[token.as_str()]), expected);
            Ok(())
        })
        .unwrap();
}

/// Padding a help flag with whitespace or changing case never matches
#[test]
fn test_decorated_help_flags_delegate() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::sample::select(MANIFEST_FLAGS.to_vec()), "[ \t]{1,3}", any::<bool>()),
            |(flag, pad, upper)| {
                let token = if upper {
                    format!("{}{}", flag.to_uppercase(), pad)
                } else {
                    format!("{}{}", pad, flag)
                };
                prop_assert!(!should_emit_manifest(&[token]));
                Ok(())
            },
        )
        .unwrap();
}
