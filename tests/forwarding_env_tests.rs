//! Resolution of the forwarding mode from the environment.
//!
//! The mode is resolved once per process, so this file holds a single test.

use chained_sequence::{
    forwarding_mode, Arg, ChainConfig, ChainError, ForwardingMode, IntoChained,
    FORWARDING_ENV_VAR,
};

#[test]
fn test_unknown_environment_value_is_unsupported() {
    std::env::set_var(FORWARDING_ENV_VAR, "ancient");

    assert!(matches!(
        ChainConfig::from_env(),
        Err(ChainError::UnsupportedEnvironment(_))
    ));
    assert!(matches!(
        forwarding_mode(),
        Err(ChainError::UnsupportedEnvironment(_))
    ));

    // operations that need the mode report it
    let seeded = (1..4).chained().accumulate(|a, b| a + b, Arg::Present(0));
    assert!(matches!(seeded, Err(ChainError::UnsupportedEnvironment(_))));
    let no_key = (1..4).chained().max_with(None::<fn(&i32) -> i32>, Arg::Omitted);
    assert!(no_key.unwrap_err().to_string().starts_with("unsupported environment"));

    // operations that do not are unaffected
    let running = (1..4).chained().accumulate(|a, b| a + b, Arg::Omitted).unwrap();
    assert_eq!(running.list(), vec![1, 3, 6]);
    assert_eq!((1..4).chained().max(Arg::Omitted), Ok(3));

    // the failed resolution is remembered even after the variable is fixed
    std::env::set_var(FORWARDING_ENV_VAR, "legacy");
    assert_eq!(
        ChainConfig::from_env(),
        Ok(ChainConfig::new().forwarding(ForwardingMode::Legacy))
    );
    assert!(forwarding_mode().is_err());
    std::env::remove_var(FORWARDING_ENV_VAR);
}
