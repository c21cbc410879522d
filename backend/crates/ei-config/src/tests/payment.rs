use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, some};
use serial_test::serial;

#[test]
#[serial]
fn given_no_secret_env_when_load_then_secret_key_none() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _ei = EnvGuard::remove("EI_PAYMENT_SECRET_KEY");
    let _stripe = EnvGuard::remove("STRIPE_SECRET_KEY");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.payment.secret_key, none());
}

#[test]
#[serial]
fn given_stripe_secret_env_when_load_then_used_as_fallback() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _ei = EnvGuard::remove("EI_PAYMENT_SECRET_KEY");
    let _stripe = EnvGuard::set("STRIPE_SECRET_KEY", "sk_test_fallback");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.payment.secret_key, some(eq("sk_test_fallback")));
}

#[test]
#[serial]
fn given_both_secret_envs_when_load_then_prefixed_var_wins() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _ei = EnvGuard::set("EI_PAYMENT_SECRET_KEY", "sk_test_primary");
    let _stripe = EnvGuard::set("STRIPE_SECRET_KEY", "sk_test_fallback");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.payment.secret_key, some(eq("sk_test_primary")));
}

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("EI_PAYMENT_BASE_URL", "ftp://payments.local");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("payment.base_url"));
}

#[test]
#[serial]
fn given_blank_download_counter_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _counter = EnvGuard::set("EI_DOWNLOAD_COUNTER", "  ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
