//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use vt_config::VtConfig;

#[test]
fn loads_vault_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[vault]
dir = "/var/cache/valuetrip"
key = "team_vault"
max_bytes = 65536
"#,
        )?;

        let config: VtConfig = Figment::from(Serialized::defaults(VtConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.vault.dir, "/var/cache/valuetrip");
        assert_eq!(config.vault.key, "team_vault");
        assert_eq!(config.vault.quota(), Some(65536));
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[display]
default_currency = "EUR"
eco_mode = true

[what_if]
max_budget = 450.0
service_weight = 0.8
top_n = 3

[fees]
carry_on_bags = 0
checked_bags = 2

[connectivity]
probe_addr = "9.9.9.9:53"
probe_timeout_ms = 250
force_offline = true
"#,
        )?;

        let config: VtConfig = Figment::from(Serialized::defaults(VtConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.display.default_currency, "EUR");
        assert!(config.display.eco_mode);
        assert!((config.what_if.max_budget - 450.0).abs() < f64::EPSILON);
        assert!((config.what_if.service_weight - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.what_if.top_n, 3);
        assert_eq!(config.fees.carry_on_bags, 0);
        assert_eq!(config.fees.checked_bags, 2);
        assert_eq!(config.connectivity.probe_addr, "9.9.9.9:53");
        assert_eq!(config.connectivity.probe_timeout().as_millis(), 250);
        assert!(config.connectivity.force_offline);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[what_if]
top_n = 8
"#,
        )?;

        let config: VtConfig = Figment::from(Serialized::defaults(VtConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.what_if.top_n, 8);
        assert!((config.what_if.max_budget - 200.0).abs() < f64::EPSILON);
        assert_eq!(config.vault.key, "valuetrip_offline_vault");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.create_dir(".valuetrip")?;
        jail.create_file(
            ".valuetrip/config.toml",
            r#"
[display]
default_currency = "USD"
"#,
        )?;

        let config = VtConfig::load().expect("config loads");
        assert_eq!(config.display.default_currency, "USD");
        Ok(())
    });
}

#[test]
fn out_of_range_values_fail_validation() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.create_dir(".valuetrip")?;
        jail.create_file(
            ".valuetrip/config.toml",
            r#"
[what_if]
service_weight = 2.0
"#,
        )?;

        let error = VtConfig::load().expect_err("service weight above 1 is rejected");
        assert!(error.to_string().contains("what_if.service_weight"));
        Ok(())
    });
}
