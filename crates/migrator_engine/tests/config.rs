use migrator_engine::{
    CatalogError, Migrator, MigratorConfig, DEFAULT_OLD_DOMAIN, DEFAULT_TARGET_HOST,
};

#[test]
fn partial_ron_config_keeps_remaining_defaults() {
    let config: MigratorConfig = ron::from_str(r#"(target_host: "idws.example")"#).unwrap();

    assert_eq!(config.target_host, "idws.example");
    assert_eq!(config.old_domain, DEFAULT_OLD_DOMAIN);
    assert_eq!(
        Migrator::new(&config)
            .unwrap()
            .convert_with_report("[URL]https://forum.indowebster.com/showthread.php?p=3[/URL]")
            .output,
        "[U][POST=3][PLAIN]https://idws.example/posts/3[/PLAIN][/POST][/U]"
    );
}

#[test]
fn default_config_uses_known_hosts() {
    let config = MigratorConfig::default();
    assert_eq!(config.target_host, DEFAULT_TARGET_HOST);
    assert_eq!(config.new_domain, "forum.indowebster.com");
}

#[test]
fn blank_new_domain_is_a_catalog_error() {
    let config = MigratorConfig {
        new_domain: String::new(),
        ..MigratorConfig::default()
    };
    match Migrator::new(&config) {
        Err(CatalogError::EmptyHost { role }) => assert_eq!(role, "new domain"),
        other => panic!("expected empty host error, got {other:?}"),
    }
}
