// SPDX-License-Identifier: MPL-2.0
use alter_ego::cart::CartStore;
use alter_ego::catalog::{products, Price};
use alter_ego::config::{self, Config};
use alter_ego::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("fr".to_string()),
        animation: Some(false),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.language.as_deref(), Some("fr"));
    assert_eq!(loaded.animation, Some(false));
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        animation: Some(true),
    };
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("toast-added-to-cart"), "Added to cart");

    // Switch the persisted language and reload.
    let updated = Config {
        language: Some("fr".to_string()),
        ..loaded
    };
    config::save_to_path(&updated, &path).expect("Failed to write updated config file");

    let reloaded = config::load_from_path(&path).expect("Failed to reload config");
    let i18n = I18n::new(None, &reloaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("toast-added-to-cart"), "Ajouté au panier");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        animation: None,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_full_purchase_flow() {
    let catalog = products();
    let mut cart = CartStore::new();

    // Add everything once, then the first item a second time.
    for product in &catalog {
        cart.add_item(product);
    }
    cart.add_item(&catalog[0]);

    assert_eq!(cart.line_count(), 3);
    assert_eq!(cart.lines()[0].quantity(), 2);

    let expected: u64 = 2 * 3499 + 1799 + 2999;
    assert_eq!(cart.total(), Price::new(expected));

    // Drop the duplicate back down and clear the rest.
    cart.update_quantity(&catalog[0].id, -1);
    cart.remove_item(&catalog[1].id);
    cart.remove_item(&catalog[2].id);

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.total(), Price::new(3499));

    cart.update_quantity(&catalog[0].id, -1);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Price::new(0));
}

#[test]
fn test_catalog_ids_match_cart_lookups() {
    let catalog = products();
    let mut cart = CartStore::new();
    cart.add_item(&catalog[1]);

    // Lookups by a wrong id must leave the store untouched.
    cart.update_quantity("missing", 5);
    cart.remove_item("missing");

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].id, catalog[1].id);
}
