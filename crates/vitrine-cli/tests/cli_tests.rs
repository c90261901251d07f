mod common;

use common::{
    CART_JSON, CATALOG_JSON, ORDER_JSON, PRODUCT_JSON, PROMOTION_JSON, TestFixture,
};
use predicates::prelude::*;

#[test]
fn test_price_uses_french_euro_defaults() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["price", "12345"])
        .assert()
        .success()
        .stdout("123,45\u{a0}€\n");
}

#[test]
fn test_price_with_currency_and_locale_override() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["--locale", "en-US", "price", "123456789", "--currency", "usd"])
        .assert()
        .success()
        .stdout("$1,234,567.89\n");
}

#[test]
fn test_price_negative_amount() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["price", "-500"])
        .assert()
        .success()
        .stdout("-5,00\u{a0}€\n");
}

#[test]
fn test_price_unsupported_currency_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["price", "100", "--currency", "BTC"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported currency code: BTC"));
}

#[test]
fn test_price_json_envelope() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .args(["--format", "json", "price", "12345"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["cents"], 12345);
    assert_eq!(json["data"]["major"], 123.45);
    assert_eq!(json["data"]["currency"], "EUR");
    assert_eq!(json["data"]["formatted"], "123,45\u{a0}€");
}

#[test]
fn test_convert_both_directions() {
    let fixture = TestFixture::new();
    assert_eq!(fixture.stdout_of(&["convert", "to-major", "1999"]), "19.99\n");
    assert_eq!(fixture.stdout_of(&["convert", "to-minor", "19.99"]), "1999\n");
}

#[test]
fn test_date_long_and_short() {
    let fixture = TestFixture::new();
    assert_eq!(
        fixture.stdout_of(&["date", "2024-01-15T14:30:00"]),
        "15 janvier 2024\n"
    );
    assert_eq!(
        fixture.stdout_of(&["date", "--short", "2024-01-15T14:30:00"]),
        "15 janv. 2024, 14:30\n"
    );
}

#[test]
fn test_date_timezone_override_moves_the_day() {
    let fixture = TestFixture::new();
    assert_eq!(
        fixture.stdout_of(&["--timezone", "+02:00", "date", "2024-01-15T23:30:00Z"]),
        "16 janvier 2024\n"
    );
}

#[test]
fn test_invalid_date_placeholder_by_default() {
    let fixture = TestFixture::new();
    assert_eq!(fixture.stdout_of(&["date", "not a date"]), "Invalid Date\n");
}

#[test]
fn test_invalid_date_strict_policy_fails() {
    let fixture = TestFixture::new();
    fixture.write_config("invalid_dates = \"strict\"\n");
    fixture
        .command()
        .args(["date", "not a date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_badge_known_and_unknown() {
    let fixture = TestFixture::new();
    assert_eq!(
        fixture.stdout_of(&["badge", "delivered"]),
        "DELIVERED\tgreen\tbg-green-100 text-green-800\n"
    );
    assert_eq!(
        fixture.stdout_of(&["badge", "on_hold"]),
        "ON_HOLD\tgray\tbg-gray-100 text-gray-800\n"
    );
}

#[test]
fn test_badge_json_snapshot() {
    let fixture = TestFixture::new();
    let out = fixture.stdout_of(&["--format", "json", "badge", "Shipped"]);
    insta::assert_snapshot!(out.trim_end(), @r#"
    {
      "ok": true,
      "data": {
        "status": "Shipped",
        "known": true,
        "style": "purple",
        "css_class": "bg-purple-100 text-purple-800"
      }
    }
    "#);
}

#[test]
fn test_stars() {
    let fixture = TestFixture::new();
    assert_eq!(fixture.stdout_of(&["stars", "3.5"]), "★★★⯪☆\n");
    assert_eq!(fixture.stdout_of(&["stars", "0"]), "☆☆☆☆☆\n");
    assert_eq!(fixture.stdout_of(&["stars", "9"]), "★★★★★\n");
}

#[test]
fn test_stars_custom_glyphs_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config("[stars]\nfilled = \"*\"\nhalf = \"+\"\nempty = \".\"\n");
    assert_eq!(fixture.stdout_of(&["stars", "2.5"]), "**+..\n");
}

#[test]
fn test_product_show() {
    let fixture = TestFixture::new();
    let file = fixture.write_file("product.json", PRODUCT_JSON);
    let out = fixture.stdout_of(&["product", "show", file.to_str().unwrap()]);

    assert!(out.starts_with("Château Margaux 2018\n"), "{}", out);
    assert!(out.contains("SKU:     BDX-2018-MARG"));
    assert!(out.contains("382,50\u{a0}€  (was 450,00\u{a0}€, -15%)"));
    assert!(out.contains("Stock:   12 in stock"));
    assert!(out.contains("★★★★⯪ 4.5/5 (2 reviews)"));
    assert!(out.contains("Category: cat-red"));
    assert!(out.contains("Listed:  15 janvier 2024"));
}

#[test]
fn test_product_show_missing_file() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["product", "show", "/nonexistent/product.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load product"));
}

#[test]
fn test_order_show_with_catalog() {
    let fixture = TestFixture::new();
    let order = fixture.write_file("order.json", ORDER_JSON);
    let catalog = fixture.write_file("catalog.json", CATALOG_JSON);
    let out = fixture.stdout_of(&[
        "order",
        "show",
        order.to_str().unwrap(),
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    assert!(out.starts_with("Order CMD-2024-0001  DELIVERED\n"), "{}", out);
    assert!(out.contains("Placed:   1 mars 2024, 10:00"));
    assert!(out.contains("Customer: u-1"));
    assert!(out.contains("Muscadet Sèvre et Maine"));
    assert!(out.contains("3 items, total 408,30\u{a0}€"));
}

#[test]
fn test_order_show_without_catalog_falls_back_to_ids() {
    let fixture = TestFixture::new();
    let order = fixture.write_file("order.json", ORDER_JSON);
    let out = fixture.stdout_of(&["order", "show", order.to_str().unwrap()]);
    assert!(out.contains("wine-7"));
    assert!(!out.contains("Muscadet"));
}

#[test]
fn test_order_show_json_keeps_cents() {
    let fixture = TestFixture::new();
    let order = fixture.write_file("order.json", ORDER_JSON);
    let out = fixture.stdout_of(&["--format", "json", "order", "show", order.to_str().unwrap()]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["data"]["kind"], "order");
    assert_eq!(json["data"]["badge"], "green");
    assert_eq!(json["data"]["total_amount_cents"], 40830);
    assert_eq!(json["data"]["total_items"], 3);
}

#[test]
fn test_cart_show_empty() {
    let fixture = TestFixture::new();
    let cart = fixture.write_file("cart.json", CART_JSON);
    let out = fixture.stdout_of(&["--locale", "en-GB", "cart", "show", cart.to_str().unwrap()]);
    assert!(out.starts_with("Cart cart-3  ACTIVE\n"), "{}", out);
    assert!(out.contains("Created:  20 Apr 2024, 18:45"));
    assert!(out.contains("(empty)"));
}

#[test]
fn test_promotion_phases() {
    let fixture = TestFixture::new();
    let file = fixture.write_file("promotion.json", PROMOTION_JSON);
    let path = file.to_str().unwrap();

    let active = fixture.stdout_of(&["promotion", "show", path, "--on", "2024-06-30"]);
    assert!(active.starts_with("Soldes d'été  [active]\n"), "{}", active);
    assert!(active.contains("-20%  from 1 juin 2024 to 30 juin 2024"));
    assert!(active.contains("Products: 1"));

    let upcoming = fixture.stdout_of(&["promotion", "show", path, "--on", "2024-05-31"]);
    assert!(upcoming.contains("[upcoming]"));

    let expired = fixture.stdout_of(&["promotion", "show", path, "--on", "2024-07-01"]);
    assert!(expired.contains("[expired]"));
}

#[test]
fn test_config_init_show_and_path() {
    let fixture = TestFixture::new();

    let out = fixture.stdout_of(&["config", "init"]);
    assert!(out.starts_with("Wrote default configuration to"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let out = fixture.stdout_of(&["config", "init", "--force"]);
    assert!(out.starts_with("Overwrote default configuration to"));

    let show = fixture.stdout_of(&["config", "show"]);
    assert!(show.contains("locale:        fr-FR"));
    assert!(show.contains("currency:      EUR"));
    assert!(show.contains("timezone:      UTC"));
    assert!(show.contains("invalid_dates: placeholder"));

    let path = fixture.stdout_of(&["config", "path"]);
    assert_eq!(path.trim_end(), fixture.config_path().display().to_string());
}

#[test]
fn test_config_with_unsupported_currency_is_rejected() {
    let fixture = TestFixture::new();
    fixture.write_config("currency = \"XYZ\"\n");
    fixture
        .command()
        .args(["price", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported currency 'XYZ'"));

    // A broken file can still be replaced
    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_configured_locale_applies() {
    let fixture = TestFixture::new();
    fixture.write_config("locale = \"de-DE\"\ncurrency = \"EUR\"\n");
    assert_eq!(fixture.stdout_of(&["price", "123456"]), "1.234,56\u{a0}€\n");
    assert_eq!(
        fixture.stdout_of(&["date", "2024-03-05T09:00:00"]),
        "5. März 2024\n"
    );
}

#[test]
fn test_unknown_locale_override_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["--locale", "xx-XX", "price", "1"])
        .assert()
        .failure();
}

#[test]
fn test_no_command_prints_guidance() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("vitrine config init"));
}

#[test]
fn test_format_flag_selects_output() {
    let fixture = TestFixture::new();
    assert_eq!(fixture.stdout_of(&["badge", "pending"]), "PENDING\tyellow\tbg-yellow-100 text-yellow-800\n");

    let out = fixture.stdout_of(&["--format", "json", "badge", "pending"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["style"], "yellow");

    let out = fixture.stdout_of(&["--format", "plain", "stars", "1"]);
    assert_eq!(out, "★☆☆☆☆\n");
}
