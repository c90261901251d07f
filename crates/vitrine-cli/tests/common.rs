//! Shared fixture for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PRODUCT_JSON: &str = r#"{
  "success": true,
  "message": "OK",
  "data": {
    "id": "wine-42",
    "sku": "BDX-2018-MARG",
    "name": "Château Margaux",
    "slug": "chateau-margaux-2018",
    "producer": "Château Margaux",
    "region": "Bordeaux",
    "vintage": 2018,
    "alcohol": 13.5,
    "basePriceCents": 45000,
    "currentPriceCents": 38250,
    "stock": 12,
    "productCategories": [
      {"id": "pc-1", "productId": "wine-42", "categoryId": "cat-red", "dateAdded": "2024-01-01", "isPrimary": true, "createdAt": "2024-01-01T08:00:00"}
    ],
    "reviews": [
      {"id": "r-1", "userId": "u-1", "productId": "wine-42", "rating": 5, "createdAt": "2024-02-01T12:00:00"},
      {"id": "r-2", "userId": "u-2", "productId": "wine-42", "rating": 4, "createdAt": "2024-02-03T12:00:00"}
    ],
    "createdAt": "2024-01-15T14:30:00"
  }
}"#;

pub const CATALOG_JSON: &str = r#"[
  {"id": "wine-42", "sku": "BDX-2018-MARG", "name": "Château Margaux", "slug": "margaux",
   "basePriceCents": 45000, "currentPriceCents": 38250, "createdAt": "2024-01-15T14:30:00"},
  {"id": "wine-7", "sku": "LOI-MUSC", "name": "Muscadet Sèvre et Maine", "slug": "muscadet",
   "basePriceCents": 1290, "currentPriceCents": 1290, "createdAt": "2024-01-01T00:00:00"}
]"#;

pub const ORDER_JSON: &str = r#"{
  "id": "o-1",
  "userId": "u-1",
  "orderNumber": "CMD-2024-0001",
  "status": "DELIVERED",
  "items": [
    {"id": "oi-1", "orderId": "o-1", "productId": "wine-42", "quantity": 1, "priceCents": 38250, "createdAt": "2024-03-01T10:00:00"},
    {"id": "oi-2", "orderId": "o-1", "productId": "wine-7", "quantity": 2, "priceCents": 2580, "createdAt": "2024-03-01T10:00:00"}
  ],
  "createdAt": "2024-03-01T10:00:00"
}"#;

pub const CART_JSON: &str = r#"{
  "id": "cart-3",
  "userId": "u-2",
  "status": "ACTIVE",
  "items": [],
  "createdAt": "2024-04-20T18:45:00"
}"#;

pub const PROMOTION_JSON: &str = r#"{
  "id": "promo-1",
  "title": "Soldes d'été",
  "description": "Les rosés à prix doux",
  "discountPercentage": 20,
  "startDate": "2024-06-01",
  "endDate": "2024-06-30",
  "productPromotions": [
    {"id": "pp-1", "productId": "wine-7", "promotionId": "promo-1", "createdAt": "2024-05-20T09:00:00"}
  ],
  "createdAt": "2024-05-20T09:00:00"
}"#;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".vitrine");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Write a document next to the data directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vitrine");
        cmd.env_remove("RUST_LOG")
            .env_remove("VITRINE_PATH")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run vitrine");
        assert!(
            output.status.success(),
            "vitrine {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
