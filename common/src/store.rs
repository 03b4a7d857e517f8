use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::product::Product;
use crate::user::User;

const USERS_FILE: &str = "users.json";
const PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// File-backed catalog storage: `users.json` and `products.json` inside a
/// data directory. Saves are plain full overwrites — no merge, no
/// versioning, no atomic rename.
#[derive(Debug, Clone)]
pub struct DataStore {
    users_path: PathBuf,
    products_path: PathBuf,
}

impl DataStore {
    pub fn new(data_dir: &Path) -> Self {
        DataStore {
            users_path: data_dir.join(USERS_FILE),
            products_path: data_dir.join(PRODUCTS_FILE),
        }
    }

    /// Load both files into a fresh catalog. Missing or malformed files
    /// are errors; callers treat them as fatal at startup.
    pub fn load(&self) -> Result<Catalog, StoreError> {
        let users: Vec<User> = read_json(&self.users_path)?;
        let products: Vec<Product> = read_json(&self.products_path)?;
        tracing::debug!(
            users = users.len(),
            products = products.len(),
            "catalog loaded"
        );
        Ok(Catalog::new(users, products))
    }

    /// Overwrite both files with the catalog's current contents,
    /// creating the data directory first if needed.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        write_json(&self.users_path, &catalog.users)?;
        write_json(&self.products_path, &catalog.products)?;
        tracing::info!(path = %self.users_path.display(), "catalog saved");
        Ok(())
    }

    /// Write the demo catalog so a first run has something to load.
    pub fn seed_demo_data(&self) -> Result<(), StoreError> {
        self.save(&demo_catalog())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let data = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let data = serde_json::to_string_pretty(value).expect("catalog serialization cannot fail");
    std::fs::write(path, data).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The classic demo dataset: one known account plus a small snack shelf.
pub fn demo_catalog() -> Catalog {
    Catalog::new(
        vec![
            User::new("Jason", "sfa", Money::from_dollars(10)),
            User::new("Tom", "zug", Money::from_dollars(5)),
            User::new("Amanda", "xcq", Money::from_cents(1550)),
        ],
        vec![
            Product::new("Chips", Money::from_dollars(2), 5),
            Product::new("Candy", Money::from_cents(150), 12),
            Product::new("Soda", Money::from_cents(250), 6),
            Product::new("Gum", Money::from_cents(75), 20),
        ],
    )
}
