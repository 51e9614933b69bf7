//! Каталог товаров из CSV (Code,Name,Price,Unit, заголовок необязателен)

use std::collections::HashMap;
use std::path::Path;

use contracts::domain::a001_product::Product;
use contracts::shared::constants::{PRODUCT_CSV_HEADER, PRODUCT_HEADER_TOKENS, SAMPLE_PRODUCTS};

/// Цены по кодам и полные карточки товаров
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    prices: HashMap<String, f64>,
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Цена товара по коду; неизвестный код стоит 0
    pub fn price_of(&self, code: &str) -> f64 {
        self.prices.get(&code.to_uppercase()).copied().unwrap_or(0.0)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn insert_row(&mut self, row: &csv::StringRecord) {
        if row.len() < 3 {
            return;
        }

        let code = row[0].trim().to_uppercase();
        let price = match row[2].trim().parse::<f64>() {
            Ok(price) => price,
            Err(_) => return,
        };
        self.prices.insert(code.clone(), price);

        let unit = row.get(3).map(|u| u.trim().to_string());
        match Product::new(code.clone(), row[1].trim(), price, unit) {
            Ok(product) => {
                self.products.retain(|p| p.code != code);
                self.products.push(product);
            }
            Err(e) => tracing::warn!("Product '{}' skipped in catalog: {}", code, e),
        }
    }
}

/// Загружает каталог; если файла нет, сначала создаёт файл-пример
pub fn load_products(path: &Path) -> ProductCatalog {
    if !path.exists() {
        save_products_example(path);
    }

    match read_catalog(path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            tracing::error!("Error loading products: {}", e);
            ProductCatalog::default()
        }
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<ProductCatalog> {
    let text = std::fs::read_to_string(path)?;
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    let mut catalog = ProductCatalog::default();

    let Some(first_row) = rows.first() else {
        return Ok(catalog);
    };
    let has_header = first_row
        .get(0)
        .map(|cell| PRODUCT_HEADER_TOKENS.contains(&cell.to_lowercase().as_str()))
        .unwrap_or(false);

    let data_rows = if has_header { &rows[1..] } else { &rows[..] };
    for row in data_rows {
        catalog.insert_row(row);
    }

    Ok(catalog)
}

/// Пишет каталог-пример с заголовком
pub fn save_products_example(path: &Path) {
    if let Err(e) = write_sample(path) {
        tracing::error!("Error creating sample products file: {}", e);
    }
}

fn write_sample(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(PRODUCT_CSV_HEADER)?;
    for row in SAMPLE_PRODUCTS {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");

        let catalog = load_products(&path);
        assert!(path.exists());
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.price_of("ca"), 25000.0);
        assert_eq!(catalog.price_of("BS"), 50.0);
        assert_eq!(catalog.price_of("XX"), 0.0);

        let soap = catalog.products().iter().find(|p| p.code == "BS").unwrap();
        assert_eq!(soap.unit, "g");
    }

    #[test]
    fn test_headerless_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        std::fs::write(&path, "ca,Creme Affinante,25000,unit\nTA,Tisane,24000\n").unwrap();

        let catalog = load_products(&path);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of("CA"), 25000.0);
        assert_eq!(catalog.price_of("TA"), 24000.0);
    }

    #[test]
    fn test_bad_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        std::fs::write(
            &path,
            "SKU,Name,Price\nCA,Creme,abc\nTA\nCG,,1000\nSG,Savon,15000\nSG,Savon,16000\n",
        )
        .unwrap();

        let catalog = load_products(&path);
        assert_eq!(catalog.price_of("CA"), 0.0);
        // Без названия цена есть, а карточки товара нет
        assert_eq!(catalog.price_of("CG"), 1000.0);
        assert_eq!(catalog.price_of("SG"), 16000.0);
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].price, 16000.0);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        std::fs::write(&path, "").unwrap();
        assert!(load_products(&path).is_empty());
    }
}
