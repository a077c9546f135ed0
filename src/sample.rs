//! Built-in sample catalog.

use log;

use crate::collection::Collection;
use crate::record::{Record, RecordError};

const SAMPLE_RECORDS: [(&str, &str, i64); 8] = [
    ("Chip Central", "controle", 10),
    ("Motor Propulsor", "propulsao", 9),
    ("Antena Satelite", "controle", 8),
    ("Base Estrutural", "estrutura", 7),
    ("Painel Solar", "suporte", 6),
    ("Sistema Navegacao", "controle", 9),
    ("Tanque Combustivel", "propulsao", 8),
    ("Escudo Termico", "estrutura", 7),
];

/// Returns a collection holding the eight sample components in their load order.
pub fn sample_collection() -> Result<Collection, RecordError> {
    let mut collection = Collection::new();
    fill_sample(&mut collection)?;

    return Ok(collection);
}

/// Replaces the contents of `collection` with the sample components.
pub fn fill_sample(collection: &mut Collection) -> Result<(), RecordError> {
    collection.clear();
    for (name, category, priority) in SAMPLE_RECORDS {
        let record = Record::new(name, category, priority)?;
        // capacity always exceeds the sample size
        if collection.push(record).is_err() {
            break;
        }
    }

    log::debug!("loaded {} sample records", collection.len());

    return Ok(());
}
