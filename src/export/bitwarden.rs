// src/export/bitwarden.rs
//! Bitwarden CSV export
//!
//! SECURITY WARNING: the output holds every password in cleartext.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info, warn};

use crate::aliases::LoginPassword;
use crate::config::Config;
use crate::consts::CSV_HEADER;
use crate::core::{ClassifiedFields, Classifier, PathTokens, Result};
use crate::secret::{split_content, SecretSource};
use crate::walk::{discover_entries, StoreEntry};

/// One Bitwarden login row
pub struct ExportRecord {
    pub fields: ClassifiedFields,
    pub password: LoginPassword,
    pub notes: String,
}

impl ExportRecord {
    /// Columns in `CSV_HEADER` order
    pub fn to_row(&self) -> [&str; 6] {
        [
            self.fields.folder.as_str(),
            self.fields.name.as_str(),
            self.fields.username.as_str(),
            self.password.expose_secret().as_str(),
            self.fields.url.as_str(),
            self.notes.as_str(),
        ]
    }
}

impl fmt::Debug for ExportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRecord")
            .field("fields", &self.fields)
            .field("password", &"[REDACTED]")
            .field("notes", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub skipped: usize,
}

/// Reveal, classify and write one row per entry, header first.
///
/// Entries that cannot be revealed, or reveal nothing, are skipped.
pub fn write_csv<W, S>(
    entries: &[StoreEntry],
    classifier: &Classifier,
    source: &S,
    suffix: &str,
    writer: W,
) -> Result<ExportSummary>
where
    W: Write,
    S: SecretSource + ?Sized,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    let mut summary = ExportSummary::default();
    for entry in entries {
        match build_record(entry, classifier, source, suffix) {
            Some(record) => {
                csv.write_record(record.to_row())?;
                summary.exported += 1;
                info!(
                    "Processed: {} -> {} ({})",
                    record.fields.folder, record.fields.name, record.fields.username
                );
            }
            None => summary.skipped += 1,
        }
    }

    csv.flush()?;
    Ok(summary)
}

fn build_record<S>(
    entry: &StoreEntry,
    classifier: &Classifier,
    source: &S,
    suffix: &str,
) -> Option<ExportRecord>
where
    S: SecretSource + ?Sized,
{
    let content = match source.reveal(&entry.id) {
        Ok(content) => content,
        Err(err) => {
            warn!("Error reading {}: {err}", entry.rel_path.display());
            return None;
        }
    };
    if content.expose_secret().is_empty() {
        warn!("Skipping {}: empty secret", entry.rel_path.display());
        return None;
    }

    let (password, notes) = split_content(&content);
    let fields = classifier.classify(&PathTokens::from_path(&entry.rel_path, suffix));
    debug!("Classified {} as {:?}", entry.id, fields);

    Some(ExportRecord {
        fields,
        password,
        notes,
    })
}

/// Export the configured store to the configured CSV file.
///
/// The strategy is resolved and built before the store is walked or the
/// output file is created, so a bad strategy leaves nothing behind.
pub fn export_store<S>(config: &Config, source: &S) -> Result<ExportSummary>
where
    S: SecretSource + ?Sized,
{
    let classifier = Classifier::new(config.parsing.resolve()?)?;
    let root = config.store.resolved_dir();
    let entries = discover_entries(&root, &config.store.suffix)?;

    info!(
        "Exporting {} entries from {} using '{}' strategy",
        entries.len(),
        root.display(),
        classifier.kind()
    );

    let file = File::create(&config.output.path)?;
    let summary = write_csv(
        &entries,
        &classifier,
        source,
        &config.store.suffix,
        BufWriter::new(file),
    )?;

    info!(
        "Exported {} entries ({} skipped) → {}",
        summary.exported,
        summary.skipped,
        config.output.path.display()
    );
    Ok(summary)
}
