use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::render::TableView;

/// Serializes a [`TableView`] to the CSV the table collaborator consumes.
#[derive(Default)]
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_table(&self, table: &TableView, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        self.write_rows(table, &mut writer)
    }

    pub fn write_table_to<W: Write>(&self, table: &TableView, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        self.write_rows(table, &mut writer)
    }

    fn write_rows<W: Write>(&self, table: &TableView, writer: &mut csv::Writer<W>) -> Result<()> {
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
