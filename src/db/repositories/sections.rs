use log::{info, warn};
use rusqlite::{params, Connection, Row};

use crate::classify::{classify, ResolvedSection, DEFAULT_SECTION};
use crate::db::{
    connection::Database,
    models::{ImageDims, Section, SectionInput},
};
use crate::errors::TrackerError;
use crate::geometry::absolute_bounds;

fn row_to_section(row: &Row) -> Result<Section, TrackerError> {
    Ok(Section {
        id: row.get("id")?,
        x: row.get("x")?,
        y: row.get("y")?,
        width: row.get("width")?,
        height: row.get("height")?,
        text: row.get("text")?,
    })
}

impl Database {
    pub async fn list_sections(&self) -> Result<Vec<Section>, TrackerError> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, x, y, width, height, text
                 FROM sections
                 ORDER BY id",
            )?;

            let mut rows = stmt.query([])?;
            let mut sections = Vec::new();
            while let Some(row) = rows.next()? {
                sections.push(row_to_section(row)?);
            }

            Ok(sections)
        })
        .await
    }

    /// Replaces the whole section set and retags every stored location
    /// record against it, in one transaction.
    ///
    /// Every record is first reset to the default section, then assigned
    /// the first stored section containing its position under `dims`. Any
    /// failure, a malformed section included, rolls the store back to its
    /// pre-call state. Returns the number of records re-evaluated.
    pub async fn replace_sections(
        &self,
        sections: Vec<SectionInput>,
        dims: ImageDims,
    ) -> Result<usize, TrackerError> {
        self.execute(move |conn| {
            let result = run_replace(conn, &sections, dims);
            match result {
                Ok(reclassified) => {
                    info!(
                        "replaced section set ({} sections), reclassified {} location records",
                        sections.len(),
                        reclassified
                    );
                    Ok(reclassified)
                }
                Err(err) => {
                    warn!("section replacement rolled back: {err}");
                    // A store failure mid-reclassify surfaces as an aborted
                    // transaction; validation failures keep their kind.
                    match err {
                        TrackerError::Persistence(message) => {
                            Err(TrackerError::Transaction(message))
                        }
                        other => Err(other),
                    }
                }
            }
        })
        .await
    }
}

fn run_replace(
    conn: &mut Connection,
    sections: &[SectionInput],
    dims: ImageDims,
) -> Result<usize, TrackerError> {
    dims.validate()?;

    // Dropping the transaction without commit rolls everything back.
    let tx = conn.transaction()?;

    tx.execute(
        "UPDATE locations SET section = ?1",
        params![DEFAULT_SECTION],
    )?;
    tx.execute("DELETE FROM sections", [])?;

    let mut resolved = Vec::with_capacity(sections.len());
    for section in sections {
        section.validate()?;
        tx.execute(
            "INSERT INTO sections (x, y, width, height, text)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                section.x,
                section.y,
                section.width,
                section.height,
                section.text,
            ],
        )?;
        resolved.push(ResolvedSection {
            label: section.text.clone(),
            bounds: absolute_bounds(section, dims),
        });
    }

    let positions: Vec<(i64, f64, f64)> = {
        let mut stmt = tx.prepare("SELECT id, x_pos, y_pos FROM locations ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut positions = Vec::new();
        while let Some(row) = rows.next()? {
            positions.push((row.get(0)?, row.get(1)?, row.get(2)?));
        }
        positions
    };

    let reclassified = positions.len();
    {
        let mut update = tx.prepare("UPDATE locations SET section = ?1 WHERE id = ?2")?;
        for (id, x, y) in positions {
            let label = classify(x, y, &resolved);
            // Records no section contains already carry the default from
            // the reset above.
            if label != DEFAULT_SECTION {
                update.execute(params![label, id])?;
            }
        }
    }

    tx.commit()?;
    Ok(reclassified)
}
