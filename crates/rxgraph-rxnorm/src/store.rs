use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use rxgraph_core::{Attributes, BackingStore, Key, Relation};
use rxgraph_error::{Error, Result};
use tracing::{debug, info};

use crate::schema::{REQUIRED_TABLES, SCHEMA};
use crate::term::{ConceptName, preferred_name, shape_for_tty};

/// RxNorm concepts and relations read from an SQLite import of the release.
pub struct RxNormStore {
    conn: Connection,
    path: PathBuf,
}

fn query_error(operation: &'static str, id: &str, err: rusqlite::Error) -> Error {
    Error::query_failed(err.to_string())
        .with_operation(operation)
        .with_context("id", id)
        .set_source(err)
}

impl RxNormStore {
    /// Open an existing database read-only.
    ///
    /// A missing file or missing tables is a configuration error, reported
    /// before any traversal starts.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let location = path.display().to_string();
        if !path.exists() {
            return Err(Error::store_unavailable(
                location.clone(),
                format!(
                    "the RxNorm database at {location} does not exist, run the import script `databases/rxnorm.sh`"
                ),
            )
            .with_operation("rxnorm::open"));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| {
            Error::store_unavailable(location.clone(), err.to_string())
                .with_operation("rxnorm::open")
                .set_source(err)
        })?;

        let store = Self {
            conn,
            path: path.to_path_buf(),
        };
        store.ensure_tables()?;
        info!(path = %location, "opened RxNorm database");
        Ok(store)
    }

    /// Create (or extend) a database with the tables the store reads.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let conn = Connection::open(path).map_err(|err| {
            Error::store_unavailable(location.clone(), err.to_string())
                .with_operation("rxnorm::create")
                .set_source(err)
        })?;
        conn.execute_batch(SCHEMA).map_err(|err| {
            Error::store_unavailable(location, err.to_string())
                .with_operation("rxnorm::create")
                .set_source(err)
        })?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// The underlying connection, for loading rows.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn has_table(&self, table: &str) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )
            .map_err(|err| query_error("rxnorm::has_table", table, err))?;
        Ok(count > 0)
    }

    fn ensure_tables(&self) -> Result<()> {
        for table in REQUIRED_TABLES {
            if !self.has_table(table)? {
                return Err(Error::store_unavailable(
                    self.path.display().to_string(),
                    format!("table {table} is missing"),
                )
                .with_operation("rxnorm::open"));
            }
        }
        Ok(())
    }

    /// English names of a concept, ordered by atom id.
    pub fn names(&self, rxcui: &str) -> Result<Vec<ConceptName>> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT STR, TTY, RXAUI FROM RXNCONSO \
                 WHERE RXCUI = ?1 AND LAT = 'ENG' ORDER BY RXAUI",
            )
            .map_err(|err| query_error("rxnorm::names", rxcui, err))?;
        let rows = stmt
            .query_map(params![rxcui], |row| {
                Ok(ConceptName {
                    name: row.get(0)?,
                    tty: row.get(1)?,
                    rxaui: row.get(2)?,
                })
            })
            .map_err(|err| query_error("rxnorm::names", rxcui, err))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| query_error("rxnorm::names", rxcui, err))
    }

    /// All term types recorded for a concept.
    pub fn term_types(&self, rxcui: &str) -> Result<BTreeSet<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT DISTINCT TTY FROM RXNCONSO WHERE RXCUI = ?1")
            .map_err(|err| query_error("rxnorm::term_types", rxcui, err))?;
        let rows = stmt
            .query_map(params![rxcui], |row| row.get::<_, String>(0))
            .map_err(|err| query_error("rxnorm::term_types", rxcui, err))?;
        rows.collect::<rusqlite::Result<BTreeSet<_>>>()
            .map_err(|err| query_error("rxnorm::term_types", rxcui, err))
    }

    /// The RXCUI an NDC most often maps to; ties go to the smallest RXCUI.
    pub fn rxcui_for_ndc(&self, ndc: &str) -> Result<Key> {
        let rxcui: Option<String> = self
            .conn
            .query_row(
                "SELECT RXCUI FROM NDC WHERE NDC = ?1 \
                 GROUP BY RXCUI ORDER BY COUNT(*) DESC, RXCUI ASC LIMIT 1",
                params![ndc],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| query_error("rxnorm::rxcui_for_ndc", ndc, err))?;

        match rxcui {
            Some(rxcui) => {
                debug!(ndc, rxcui = %rxcui, "resolved NDC");
                Ok(Key::new(rxcui))
            }
            None => Err(Error::not_found(ndc)
                .with_operation("rxnorm::rxcui_for_ndc")
                .with_context("table", "NDC")),
        }
    }
}

impl BackingStore for RxNormStore {
    fn attributes_of(&self, id: &Key) -> Result<Attributes> {
        let names = self.names(id.as_str())?;
        let Some(preferred) = preferred_name(&names) else {
            return Err(Error::not_found(id.as_str())
                .with_operation("rxnorm::attributes_of")
                .with_context("table", "RXNCONSO"));
        };
        Ok(Attributes::labeled(preferred.display()).with_shape(shape_for_tty(&preferred.tty)))
    }

    fn relations_of(&self, id: &Key) -> Result<Vec<Relation>> {
        let rxcui = id.as_str();
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT DISTINCT RXCUI2, RELA FROM RXNREL \
                 WHERE RXCUI1 = ?1 AND RXCUI2 IS NOT NULL AND RELA IS NOT NULL AND RELA != ''",
            )
            .map_err(|err| query_error("rxnorm::relations_of", rxcui, err))?;
        let rows = stmt
            .query_map(params![rxcui], |row| {
                Ok(Relation::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|err| query_error("rxnorm::relations_of", rxcui, err))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| query_error("rxnorm::relations_of", rxcui, err))
    }

    fn relations_between(&self, from: &Key, to: &Key) -> Result<Vec<String>> {
        let rxcui = from.as_str();
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT DISTINCT RELA FROM RXNREL \
                 WHERE RXCUI1 = ?1 AND RXCUI2 = ?2 AND RELA IS NOT NULL AND RELA != '' \
                 ORDER BY RELA",
            )
            .map_err(|err| query_error("rxnorm::relations_between", rxcui, err))?;
        let rows = stmt
            .query_map(params![rxcui, to.as_str()], |row| row.get::<_, String>(0))
            .map_err(|err| query_error("rxnorm::relations_between", rxcui, err))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| query_error("rxnorm::relations_between", rxcui, err))
    }
}
