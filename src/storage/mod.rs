//! SQLite-backed sheet store.
//!
//! The store is the only persistence surface the core talks to: cell text
//! plus per-axis size-override deltas, one synchronous connection, one
//! upsert per commit. Callers treat every failure as "value absent" (the
//! session logs and degrades; see `session`).

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::layout::Axis;

/// Sheet database: sparse cells and sparse per-axis size deltas.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a sheet database at the given path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory sheet database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    fn init(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cells (
                col   INTEGER NOT NULL,
                row   INTEGER NOT NULL,
                value TEXT NOT NULL,
                PRIMARY KEY (col, row)
            );
            CREATE TABLE IF NOT EXISTS cols (
                col_index INTEGER PRIMARY KEY,
                delta     REAL NOT NULL
            );
            CREATE TABLE IF NOT EXISTS rows (
                row_index INTEGER PRIMARY KEY,
                delta     REAL NOT NULL
            );
            "#,
        )
    }

    /// Insert or update one size-override delta.
    pub fn upsert_size_override(&self, axis: Axis, index: u32, delta: f32) -> Result<()> {
        let sql = match axis {
            Axis::Col => {
                "INSERT INTO cols (col_index, delta) VALUES (?1, ?2)
                 ON CONFLICT(col_index) DO UPDATE SET delta = excluded.delta"
            }
            Axis::Row => {
                "INSERT INTO rows (row_index, delta) VALUES (?1, ?2)
                 ON CONFLICT(row_index) DO UPDATE SET delta = excluded.delta"
            }
        };
        self.conn.execute(sql, params![index, delta])?;
        Ok(())
    }

    /// All persisted `(index, delta)` pairs for one axis.
    pub fn read_all_size_overrides(&self, axis: Axis) -> Result<Vec<(u32, f32)>> {
        let sql = match axis {
            Axis::Col => "SELECT col_index, delta FROM cols",
            Axis::Row => "SELECT row_index, delta FROM rows",
        };
        let mut stmt = self.conn.prepare(sql)?;
        let pairs = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, f32>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(pairs)
    }

    /// Stored text of a cell, `None` when the cell was never written.
    pub fn get_cell_value(&self, col: u32, row: u32) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM cells WHERE col = ?1 AND row = ?2",
                params![col, row],
                |r| r.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a cell's text, creating the cell on first write.
    ///
    /// Writing an empty string overwrites rather than deletes.
    pub fn set_cell_value(&self, col: u32, row: u32, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO cells (col, row, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(col, row) DO UPDATE SET value = excluded.value",
            params![col, row, value],
        )?;
        Ok(())
    }

    /// Dump the whole database as JSON: `{cols, rows, cells}`, each entry
    /// carrying its index/coordinates and value. This is the CLI's output
    /// format.
    pub fn dump(&self) -> Result<serde_json::Value> {
        let col_overrides: Vec<serde_json::Value> = self
            .read_all_size_overrides(Axis::Col)?
            .into_iter()
            .map(|(i, d)| serde_json::json!({ "index": i, "delta": d }))
            .collect();
        let row_overrides: Vec<serde_json::Value> = self
            .read_all_size_overrides(Axis::Row)?
            .into_iter()
            .map(|(i, d)| serde_json::json!({ "index": i, "delta": d }))
            .collect();
        let cells: Vec<serde_json::Value> = self
            .query_cells_in_range(0..u32::MAX, 0..u32::MAX)?
            .into_iter()
            .map(|(col, row, value)| serde_json::json!({ "col": col, "row": row, "value": value }))
            .collect();

        Ok(serde_json::json!({
            "cols": col_overrides,
            "rows": row_overrides,
            "cells": cells,
        }))
    }

    /// All cells inside a half-open `(col, row)` range, for rendering the
    /// visible viewport.
    pub fn query_cells_in_range(
        &self,
        cols: std::ops::Range<u32>,
        rows: std::ops::Range<u32>,
    ) -> Result<Vec<(u32, u32, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT col, row, value FROM cells
             WHERE col >= ?1 AND col < ?2 AND row >= ?3 AND row < ?4
             ORDER BY row, col",
        )?;
        let cells = stmt
            .query_map(params![cols.start, cols.end, rows.start, rows.end], |r| {
                Ok((r.get(0)?, r.get(1)?, r.get(2)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(cells)
    }
}
