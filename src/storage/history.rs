//! History storage: record, load, list, favorite, and delete scans.

use jiff::Timestamp;
use rusqlite::{Row, params};
use uuid::Uuid;

use crate::model::{ClassifiedKind, HistoryEntry};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Records a scan. Fails if an entry with the same id already exists.
    pub fn record(&self, entry: &HistoryEntry) -> Result<()> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO scan (id, value, kind, symbology, scanned_at, favorite)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.id.to_string(),
                &entry.value,
                entry.kind.label(),
                &entry.symbology,
                entry.scanned_at.to_string(),
                entry.favorite,
            ],
        )?;
        if inserted == 0 {
            return Err(StorageError::EntryAlreadyExists(entry.id));
        }
        Ok(())
    }

    /// Loads a single entry.
    pub fn load(&self, id: Uuid) -> Result<HistoryEntry> {
        let row = self.conn.query_row(
            "SELECT id, value, kind, symbology, scanned_at, favorite
             FROM scan WHERE id = ?1",
            [id.to_string()],
            map_row,
        );
        match row {
            Ok(entry) => entry,
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::EntryNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all entries, newest first.
    pub fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.select("SELECT id, value, kind, symbology, scanned_at, favorite
                     FROM scan ORDER BY scanned_at DESC")
    }

    /// Lists favorite entries only, newest first.
    pub fn favorites(&self) -> Result<Vec<HistoryEntry>> {
        self.select(
            "SELECT id, value, kind, symbology, scanned_at, favorite
             FROM scan WHERE favorite = 1 ORDER BY scanned_at DESC",
        )
    }

    /// Sets an entry's favorite flag.
    pub fn set_favorite(&self, id: Uuid, favorite: bool) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE scan SET favorite = ?1 WHERE id = ?2",
            params![favorite, id.to_string()],
        )?;
        if rows == 0 {
            return Err(StorageError::EntryNotFound(id));
        }
        Ok(())
    }

    /// Deletes a single entry.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM scan WHERE id = ?1", [id.to_string()])?;
        if rows == 0 {
            return Err(StorageError::EntryNotFound(id));
        }
        Ok(())
    }

    /// Deletes all entries, returning how many were removed.
    pub fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM scan", [])?)
    }

    fn select(&self, sql: &str) -> Result<Vec<HistoryEntry>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], map_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row??);
        }
        Ok(entries)
    }
}

/// Deserializes one `scan` row.
///
/// Returns `Ok(Err(..))` for rows that are present but unreadable, so
/// the malformed-row error survives `rusqlite`'s own error channel.
fn map_row(row: &Row<'_>) -> rusqlite::Result<Result<HistoryEntry>> {
    let id_str: String = row.get(0)?;
    let value: String = row.get(1)?;
    let kind_label: String = row.get(2)?;
    let symbology: String = row.get(3)?;
    let scanned_at_str: String = row.get(4)?;
    let favorite: bool = row.get(5)?;

    Ok(build_entry(
        id_str,
        value,
        &kind_label,
        symbology,
        &scanned_at_str,
        favorite,
    ))
}

fn build_entry(
    id_str: String,
    value: String,
    kind_label: &str,
    symbology: String,
    scanned_at_str: &str,
    favorite: bool,
) -> Result<HistoryEntry> {
    let malformed = |reason: String| StorageError::MalformedRow {
        id: id_str.clone(),
        reason,
    };
    let id: Uuid = id_str
        .parse()
        .map_err(|e| malformed(format!("bad id: {e}")))?;
    let kind = ClassifiedKind::from_label(kind_label)
        .ok_or_else(|| malformed(format!("unknown kind {kind_label:?}")))?;
    let scanned_at: Timestamp = scanned_at_str
        .parse()
        .map_err(|e| malformed(format!("bad timestamp: {e}")))?;
    Ok(HistoryEntry {
        id,
        value,
        kind,
        symbology,
        scanned_at,
        favorite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("glyph")).unwrap();
        (dir, storage)
    }

    fn sample_entry(value: &str, kind: ClassifiedKind) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4(),
            value: value.into(),
            kind,
            symbology: "qr".into(),
            scanned_at: Timestamp::now(),
            favorite: false,
        }
    }

    #[test]
    fn record_and_load() {
        let (_dir, storage) = test_storage();
        let entry = sample_entry("https://example.com", ClassifiedKind::Url);

        storage.record(&entry).unwrap();
        let loaded = storage.load(entry.id).unwrap();

        assert_eq!(loaded.id, entry.id);
        assert_eq!(loaded.value, entry.value);
        assert_eq!(loaded.kind, ClassifiedKind::Url);
        assert_eq!(loaded.symbology, "qr");
        assert!(!loaded.favorite);
    }

    #[test]
    fn record_duplicate_fails() {
        let (_dir, storage) = test_storage();
        let entry = sample_entry("hello", ClassifiedKind::PlainText);

        storage.record(&entry).unwrap();
        let err = storage.record(&entry).unwrap_err();

        assert!(matches!(err, StorageError::EntryAlreadyExists(_)));
    }

    #[test]
    fn load_nonexistent_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.load(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, StorageError::EntryNotFound(_)));
    }

    #[test]
    fn list_is_newest_first() {
        let (_dir, storage) = test_storage();

        let mut older = sample_entry("first", ClassifiedKind::PlainText);
        older.scanned_at = "2024-01-01T00:00:00Z".parse().unwrap();
        let mut newer = sample_entry("second", ClassifiedKind::PlainText);
        newer.scanned_at = "2024-06-01T00:00:00Z".parse().unwrap();

        storage.record(&older).unwrap();
        storage.record(&newer).unwrap();

        let listed = storage.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].value, "second");
        assert_eq!(listed[1].value, "first");
    }

    #[test]
    fn favorites_filters_and_set_favorite_round_trips() {
        let (_dir, storage) = test_storage();
        let plain = sample_entry("plain", ClassifiedKind::PlainText);
        let starred = sample_entry("tel:5551234567", ClassifiedKind::Phone);

        storage.record(&plain).unwrap();
        storage.record(&starred).unwrap();
        storage.set_favorite(starred.id, true).unwrap();

        let favorites = storage.favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, starred.id);
        assert!(favorites[0].favorite);

        storage.set_favorite(starred.id, false).unwrap();
        assert!(storage.favorites().unwrap().is_empty());
    }

    #[test]
    fn set_favorite_on_missing_entry_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.set_favorite(Uuid::new_v4(), true).unwrap_err();

        assert!(matches!(err, StorageError::EntryNotFound(_)));
    }

    #[test]
    fn delete_removes_entry() {
        let (_dir, storage) = test_storage();
        let entry = sample_entry("bye", ClassifiedKind::PlainText);

        storage.record(&entry).unwrap();
        storage.delete(entry.id).unwrap();

        assert!(matches!(
            storage.load(entry.id).unwrap_err(),
            StorageError::EntryNotFound(_)
        ));
    }

    #[test]
    fn clear_reports_count() {
        let (_dir, storage) = test_storage();
        storage
            .record(&sample_entry("a", ClassifiedKind::PlainText))
            .unwrap();
        storage
            .record(&sample_entry("b", ClassifiedKind::PlainText))
            .unwrap();

        assert_eq!(storage.clear().unwrap(), 2);
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn history_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("glyph");
        let entry = sample_entry("persisted", ClassifiedKind::PlainText);

        {
            let storage = Storage::new(&root).unwrap();
            storage.record(&entry).unwrap();
        }

        let storage = Storage::new(&root).unwrap();
        let loaded = storage.load(entry.id).unwrap();
        assert_eq!(loaded.value, "persisted");
    }
}
