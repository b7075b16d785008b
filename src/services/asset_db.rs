use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use inky_palette::IndexedImage;

use crate::error::Result;
use crate::services::sink::ImageSink;

/// One row of the `images` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl StoredImage {
    /// Reinterpret the stored blob as palette indices.
    pub fn to_indexed(&self) -> Result<IndexedImage> {
        Ok(IndexedImage::new(self.data.clone(), self.width, self.height)?)
    }
}

/// SQLite asset database read by the display firmware.
pub struct AssetDb {
    conn: Connection,
}

impl AssetDb {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "Opened asset database");
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    // Image operations

    /// Drop and recreate the `images` table.
    pub fn reset_images(&self) -> Result<()> {
        self.conn.execute("DROP TABLE IF EXISTS images", [])?;
        self.conn.execute(
            "CREATE TABLE images(
                id TEXT PRIMARY KEY,
                width INT,
                height INT,
                data BLOB
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert an image, replacing any existing row with the same id.
    pub fn add_image(&self, id: &str, width: u32, height: u32, data: &[u8]) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO images (id, width, height, data) VALUES (?1, ?2, ?3, ?4)",
            params![id, width, height, data],
        )?;
        Ok(())
    }

    pub fn image(&self, id: &str) -> Result<Option<StoredImage>> {
        let image = self
            .conn
            .query_row(
                "SELECT id, width, height, data FROM images WHERE id = ?1",
                params![id],
                |row| {
                    Ok(StoredImage {
                        id: row.get(0)?,
                        width: row.get(1)?,
                        height: row.get(2)?,
                        data: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(image)
    }

    /// All image ids, sorted.
    pub fn image_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT id FROM images ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(ids)
    }
}

impl ImageSink for AssetDb {
    fn store(&mut self, name: &str, image: &IndexedImage) -> Result<()> {
        self.add_image(name, image.width(), image.height(), image.indices())
    }
}
