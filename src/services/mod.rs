pub mod asset_db;
pub mod batch;
pub mod header_writer;
pub mod importer;
pub mod sink;

pub use asset_db::{AssetDb, StoredImage};
pub use batch::BatchConverter;
pub use importer::{import_assets, ImportReport};
pub use sink::ImageSink;
