pub mod discovery;
pub mod error;
pub mod reader;

pub use discovery::{InputPaths, discover_inputs};
pub use error::IngestError;
pub use reader::{RawTables, load_raw_tables, read_customers, read_products, read_transactions};
