pub mod category;
pub mod row;
pub mod scale;
pub mod types;

pub use category::{extract_categories, normalize_category};
pub use row::{normalize_row, normalize_rows, parse_release_date};
pub use scale::LinearScale;
pub use types::{RawRecord, Row, ValueRange, Viewport, YearRange};
