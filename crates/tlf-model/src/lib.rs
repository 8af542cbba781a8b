pub mod error;
pub mod finding;
pub mod record;

pub use error::{Result, TlfError};
pub use finding::{Finding, FindingsReport, Severity};
pub use record::{
    ArtifactType, AttributeKey, AttributeRow, INDEX_COLUMNS, OutputGroup, OutputRecord,
};
