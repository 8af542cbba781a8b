//! Output writers for the TLF index toolchain.
//!
//! - **Index sheet**: the fixed-column CSV review copy
//! - **Normalized export**: the raw export re-emitted after quote cleanup
//! - **Batch XML**: the section-grouped manifest for the PDF builder
//! - **Run script**: `%runpgm` execution lines per producing program

mod batch_xml;
mod common;
mod index_csv;
mod run_script;

pub use batch_xml::{
    BatchXmlOptions, check_manifest_encoding, render_batch_xml, write_batch_xml,
};
pub use index_csv::{EXPORT_COLUMNS, write_index_csv, write_normalized_export};
pub use run_script::{ProgramUsage, collect_program_usage, generate_run_script, write_run_script};
