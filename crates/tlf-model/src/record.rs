use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the flat rendering-pipeline export. Values are kept verbatim;
/// trailing whitespace and quoting are significant to later stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// `sect_num` column, may be empty.
    pub section_number: String,
    /// `sect_ttl` column, may be empty.
    pub section_title: String,
    /// Producing program name.
    pub program: String,
    /// Program invocation suffix.
    pub suffix: String,
    /// Attribute name (`parm`/`param` column), free case and spacing.
    pub name: String,
    /// Attribute value, verbatim. An empty CSV cell loads as an empty string.
    pub value: String,
}

impl AttributeRow {
    /// True when this row opens a new output. The comparison intentionally
    /// skips trimming so that a padded name like `"outfile "` does not start
    /// a group even though the pivoter would still map it.
    pub fn is_sequence_marker(&self) -> bool {
        self.name.eq_ignore_ascii_case("outfile")
    }
}

/// An ordered run of rows belonging to one output. The first row is always
/// the `outfile` marker that opened the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGroup {
    /// 1-based position of the group in the export.
    pub sequence: u32,
    pub rows: Vec<AttributeRow>,
}

/// Kind of output as classified from the `title4` banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtifactType {
    Table,
    Listing,
    Figure,
}

impl ArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Table => "Table",
            ArtifactType::Listing => "Listing",
            ArtifactType::Figure => "Figure",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtifactType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Table" => Ok(ArtifactType::Table),
            "Listing" => Ok(ArtifactType::Listing),
            "Figure" => Ok(ArtifactType::Figure),
            _ => Err(format!("Unknown artifact type: {}", s)),
        }
    }
}

const FOOTNOTE_NAMES: [&str; 9] = [
    "footnote1",
    "footnote2",
    "footnote3",
    "footnote4",
    "footnote5",
    "footnote6",
    "footnote7",
    "footnote8",
    "footnote9",
];

/// Attribute names the pivoter recognizes. Parsing trims and lowercases the
/// raw name; anything else (including `title3`, which the index sheet never
/// carried) is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Outfile,
    TocNumber,
    OutType,
    AzSolid,
    Title1,
    Title2,
    Title4,
    Title5,
    Title6,
    Title7,
    /// Footnote slot, 1 through 9.
    Footnote(u8),
}

impl AttributeKey {
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "outfile" => Some(AttributeKey::Outfile),
            "tocnumber" => Some(AttributeKey::TocNumber),
            "outtype" => Some(AttributeKey::OutType),
            "azsolid" => Some(AttributeKey::AzSolid),
            "title1" => Some(AttributeKey::Title1),
            "title2" => Some(AttributeKey::Title2),
            "title4" => Some(AttributeKey::Title4),
            "title5" => Some(AttributeKey::Title5),
            "title6" => Some(AttributeKey::Title6),
            "title7" => Some(AttributeKey::Title7),
            "footnote1" => Some(AttributeKey::Footnote(1)),
            "footnote2" => Some(AttributeKey::Footnote(2)),
            "footnote3" => Some(AttributeKey::Footnote(3)),
            "footnote4" => Some(AttributeKey::Footnote(4)),
            "footnote5" => Some(AttributeKey::Footnote(5)),
            "footnote6" => Some(AttributeKey::Footnote(6)),
            "footnote7" => Some(AttributeKey::Footnote(7)),
            "footnote8" => Some(AttributeKey::Footnote(8)),
            "footnote9" => Some(AttributeKey::Footnote(9)),
            _ => None,
        }
    }

    /// Canonical spelling as it appears in the index sheet headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Outfile => "OUTFILE",
            AttributeKey::TocNumber => "tocnumber",
            AttributeKey::OutType => "outtype",
            AttributeKey::AzSolid => "azsolid",
            AttributeKey::Title1 => "title1",
            AttributeKey::Title2 => "title2",
            AttributeKey::Title4 => "title4",
            AttributeKey::Title5 => "title5",
            AttributeKey::Title6 => "title6",
            AttributeKey::Title7 => "title7",
            AttributeKey::Footnote(n) => FOOTNOTE_NAMES[usize::from(n - 1)],
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed column order of the index sheet. `Core` is a reserved review column
/// and is always written empty; `title3` is absent on purpose.
pub const INDEX_COLUMNS: [&str; 26] = [
    "sect_num",
    "sect_ttl",
    "outtype",
    "azsolid",
    "Core",
    "tocnumber",
    "Output Type (Table, Listing, Figure)",
    "Title",
    "PROGRAM",
    "SUFFIX",
    "OUTFILE",
    "title1",
    "title2",
    "title4",
    "title5",
    "title6",
    "title7",
    "footnote1",
    "footnote2",
    "footnote3",
    "footnote4",
    "footnote5",
    "footnote6",
    "footnote7",
    "footnote8",
    "footnote9",
];

/// The wide, per-output record produced by the pivoter and finished by the
/// deriver. Pivoted slots are `None` when the attribute never appeared in
/// the group or its last value was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// 1-based group sequence this record came from.
    pub sequence: u32,
    pub section_number: String,
    pub section_title: String,
    pub program: String,
    pub suffix: String,
    pub outfile: Option<String>,
    pub toc_number: Option<String>,
    pub out_type: Option<String>,
    pub az_solid: Option<String>,
    pub title1: Option<String>,
    pub title2: Option<String>,
    pub title4: Option<String>,
    pub title5: Option<String>,
    pub title6: Option<String>,
    pub title7: Option<String>,
    pub footnotes: [Option<String>; 9],
    /// Classified from `title4` by the deriver.
    pub artifact_type: Option<ArtifactType>,
    /// Display title extracted from `title5` by the deriver; empty when
    /// underivable.
    pub title: String,
}

impl OutputRecord {
    pub fn new(
        sequence: u32,
        section_number: impl Into<String>,
        section_title: impl Into<String>,
        program: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        OutputRecord {
            sequence,
            section_number: section_number.into(),
            section_title: section_title.into(),
            program: program.into(),
            suffix: suffix.into(),
            ..OutputRecord::default()
        }
    }

    /// Assign a pivoted attribute slot. Empty values store `None`, and a
    /// later assignment always replaces an earlier one, so a trailing blank
    /// row erases the slot.
    pub fn set_attribute(&mut self, key: AttributeKey, value: &str) {
        let slot = match key {
            AttributeKey::Outfile => &mut self.outfile,
            AttributeKey::TocNumber => &mut self.toc_number,
            AttributeKey::OutType => &mut self.out_type,
            AttributeKey::AzSolid => &mut self.az_solid,
            AttributeKey::Title1 => &mut self.title1,
            AttributeKey::Title2 => &mut self.title2,
            AttributeKey::Title4 => &mut self.title4,
            AttributeKey::Title5 => &mut self.title5,
            AttributeKey::Title6 => &mut self.title6,
            AttributeKey::Title7 => &mut self.title7,
            AttributeKey::Footnote(n) => &mut self.footnotes[usize::from(n - 1)],
        };
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// Footnote slot by 1-based number; out-of-range numbers yield `None`.
    pub fn footnote(&self, n: u8) -> Option<&str> {
        self.footnotes
            .get(usize::from(n).wrapping_sub(1))
            .and_then(|slot| slot.as_deref())
    }

    /// Duplicate-detection key for program ownership. Both halves default to
    /// empty, so records with neither program nor suffix all share `"||"`.
    pub fn ownership_key(&self) -> String {
        format!("{}||{}", self.program, self.suffix)
    }

    /// Values projected in [`INDEX_COLUMNS`] order, missing slots as empty
    /// strings.
    pub fn index_values(&self) -> Vec<String> {
        let mut values = vec![
            self.section_number.clone(),
            self.section_title.clone(),
            self.out_type.clone().unwrap_or_default(),
            self.az_solid.clone().unwrap_or_default(),
            String::new(),
            self.toc_number.clone().unwrap_or_default(),
            self.artifact_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            self.title.clone(),
            self.program.clone(),
            self.suffix.clone(),
            self.outfile.clone().unwrap_or_default(),
            self.title1.clone().unwrap_or_default(),
            self.title2.clone().unwrap_or_default(),
            self.title4.clone().unwrap_or_default(),
            self.title5.clone().unwrap_or_default(),
            self.title6.clone().unwrap_or_default(),
            self.title7.clone().unwrap_or_default(),
        ];
        values.extend(
            self.footnotes
                .iter()
                .map(|slot| slot.clone().unwrap_or_default()),
        );
        values
    }

    /// Header/value pairs of the projected index row, for field-level scans.
    pub fn index_fields(&self) -> Vec<(&'static str, String)> {
        INDEX_COLUMNS.iter().copied().zip(self.index_values()).collect()
    }
}
