use crate::errors::TableError;
use crate::table::{Table, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ID_MULTIDATA: &str = "id_multidata";
pub const NAME: &str = "name";
pub const ENTRY_NAME: &str = "entry_name";
pub const IS_COMPLEX: &str = "is_complex";
pub const RECEPTOR: &str = "receptor";
pub const SECRETED: &str = "secreted";

/// Column order of the `multidata_expanded` view
pub const EXPANDED_COLUMNS: [&str; 6] = [ID_MULTIDATA, NAME, ENTRY_NAME, IS_COMPLEX, RECEPTOR, SECRETED];

/// Identifier of a multidata entity
///
/// Integer-like inputs convert losslessly; strings parse as decimal integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MultidataId(i64);

impl MultidataId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MultidataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MultidataId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for MultidataId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl From<u32> for MultidataId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl TryFrom<u64> for MultidataId {
    type Error = TableError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        i64::try_from(id)
            .map(Self)
            .map_err(|_| TableError::InvalidMultidataId {
                value: id.to_string(),
            })
    }
}

impl FromStr for MultidataId {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TableError::InvalidMultidataId {
                value: s.to_string(),
            })
    }
}

/// Inputs accepted wherever a multidata id is expected
///
/// Integers convert losslessly or fail; strings must hold a decimal integer.
pub trait IntoMultidataId {
    fn into_multidata_id(self) -> Result<MultidataId, TableError>;
}

impl IntoMultidataId for MultidataId {
    fn into_multidata_id(self) -> Result<MultidataId, TableError> {
        Ok(self)
    }
}

macro_rules! lossless_multidata_id {
    ($($t:ty),*) => {
        $(impl IntoMultidataId for $t {
            fn into_multidata_id(self) -> Result<MultidataId, TableError> {
                Ok(MultidataId::from(self))
            }
        })*
    };
}

lossless_multidata_id!(i64, i32, u32);

impl IntoMultidataId for u64 {
    fn into_multidata_id(self) -> Result<MultidataId, TableError> {
        MultidataId::try_from(self)
    }
}

impl IntoMultidataId for &str {
    fn into_multidata_id(self) -> Result<MultidataId, TableError> {
        self.parse()
    }
}

impl IntoMultidataId for &String {
    fn into_multidata_id(self) -> Result<MultidataId, TableError> {
        self.parse()
    }
}

impl IntoMultidataId for String {
    fn into_multidata_id(self) -> Result<MultidataId, TableError> {
        self.parse()
    }
}

/// Base multidata row: a protein or a complex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multidata {
    pub id_multidata: i64,
    pub name: String,
    pub receptor: bool,
    pub secreted: bool,
    pub is_complex: bool,
}

impl Multidata {
    pub fn protein(id_multidata: i64, name: impl Into<String>) -> Self {
        Self {
            id_multidata,
            name: name.into(),
            receptor: false,
            secreted: false,
            is_complex: false,
        }
    }

    pub fn complex(id_multidata: i64, name: impl Into<String>) -> Self {
        Self {
            is_complex: true,
            ..Self::protein(id_multidata, name)
        }
    }

    pub fn receptor(mut self) -> Self {
        self.receptor = true;
        self
    }

    pub fn secreted(mut self) -> Self {
        self.secreted = true;
        self
    }
}

/// Protein details attached to a non-complex multidata row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    pub id_protein: i64,
    pub entry_name: String,
    pub protein_name: Option<String>,
    pub protein_multidata_id: i64,
}

impl Protein {
    pub fn new(id_protein: i64, entry_name: impl Into<String>, protein_multidata_id: i64) -> Self {
        Self {
            id_protein,
            entry_name: entry_name.into(),
            protein_name: None,
            protein_multidata_id,
        }
    }
}

/// Complex details attached to a complex multidata row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub id_complex: i64,
    pub complex_multidata_id: i64,
    pub pdb_structure: Option<String>,
}

impl Complex {
    pub fn new(id_complex: i64, complex_multidata_id: i64) -> Self {
        Self {
            id_complex,
            complex_multidata_id,
            pdb_structure: None,
        }
    }
}

/// One `multidata_expanded` row in `EXPANDED_COLUMNS` order
pub fn expanded_row(multidata: &Multidata, entry_name: Option<&str>) -> Vec<Value> {
    vec![
        multidata.id_multidata.into(),
        multidata.name.clone().into(),
        entry_name.into(),
        multidata.is_complex.into(),
        multidata.receptor.into(),
        multidata.secreted.into(),
    ]
}

/// Build a `multidata_expanded` table from `(multidata, entry_name)` pairs
pub fn to_expanded_table(entries: &[(Multidata, Option<&str>)]) -> Table {
    Table::from_parts(
        EXPANDED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        entries
            .iter()
            .map(|(multidata, entry_name)| expanded_row(multidata, *entry_name))
            .collect(),
    )
}
