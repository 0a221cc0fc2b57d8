use serde::{Deserialize, Serialize};

/// Kind of a storage unit, integer-coded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum StorageType {
    /// Unclassified storage.
    #[default]
    Unknown,
    /// Fixed hard disk.
    HardDisk,
    /// Floppy disk.
    FloppyDisk,
    /// Optical media.
    Optical,
    /// Flash memory.
    Flash,
}

impl StorageType {
    /// The stable wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::HardDisk => 1,
            Self::FloppyDisk => 2,
            Self::Optical => 3,
            Self::Flash => 4,
        }
    }
}

impl From<i64> for StorageType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::HardDisk,
            2 => Self::FloppyDisk,
            3 => Self::Optical,
            4 => Self::Flash,
            _ => Self::Unknown,
        }
    }
}

impl From<StorageType> for i64 {
    fn from(kind: StorageType) -> Self {
        Self::from(kind.code())
    }
}

/// One storage unit of the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageUnitAttributes {
    /// Free-form description of this unit.
    pub info: Option<String>,
    /// Free-form identifier of this unit.
    pub id: Option<String>,
    /// Kind of storage.
    #[serde(rename = "type")]
    pub kind: Option<StorageType>,
    /// Whether the unit is writable.
    pub is_writable: Option<bool>,
    /// Total capacity in bytes.
    pub capacity: Option<u64>,
    /// Free bytes on the unit.
    pub available_capacity: Option<u64>,
    /// Whether the unit is removable. The wire name keeps the catalog's
    /// historical spelling, `isRemoveable`.
    pub is_removeable: Option<bool>,
}
