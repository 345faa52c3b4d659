/// Error codes with category prefix
///
/// Categories:
/// - VAL: Filter / dimension validation errors
/// - CAT: Catalog loading errors
/// - CFG: Configuration parsing/validation
/// - IO: File system operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (VAL001-VAL099)
    /// Unknown filter key
    Val001,
    /// Unknown dimension
    Val002,
    /// Value outside the fixed enumeration
    Val003,

    // Catalog errors (CAT001-CAT099)
    /// Catalog file not found
    Cat001,
    /// Catalog file is not valid JSON
    Cat002,
    /// No entry with the requested software id
    Cat003,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // I/O errors (IO001-IO099)
    /// Generic I/O failure
    Io001,
    /// Permission denied
    Io002,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "VAL001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
            ErrorCode::Cat001 => "CAT001",
            ErrorCode::Cat002 => "CAT002",
            ErrorCode::Cat003 => "CAT003",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "The filter key is not one of the known filter fields",
            ErrorCode::Val002 => "The dimension is not one of the filterable dimensions",
            ErrorCode::Val003 => "The value is not part of the fixed enumeration for this field",
            ErrorCode::Cat001 => "The catalog file does not exist",
            ErrorCode::Cat002 => "The catalog file could not be parsed as a list of entries",
            ErrorCode::Cat003 => "The catalog has no software with the requested id",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Io001 => "A file system operation failed",
            ErrorCode::Io002 => "Permission denied when accessing the file",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "1. Check the spelling of the filter key\n2. Use one of: search, organization, category, environment, prerogatives, sort",
            ErrorCode::Val002 => "1. Check the spelling of the dimension\n2. Use one of: search, organization, category, environment, prerogatives",
            ErrorCode::Val003 => "1. Check the accepted values listed in the message\n2. Values are case-sensitive",
            ErrorCode::Cat001 => "1. Verify the catalog path\n2. Pass --catalog or set SILL_CATALOG\n3. Set `catalog` in ~/.sill/config.toml",
            ErrorCode::Cat002 => "1. Ensure the file contains a JSON array of entries\n2. Check that softwareId and softwareName are present",
            ErrorCode::Cat003 => "1. Run `sill search --simple` to list ids\n2. Check that --catalog points at the expected file",
            ErrorCode::Cfg001 => "1. Check the configuration file syntax\n2. Remove unknown sort keys\n3. Delete the file to fall back to defaults",
            ErrorCode::Io001 => "1. Verify the path is correct\n2. Try the operation again",
            ErrorCode::Io002 => "1. Check file permissions\n2. Verify ownership of the file",
        }
    }

    /// 全エラーコードを取得
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::Val001,
            ErrorCode::Val002,
            ErrorCode::Val003,
            ErrorCode::Cat001,
            ErrorCode::Cat002,
            ErrorCode::Cat003,
            ErrorCode::Cfg001,
            ErrorCode::Io001,
            ErrorCode::Io002,
        ]
    }
}
