use std::path::PathBuf;
use std::str::FromStr;

use super::config::Config;
use super::error::SubrunError;

const DL1_PREFIX: &str = "dl1_LST-1.Run";
const DL1_SUFFIX: &str = ".h5";

/// Run and sub-run indices encoded in a DL1 file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubrunId {
    pub run_number: u32,
    pub subrun_index: u32,
}

impl SubrunId {
    /// Construct the DL1 file name using the LST-1 convention
    pub fn file_name(&self) -> String {
        format!(
            "{}{:0>5}.{:0>4}{}",
            DL1_PREFIX, self.run_number, self.subrun_index, DL1_SUFFIX
        )
    }
}

impl FromStr for SubrunId {
    type Err = SubrunError;

    /// Parse a `dl1_LST-1.RunXXXXX.YYYY.h5` file name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix(DL1_PREFIX)
            .and_then(|rest| rest.strip_suffix(DL1_SUFFIX))
            .ok_or_else(|| SubrunError::BadFileName(s.to_string()))?;
        let (run_str, subrun_str) = body
            .split_once('.')
            .ok_or_else(|| SubrunError::BadFileName(s.to_string()))?;
        Ok(SubrunId {
            run_number: run_str.parse()?,
            subrun_index: subrun_str.parse()?,
        })
    }
}

/// One DL1 sub-run file found on disk.
#[derive(Debug, Clone)]
pub struct SubrunFile {
    pub path: PathBuf,
    pub id: SubrunId,
}

/// Collect the DL1 sub-run files of the configured run range, sorted by run and sub-run.
pub fn discover_subruns(config: &Config) -> Result<Vec<SubrunFile>, SubrunError> {
    let mut files: Vec<SubrunFile> = Vec::new();
    for item in config.dl1_path.read_dir()? {
        let item_path = item?.path();
        let file_name = match item_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if !file_name.starts_with(DL1_PREFIX) || !file_name.ends_with(DL1_SUFFIX) {
            continue;
        }
        let id = SubrunId::from_str(file_name)?;
        if config.is_run_selected(id.run_number) {
            files.push(SubrunFile {
                path: item_path,
                id,
            });
        }
    }

    if files.is_empty() {
        return Err(SubrunError::NoMatchingFiles);
    }

    files.sort_by_key(|file| file.id);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_name() {
        let id = SubrunId::from_str("dl1_LST-1.Run02969.0042.h5").unwrap();
        assert_eq!(id.run_number, 2969);
        assert_eq!(id.subrun_index, 42);
    }

    #[test]
    fn test_file_name_round_trip() {
        let id = SubrunId {
            run_number: 3095,
            subrun_index: 7,
        };
        assert_eq!(id.file_name(), "dl1_LST-1.Run03095.0007.h5");
        assert_eq!(SubrunId::from_str(&id.file_name()).unwrap(), id);
    }

    #[test]
    fn test_reject_foreign_file_names() {
        assert!(matches!(
            SubrunId::from_str("muons_LST-1.Run02969.0042.h5"),
            Err(SubrunError::BadFileName(_))
        ));
        assert!(matches!(
            SubrunId::from_str("dl1_LST-1.Run02969.h5"),
            Err(SubrunError::BadFileName(_))
        ));
        assert!(matches!(
            SubrunId::from_str("dl1_LST-1.Runabcde.0042.h5"),
            Err(SubrunError::ParsingError(_))
        ));
    }
}
