use std::path::PathBuf;

use path_slash::PathBufExt as _;

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Converts a drive qualified DOS path such as `C:\Games\Data` into a path
/// relative to the extraction root, using the platform separator.
///
/// Everything up to and including the first `:` is dropped, then exactly one
/// leading separator. Both `\` and `/` are accepted as separators.
pub fn drive_relative_to_platform(path: &str) -> Result<PathBuf, super::Error> {
    let (_drive, rest) = path
        .split_once(':')
        .ok_or_else(|| super::Error::NotDriveQualified(path.to_owned()))?;
    let rest = rest.strip_prefix(is_separator).unwrap_or(rest);
    Ok(PathBuf::from_slash(rest.replace('\\', "/")))
}

#[cfg(test)]
mod test {
    use super::drive_relative_to_platform;
    use crate::Error;
    use std::path::{Path, PathBuf};

    fn translate(path: &str) -> PathBuf {
        drive_relative_to_platform(path).unwrap()
    }

    #[test]
    fn test_backslashes() {
        assert_eq!(
            translate("C:\\Games\\Data\\Sounds"),
            Path::new("Games").join("Data").join("Sounds")
        );
        assert_eq!(translate("D:\\x"), Path::new("x"));
    }

    #[test]
    fn test_forward_and_mixed_slashes() {
        let expected = Path::new("Games").join("Data").join("Sounds");
        assert_eq!(translate("C:/Games/Data/Sounds"), expected);
        assert_eq!(translate("C:\\Games/Data\\Sounds"), expected);
    }

    #[test]
    fn test_drive_root() {
        assert_eq!(translate("C:\\"), PathBuf::new());
        assert_eq!(translate("C:"), PathBuf::new());
    }

    #[test]
    fn test_no_leading_separator() {
        assert_eq!(translate("C:Games\\Data"), Path::new("Games").join("Data"));
    }

    #[test]
    fn test_only_one_separator_stripped() {
        assert!(translate("C:\\\\Games").has_root());
    }

    #[test]
    fn test_split_on_first_colon() {
        assert_eq!(translate("C:\\a:b\\c"), Path::new("a:b").join("c"));
        assert_eq!(translate("CDROM:\\x"), Path::new("x"));
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(translate("C:\\Games\\"), Path::new("Games"));
    }

    #[test]
    fn test_not_drive_qualified() {
        assert!(matches!(
            drive_relative_to_platform("\\Games\\Data"),
            Err(Error::NotDriveQualified(p)) if p == "\\Games\\Data"
        ));
    }
}
