//! Goto mode: resolve an address and hand it to the editor

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::editor::Editor;
use crate::error::{Error, Result};
use crate::matcher::FileMatchGroup;

use super::address::Address;

/// A resolved address: where the editor should jump to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line_number: usize,
}

/// Find the item at `address` with a single forward pass over the scan.
///
/// Pulling stops as soon as the item has been found, so files after it are
/// never opened. An address that matches nothing drains the whole scan
/// before the lookup error is returned, so a read error anywhere in the tree
/// takes precedence over it.
pub fn locate<I>(groups: I, address: Address) -> Result<Location>
where
    I: IntoIterator<Item = Result<FileMatchGroup>>,
{
    let mut groups = groups.into_iter();
    for group in groups.by_ref() {
        let group = group?;
        if group.group_index != address.group {
            continue;
        }
        if let Some(item) = group.item(address.item) {
            return Ok(Location {
                line_number: item.line_number,
                path: group.path,
            });
        }
        break;
    }
    for group in groups {
        group?;
    }
    Err(Error::Lookup { address })
}

/// Resolve `address` and open it in `editor`, waiting for the editor to exit.
pub fn goto<I>(groups: I, address: Address, editor: &Editor) -> Result<ExitStatus>
where
    I: IntoIterator<Item = Result<FileMatchGroup>>,
{
    let location = locate(groups, address)?;
    editor.open(&location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TodoItem;
    use std::cell::Cell;

    fn group(index: usize, path: &str, lines: &[usize]) -> FileMatchGroup {
        FileMatchGroup {
            group_index: index,
            path: PathBuf::from(path),
            items: lines
                .iter()
                .enumerate()
                .map(|(i, &line)| TodoItem {
                    line_number: line,
                    content: format!("TODO at {}", line),
                    item_index: i + 1,
                })
                .collect(),
        }
    }

    fn sample() -> Vec<Result<FileMatchGroup>> {
        vec![Ok(group(1, "a.txt", &[2])), Ok(group(2, "b/c.txt", &[1, 2]))]
    }

    #[test]
    fn test_locate_resolves_line_number_not_item_index() {
        let loc = locate(vec![Ok(group(1, "a.txt", &[7, 9]))], Address::new(1, 2)).unwrap();
        assert_eq!(loc.line_number, 9);
    }

    #[test]
    fn test_locate_every_valid_address() {
        let groups: Vec<_> = sample().into_iter().map(|g| g.unwrap()).collect();
        for g in &groups {
            for item in &g.items {
                let loc = locate(sample(), Address::new(g.group_index, item.item_index)).unwrap();
                assert_eq!(loc.path, g.path);
                assert_eq!(loc.line_number, item.line_number);
            }
        }
    }

    #[test]
    fn test_locate_first() {
        let loc = locate(sample(), Address::FIRST).unwrap();
        assert_eq!(
            loc,
            Location {
                path: "a.txt".into(),
                line_number: 2
            }
        );
    }

    #[test]
    fn test_out_of_range_group_drains_scan() {
        let pulled = Cell::new(0);
        let groups = sample().into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let err = locate(groups, Address::new(999, 1)).unwrap_err();
        assert!(matches!(err, Error::Lookup { address } if address == Address::new(999, 1)));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_out_of_range_item() {
        let err = locate(sample(), Address::new(1, 2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not match '1.2' to an indexed location"
        );
    }

    #[test]
    fn test_stops_pulling_after_target() {
        let pulled = Cell::new(0);
        let groups = sample().into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        locate(groups, Address::new(1, 1)).unwrap();
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_empty_scan_first_is_lookup_error() {
        let err = locate(Vec::<Result<FileMatchGroup>>::new(), Address::FIRST).unwrap_err();
        assert!(matches!(err, Error::Lookup { .. }));
    }

    #[test]
    fn test_scan_error_wins_over_lookup() {
        let groups = vec![
            Ok(group(1, "a.txt", &[2])),
            Err(Error::Io(std::io::Error::other("disk gone"))),
        ];
        let err = locate(groups, Address::new(5, 1)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_scan_error_wins_over_missing_item() {
        let groups = vec![
            Ok(group(1, "a.txt", &[2])),
            Err(Error::Io(std::io::Error::other("disk gone"))),
        ];
        let err = locate(groups, Address::new(1, 99)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_out_of_range_item_drains_scan() {
        let pulled = Cell::new(0);
        let groups = sample().into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let err = locate(groups, Address::new(1, 99)).unwrap_err();
        assert!(matches!(err, Error::Lookup { address } if address == Address::new(1, 99)));
        assert_eq!(pulled.get(), 2);
    }
}
