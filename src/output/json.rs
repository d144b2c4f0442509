//! JSON output formatting

use std::io::{self, Write};

use crate::matcher::FileMatchGroup;
use crate::navigator::CountSummary;

use super::ScanOutput;

fn to_io(e: serde_json::Error) -> io::Error {
    io::Error::other(e)
}

/// Collects groups and writes them as one pretty-printed JSON array.
pub struct JsonListOutput<W> {
    out: W,
    groups: Vec<FileMatchGroup>,
}

impl JsonListOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonListOutput<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            groups: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanOutput for JsonListOutput<W> {
    fn output_group(&mut self, group: &FileMatchGroup) -> io::Result<()> {
        self.groups.push(group.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &CountSummary) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.groups).map_err(to_io)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}

/// Print count results as pretty-printed JSON to stdout.
pub fn print_count_json(summary: &CountSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(to_io)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TodoItem;
    use std::path::PathBuf;

    #[test]
    fn test_json_list_shape() {
        let group = FileMatchGroup {
            group_index: 1,
            path: PathBuf::from("a.txt"),
            items: vec![TodoItem {
                line_number: 2,
                content: "TODO fix this".into(),
                item_index: 1,
            }],
        };
        let mut output = JsonListOutput::new(Vec::new());
        output.output_group(&group).unwrap();
        output.finish(&CountSummary::default()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(json[0]["index"], 1);
        assert_eq!(json[0]["path"], "a.txt");
        assert_eq!(json[0]["items"][0]["index"], 1);
        assert_eq!(json[0]["items"][0]["line"], 2);
        assert_eq!(json[0]["items"][0]["content"], "TODO fix this");
    }

    #[test]
    fn test_json_list_empty_is_empty_array() {
        let mut output = JsonListOutput::new(Vec::new());
        output.finish(&CountSummary::default()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }
}
