/// Prepares the lines of a source file for parsing.
///
/// A leading byte-order mark is removed. Lines are trimmed, and blank lines
/// and `#` comments are dropped, except inside a verbatim block: every line
/// between the block's start and end markers is kept exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceReader {
    verbatim: Option<(&'static str, &'static str)>,
}

impl SourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the lines between `start` and `end` untouched.
    pub fn verbatim(mut self, start: &'static str, end: &'static str) -> Self {
        self.verbatim = Some((start, end));
        self
    }

    pub fn read(&self, contents: &str) -> Vec<String> {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        let mut ret = vec![];
        let mut in_verbatim = false;

        for line in contents.lines() {
            let trimmed = line.trim();

            if let Some((start, end)) = self.verbatim {
                if in_verbatim {
                    if trimmed == end {
                        in_verbatim = false;
                        ret.push(trimmed.to_string());
                    } else {
                        ret.push(line.to_string());
                    }
                    continue;
                }

                if trimmed == start {
                    in_verbatim = true;
                }
            }

            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                ret.push(trimmed.to_string());
            }
        }

        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filters_blank_and_comment_lines() {
        let lines = SourceReader::new().read("\u{feff}TBL\n\n  # comment\n  NAME:t  \r\n");
        assert_eq!(lines, ["TBL", "NAME:t"]);
    }

    #[test]
    fn keeps_verbatim_block() {
        let source = "FUNC\nBODY:\n  SELECT 1;\n\n# not a comment\nNAME:x\n  BODY;  \n# dropped\n";
        let lines = SourceReader::new().verbatim("BODY:", "BODY;").read(source);

        assert_eq!(
            lines,
            [
                "FUNC",
                "BODY:",
                "  SELECT 1;",
                "",
                "# not a comment",
                "NAME:x",
                "BODY;",
            ]
        );
    }

    #[test]
    fn without_verbatim_markers_body_is_trimmed() {
        let lines = SourceReader::new().read("BODY:\n  SELECT 1;\n\nBODY;");
        assert_eq!(lines, ["BODY:", "SELECT 1;", "BODY;"]);
    }
}
