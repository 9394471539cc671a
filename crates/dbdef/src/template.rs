use dbdef_core::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;

/// `$$`, `$name`, `${name}`, or a `$` that starts none of these.
const PLACEHOLDER: &str = r"\$(?:(\$)|([_a-zA-Z][_a-zA-Z0-9]*)|\{([_a-zA-Z][_a-zA-Z0-9]*)\}|)";

/// A text template with `$name` and `${name}` placeholders.
///
/// `$$` renders a literal `$`. Every placeholder must be given a value.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn render(&self, vars: &IndexMap<&str, String>) -> Result<String> {
        let re = Regex::new(PLACEHOLDER).map_err(anyhow::Error::from)?;

        let mut ret = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in re.captures_iter(&self.source) {
            let Some(all) = caps.get(0) else {
                continue;
            };

            ret.push_str(&self.source[last..all.start()]);
            last = all.end();

            if caps.get(1).is_some() {
                ret.push('$');
                continue;
            }

            let Some(name) = caps.get(2).or_else(|| caps.get(3)) else {
                let line = self.source[..all.start()].matches('\n').count() + 1;
                return Err(Error::invalid_configuration(format!(
                    "invalid placeholder on line {line} of template"
                )));
            };

            match vars.get(name.as_str()) {
                Some(value) => ret.push_str(value),
                None => {
                    return Err(Error::invalid_configuration(format!(
                        "template references unknown placeholder `{}`",
                        name.as_str()
                    )))
                }
            }
        }

        ret.push_str(&self.source[last..]);
        Ok(ret)
    }
}
