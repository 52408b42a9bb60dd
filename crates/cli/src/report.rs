use optkit::Parsed;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub options: Vec<OptionReport>,
    /// Total option occurrences, duplicates included.
    pub occurrences: usize,
    pub positionals: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionReport {
    pub trigger: String,
    pub parameters: Vec<String>,
}

impl ParseReport {
    pub fn from_parsed(parsed: &Parsed) -> Self {
        Self {
            options: parsed
                .options()
                .iter()
                .map(|(spec, parameters)| OptionReport {
                    trigger: spec.to_string(),
                    parameters: parameters.clone(),
                })
                .collect(),
            occurrences: parsed.occurrences().len(),
            positionals: parsed.positionals().to_vec(),
        }
    }

    /// One line per option (`option <trigger> <params...>`), then one per
    /// positional (`positional <value>`).
    pub fn to_lines(&self) -> Vec<String> {
        let options = self.options.iter().map(|o| {
            let mut line = format!("option {}", o.trigger);
            for p in &o.parameters {
                line.push(' ');
                line.push_str(p);
            }
            line
        });
        let positionals = self.positionals.iter().map(|p| format!("positional {p}"));
        options.chain(positionals).collect()
    }
}
