//! Programmatic stylesheet generation.

use std::fmt::Write;

struct Rule {
    selector: String,
    declarations: Vec<(String, String)>,
}

/// An in-memory stylesheet assembled rule by rule
#[derive(Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: &str, declarations: &[(&str, &str)]) -> Self {
        self.rules.push(Rule {
            selector: selector.to_string(),
            declarations: declarations
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let _ = writeln!(out, "{} {{", rule.selector);
            for (name, value) in &rule.declarations {
                let _ = writeln!(out, "    {name}: {value};");
            }
            let _ = writeln!(out, "}}");
        }
        out
    }
}
