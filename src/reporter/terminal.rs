use crate::report::{Level, Section};
use crate::reporter::Reporter;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn level_color(&self, level: Level) -> colored::ColoredString {
        let label = format!("[{}]", level);
        match level {
            Level::Error => label.red().bold(),
            Level::Warn => label.yellow().bold(),
            Level::Info => label.cyan(),
            Level::Ok => label.green(),
        }
    }

    fn format_row(&self, section: &Section) -> String {
        let t = &section.tally;
        let row = format!(
            "{:<24} {:>8} {:>6} {:>6} {:>8} {:>6}",
            section.name, t.count, t.ok, t.info, t.warning, t.error
        );
        match section.max_level() {
            Some(Level::Error) => row.red().to_string(),
            Some(Level::Warn) => row.yellow().to_string(),
            _ => row,
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, sections: &[&Section]) -> String {
        if sections.is_empty() {
            return format!("{}", "No issues found.".green().bold());
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!(
                "{:<24} {:>8} {:>6} {:>6} {:>8} {:>6}",
                "SECTION", "SCANNED", "OK", "INFO", "WARNING", "ERROR"
            )
            .bold()
        ));
        for section in sections {
            output.push_str(&self.format_row(section));
            output.push('\n');
        }

        if self.verbose {
            for section in sections {
                let count = section.issue_count();
                let noun = if count == 1 { "issue" } else { "issues" };
                output.push_str(&format!("\n{} ({} {})\n", section.name.bold(), count, noun));
                for (resource, issues) in &section.outcome {
                    for issue in issues.iter().filter(|i| i.level > Level::Ok) {
                        output.push_str(&format!(
                            "  {} {}: {}\n",
                            self.level_color(issue.level),
                            resource,
                            issue.message
                        ));
                    }
                }
            }
        }

        output.trim_end().to_string()
    }
}
