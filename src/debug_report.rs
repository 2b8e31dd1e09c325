use pengim_fuzzy::{Accent, FuzzyRule, Pronunciation, RegistrationMetrics, Touches, resolve_shift, rule_names};
use serde::Serialize;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// One input syllable run through one accent.
#[derive(Debug, Serialize)]
pub struct Row {
    pub source: Pronunciation,
    pub fuzzed: Pronunciation,
    /// Registered readings realized the same way (empty without a vocabulary).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged: Vec<Pronunciation>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationSummary {
    pub vocabulary: usize,
    pub entries: usize,
    pub targets: usize,
    pub shifted: usize,
    pub elapsed_us: u128,
}

#[derive(Debug, Serialize)]
pub struct AccentReport {
    pub id: String,
    pub area: String,
    pub subarea: String,
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<RegistrationSummary>,
    pub rows: Vec<Row>,
}

impl AccentReport {
    pub fn new(accent: &Accent, metrics: Option<RegistrationMetrics>, rows: Vec<Row>) -> Self {
        let record = accent.to_record();
        AccentReport {
            id: record.id,
            area: record.area,
            subarea: record.subarea,
            rules: record.rules,
            registration: metrics.map(|m| RegistrationSummary {
                vocabulary: m.vocabulary,
                entries: m.entries,
                targets: m.targets,
                shifted: m.shifted,
                elapsed_us: m.duration.as_micros(),
            }),
            rows,
        }
    }
}

pub fn print_json(reports: &[AccentReport]) {
    match serde_json::to_string_pretty(reports) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to serialize report: {err}"),
    }
}

pub fn print_reports(reports: &[AccentReport], color: bool) {
    let palette = ansi::Palette::new(color);

    for report in reports {
        let location = [report.area.as_str(), report.subarea.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" / ");
        let title = if location.is_empty() { report.id.clone() } else { format!("{} ({})", report.id, location) };
        println!("\n{}", palette.bold(palette.paint(format!("⚙  Accent: {title}"), ansi::CYAN)));

        if report.rules.is_empty() {
            println!("{}", palette.dim("  no rules (identity)"));
        } else {
            println!("{}", palette.dim(format!("  rules: {}", report.rules.join(" → "))));
        }

        if let Some(reg) = &report.registration {
            println!(
                "{}",
                palette.dim(format!(
                    "  vocabulary: {} readings, {} shifted, {} realized forms ({}µs)",
                    reg.vocabulary, reg.shifted, reg.targets, reg.elapsed_us
                ))
            );
        }

        println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
        for row in &report.rows {
            print_row(row, &palette);
        }
    }
    println!();
}

fn print_row(row: &Row, palette: &ansi::Palette) {
    let source = row.source.to_syllable();
    let fuzzed = row.fuzzed.to_syllable();

    if row.source == row.fuzzed {
        println!("  {}  {}", source, palette.dim("(unchanged)"));
    } else {
        println!("  {}  →  {}", source, palette.paint(fuzzed, ansi::GREEN));
    }

    let others: Vec<String> = row.merged.iter().filter(|p| **p != row.source).map(Pronunciation::to_syllable).collect();
    if !others.is_empty() {
        println!("     {} {}", palette.paint("merges with:", ansi::YELLOW), others.join(", "));
    }
}

pub fn print_rules(color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));

    for name in rule_names() {
        let Ok(shift) = resolve_shift(name) else { continue };
        let touches = match shift.touches() {
            t if t == Touches::all() => "initial+final",
            t if t.contains(Touches::INITIAL) => "initial",
            _ => "final",
        };

        println!("  {:<32} {}", palette.bold(name), palette.dim(format!("[{touches}]")));
        if !shift.description().is_empty() {
            println!("      {}", shift.description());
        }
        if !shift.example_chars().is_empty() {
            println!("      {}", palette.dim(format!("e.g. {}", shift.example_chars().join(" "))));
        }
    }
    println!();
}
