mod debug_report;

use debug_report::{AccentReport, Row};
use pengim_fuzzy::{
    Accent, Fuzzer, FuzzyError, Pronunciation, find_accent, load_accents, load_vocabulary, parse_syllable, resolve_rule,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

const DEBUG_ENV: &str = "PENGIM_DEBUG_RULES";
const CLI_ACCENT_ID: &str = "cli";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.list_rules {
        debug_report::print_rules(config.color);
        return;
    }

    match run(&config) {
        Ok(reports) if config.json => debug_report::print_json(&reports),
        Ok(reports) => debug_report::print_reports(&reports, config.color),
        Err(err @ FuzzyError::UnknownAccent(_)) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let level = if std::env::var_os(DEBUG_ENV).is_some() { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    syllables: Vec<Pronunciation>,
    rules: Vec<String>,
    accents_file: Option<PathBuf>,
    accent_ids: Vec<String>,
    vocabulary_file: Option<PathBuf>,
    list_rules: bool,
    json: bool,
    color: bool,
}

fn run(config: &CliConfig) -> pengim_fuzzy::Result<Vec<AccentReport>> {
    let vocabulary = match &config.vocabulary_file {
        Some(path) => Some(load_vocabulary(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    let accents = select_accents(config)?;
    let mut reports = Vec::with_capacity(accents.len());

    for accent in accents {
        let fuzzer = Fuzzer::new(accent);
        let metrics = vocabulary.as_deref().map(|vocab| fuzzer.register_vocabulary_with_metrics(vocab));

        let rows = config
            .syllables
            .iter()
            .map(|source| {
                let fuzzed = fuzzer.apply(source);
                let merged = if metrics.is_some() { fuzzer.reverse_lookup(&fuzzed.canonical_key()) } else { Vec::new() };
                Row { source: source.clone(), fuzzed, merged }
            })
            .collect();

        reports.push(AccentReport::new(fuzzer.rule(), metrics, rows));
    }

    Ok(reports)
}

/// Accents to run, in order: the ad-hoc `--rule` accent, then the selected
/// accents from `--accents`. Falls back to the identity accent only when
/// neither option is given; an `--accent` id missing from the file is an error.
fn select_accents(config: &CliConfig) -> pengim_fuzzy::Result<Vec<Accent>> {
    let mut selected = Vec::new();

    if !config.rules.is_empty() {
        let mut accent = Accent::new(CLI_ACCENT_ID, "", "");
        for id in &config.rules {
            accent.rules.push(resolve_rule(id)?);
        }
        selected.push(accent);
    }

    if let Some(path) = &config.accents_file {
        let loaded = load_accents(&std::fs::read_to_string(path)?)?;
        if config.accent_ids.is_empty() {
            selected.extend(loaded);
        } else {
            for id in &config.accent_ids {
                selected.push(find_accent(&loaded, id)?.clone());
            }
        }
    }

    if selected.is_empty() {
        selected.push(Accent::dummy().clone());
    }

    Ok(selected)
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig {
        syllables: Vec::new(),
        rules: Vec::new(),
        accents_file: None,
        accent_ids: Vec::new(),
        vocabulary_file: None,
        list_rules: false,
        json: false,
        color: io::stdout().is_terminal(),
    };
    let mut inputs: Vec<String> = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("pengim-fuzzy {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--json" => config.json = true,
            "--list-rules" => config.list_rules = true,
            "-r" | "--rule" => {
                let value = args.next().ok_or_else(|| "error: --rule expects a value".to_string())?;
                config.rules.push(value);
            }
            "-a" | "--accent" => {
                let value = args.next().ok_or_else(|| "error: --accent expects a value".to_string())?;
                config.accent_ids.push(value);
            }
            "--accents" => {
                let value = args.next().ok_or_else(|| "error: --accents expects a file".to_string())?;
                config.accents_file = Some(PathBuf::from(value));
            }
            "--vocabulary" => {
                let value = args.next().ok_or_else(|| "error: --vocabulary expects a file".to_string())?;
                config.vocabulary_file = Some(PathBuf::from(value));
            }
            "--" => {
                inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--rule=") => config.rules.push(arg.trim_start_matches("--rule=").to_string()),
            _ if arg.starts_with("--accent=") => {
                config.accent_ids.push(arg.trim_start_matches("--accent=").to_string())
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => inputs.push(arg),
        }
    }

    for id in &config.rules {
        resolve_rule(id).map_err(|err| format!("error: {err}"))?;
    }

    if !config.accent_ids.is_empty() && config.accents_file.is_none() {
        return Err("error: --accent needs --accents <file>".to_string());
    }

    if config.list_rules {
        return Ok(config);
    }

    if inputs.is_empty() {
        return Err(format!("error: no syllables provided\n\n{}", help_text()));
    }

    config.syllables = inputs
        .iter()
        .flat_map(|input| input.split_whitespace())
        .map(|s| parse_syllable(s).map_err(|err| format!("error: {err}")))
        .collect::<Result<_, _>>()?;

    Ok(config)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "pengim-fuzzy {version}

Apply Teochew accent sound shifts to Peng'im syllables.

Usage:
  pengim-fuzzy [OPTIONS] [--] <syllable...>
  pengim-fuzzy --list-rules

Syllables are written as initial + final + tone digit, e.g. tsang5, hng5,
0ngu5 (explicit null onset). A trailing '*' marks special nasalization.

Options:
  -r, --rule <FR_..>        Add a rule to an ad-hoc accent (repeatable, in order).
  --accents <file>          JSON array of accent descriptors.
  -a, --accent <id>         Only run this accent from --accents (repeatable).
  --vocabulary <file>       JSON array of pronunciations; shows which readings
                            merge into the same realized form.
  --list-rules              Print the rule catalog and exit.
  --json                    Print results as JSON.
  --color                   Force ANSI color output.
  --no-color                Disable ANSI color output.
  -h, --help                Show this help message.
  -V, --version             Print version information.

Environment:
  {debug_env}=1     Log rule resolution and vocabulary registration to stderr.

Exit codes:
  0  Success.
  1  Failed to load accents or vocabulary.
  2  Invalid arguments or unknown accent id.
",
        version = env!("CARGO_PKG_VERSION"),
        debug_env = DEBUG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENTS: &str = r#"[
        {"id": "Chaoyang", "area": "潮汕", "subarea": "潮阳", "rules": ["FR_V_As_U", "FR_R_As_O"]},
        {"id": "Lufeng", "area": "海陆丰", "subarea": "陆丰", "rules": ["FR_R_As_E"]}
    ]"#;

    fn config(accents_file: Option<PathBuf>, accent_ids: &[&str], rules: &[&str]) -> CliConfig {
        CliConfig {
            syllables: vec![Pronunciation::new("ts", "r", 6)],
            rules: rules.iter().map(|r| r.to_string()).collect(),
            accents_file,
            accent_ids: accent_ids.iter().map(|id| id.to_string()).collect(),
            vocabulary_file: None,
            list_rules: false,
            json: false,
            color: false,
        }
    }

    fn accents_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pengim-fuzzy-{}-{name}.json", std::process::id()));
        std::fs::write(&path, ACCENTS).unwrap();
        path
    }

    #[test]
    fn selects_accents_by_id() {
        let path = accents_file("select");
        let selected = select_accents(&config(Some(path.clone()), &["Lufeng"], &[])).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "Lufeng");
    }

    #[test]
    fn misspelled_accent_id_is_an_error() {
        let path = accents_file("misspelled");
        let res = select_accents(&config(Some(path.clone()), &["Chaoyng"], &[]));
        std::fs::remove_file(path).unwrap();

        assert!(matches!(res, Err(FuzzyError::UnknownAccent(id)) if id == "Chaoyng"));
    }

    #[test]
    fn falls_back_to_identity_without_accent_options() {
        let selected = select_accents(&config(None, &[], &[])).unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].is_identity());

        let adhoc = select_accents(&config(None, &[], &["FR_R_As_O"])).unwrap();
        assert_eq!(adhoc[0].id, CLI_ACCENT_ID);
        assert_eq!(adhoc[0].rules.len(), 1);
    }
}
