//! Builds a combo automaton and prints its states.
//!
//! Usage: `combo-dump [RULES_FILE]`. Without a file, the built-in rules are used.
use {
    combo_core::{build, parse_rules, sample_rules, BoxResult, Rule},
    log::{error, info},
    std::{env, fs, process::ExitCode},
};

fn load_rules() -> BoxResult<Vec<Rule<combo_core::Control>>> {
    match env::args_os().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.to_string_lossy()))?;
            let rules = parse_rules(&text)?;
            info!("Loaded {} rules from {}", rules.len(), path.to_string_lossy());
            Ok(rules)
        }
        None => Ok(sample_rules().to_vec()),
    }
}

fn run() -> BoxResult<()> {
    let rules = load_rules()?;
    let automaton = build(&rules)?;
    print!("{}", automaton.dump());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("combo-dump: {e}");
            ExitCode::FAILURE
        }
    }
}
