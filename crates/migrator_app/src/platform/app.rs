use std::collections::VecDeque;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use migrator_core::{update, AppState, Msg};
use migrator_engine::{Converter, Migrator};
use migrator_logging::migrate_debug;

use super::cli::Cli;
use super::config::load_config;
use super::effects::EffectRunner;
use super::render::{render_to_terminal, Rendered};

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).context("loading host config")?;
    let migrator = Migrator::new(&config).context("building url patterns")?;
    let input = read_input(cli.input_path())?;

    let state = drive(Box::new(migrator), input);
    let rendered = render_to_terminal(&state.view(), cli.output.as_deref())?;
    Ok(match rendered {
        Rendered::Output => ExitCode::SUCCESS,
        Rendered::Notification | Rendered::Nothing => ExitCode::FAILURE,
    })
}

/// Runs one submit cycle through the core until no messages remain.
fn drive(converter: Box<dyn Converter>, input: String) -> AppState {
    let runner = EffectRunner::new(converter);
    let mut state = AppState::new();
    let mut inbox = VecDeque::from([Msg::InputChanged(input), Msg::ConvertClicked]);

    while let Some(msg) = inbox.pop_front() {
        migrate_debug!("Dispatching {:?}", DebugMsg(&msg));
        let (next, effects) = update(state, msg);
        state = next;
        inbox.extend(runner.run(effects));
    }
    state
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading input {:?}", path))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading input from stdin")?;
            Ok(text)
        }
    }
}

/// Logs message kinds without dumping whole posts.
struct DebugMsg<'a>(&'a Msg);

impl std::fmt::Debug for DebugMsg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Msg::InputChanged(text) => write!(f, "InputChanged(len={})", text.len()),
            Msg::ConversionFinished(text) => write!(f, "ConversionFinished(len={})", text.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
