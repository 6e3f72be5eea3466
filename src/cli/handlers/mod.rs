use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, script_io};
use crate::model::config::EditorConfig;
use crate::ops::editor::Editor;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = load_config_cwd(&cli)?;

    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Replay(args)) => cmd_replay(config, args, json),
        Some(Commands::Config) => cmd_config(&config, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config_cwd(cli: &Cli) -> Result<EditorConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd, cli.preset)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_replay(
    config: EditorConfig,
    args: ReplayArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let intents = script_io::read_script(&args.script)?;
    tracing::info!(
        script = %args.script.display(),
        intents = intents.len(),
        "replaying script"
    );

    let mut editor = Editor::new(config);
    let mut steps = Vec::with_capacity(intents.len());
    for intent in intents {
        let applied = editor.apply(intent.clone());
        steps.push((intent, applied));
    }

    if json {
        let out = ReplayJson {
            steps: args.verbose.then(|| {
                steps
                    .iter()
                    .enumerate()
                    .map(|(i, (intent, applied))| StepJson {
                        step: i + 1,
                        intent,
                        result: *applied,
                    })
                    .collect()
            }),
            snapshot: snapshot_json(editor.items(), editor.session()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if args.verbose {
        for (i, (intent, applied)) in steps.iter().enumerate() {
            println!("{}", format_step(i + 1, intent, *applied));
        }
        println!();
    }
    for line in format_items(editor.items()) {
        println!("{}", line);
    }
    if editor.session().is_open() {
        println!("{}", format_session(editor.session()));
    }
    Ok(())
}

fn cmd_config(config: &EditorConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config_io::render_config(config)?);
    }
    Ok(())
}
