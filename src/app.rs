use std::io;
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::completion::{CompletionBackend, OpenRouterClient};
use crate::config::Config;
use crate::error::AppError;
use crate::output::{
    Presenter, catalog_json, error_json, export_path, outcome_json, print_catalog, print_json,
    write_export,
};
use crate::session::{Outcome, run_session, submit};
use crate::syllabus::{CourseDuration, SyllabusRequest, build_prompt};
use crate::utils::debug_log;

/// Exit status of a command
pub(crate) type ExitCode = i32;

/// Report an error outside of a submission, as JSON or on stderr
fn report_error(cli: &Cli, kind: &str, error: &AppError) -> ExitCode {
    if cli.json {
        print_json(&error_json(kind, &error.to_string()));
    } else {
        eprintln!("error: {error}");
    }
    1
}

pub(crate) fn run(cli: Cli, config: &Config) -> ExitCode {
    if !cli.command.needs_api_key() {
        return match &cli.command {
            Commands::Prompt { subject, duration } => handle_prompt(&cli, subject, *duration),
            _ => handle_options(&cli),
        };
    }

    // Missing key is fatal before any form is shown
    let Some((api_key, source)) = config.resolve_api_key() else {
        return report_error(&cli, "config", &AppError::MissingApiKey);
    };
    debug_log(format_args!("Using API key from {}", source.description()));

    let mut settings = config.client_settings(api_key);
    if let Some(model) = &cli.model {
        settings.model = model.clone();
    }
    let client = OpenRouterClient::new(settings);
    debug_log(format_args!(
        "{} endpoint {}",
        client.name(),
        client.settings().endpoint
    ));

    match &cli.command {
        Commands::Generate {
            subject,
            duration,
            save,
            output,
        } => handle_generate(
            &cli,
            config,
            &client,
            Presenter::new(cli.use_color_on(&io::stderr())),
            GenerateArgs {
                subject,
                duration: *duration,
                save: *save,
                output: output.clone(),
            },
        ),
        _ => handle_session(&cli, config, &client, Presenter::new(cli.use_color())),
    }
}

fn handle_options(cli: &Cli) -> ExitCode {
    if cli.json {
        print_json(&catalog_json());
    } else {
        print_catalog(cli.use_color());
    }
    0
}

fn handle_prompt(cli: &Cli, subject: &str, duration: CourseDuration) -> ExitCode {
    let request = match SyllabusRequest::new(subject, duration) {
        Ok(request) => request,
        Err(e) => return report_error(cli, "input", &AppError::from(e)),
    };
    let prompt = build_prompt(&request);
    if cli.json {
        print_json(&serde_json::json!({
            "system": prompt.system,
            "user": prompt.user,
        }));
    } else {
        println!("{}\n\n{}", prompt.system, prompt.user);
    }
    0
}

struct GenerateArgs<'a> {
    subject: &'a str,
    duration: CourseDuration,
    save: bool,
    output: Option<PathBuf>,
}

fn handle_generate(
    cli: &Cli,
    config: &Config,
    backend: &dyn CompletionBackend,
    presenter: Presenter,
    args: GenerateArgs<'_>,
) -> ExitCode {
    let outcome = submit(backend, args.subject, args.duration);

    // The generated text is shown even when saving it fails
    let export = match &outcome {
        Outcome::Generated(syllabus) if args.save || args.output.is_some() => {
            let path = export_path(
                args.output.as_deref(),
                config.output_dir.as_deref(),
                syllabus.subject.as_str(),
            );
            Some(write_export(&path, syllabus).map(|()| path))
        }
        _ => None,
    };
    let mut code = if outcome.is_success() { 0 } else { 1 };

    if cli.json {
        let mut value = outcome_json(&outcome);
        match &export {
            Some(Ok(path)) => value["saved_to"] = serde_json::json!(path.display().to_string()),
            Some(Err(e)) => {
                value["export_error"] = serde_json::json!(e.to_string());
                code = 1;
            }
            None => {}
        }
        print_json(&value);
        return code;
    }

    // Syllabus text goes to stdout untouched; banners and errors to stderr
    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = match &outcome {
        Outcome::Generated(syllabus) => presenter
            .banner(&mut stderr.lock(), syllabus)
            .and_then(|()| presenter.body(&mut stdout.lock(), syllabus)),
        other => presenter.outcome(&mut stderr.lock(), other),
    };
    if let Err(e) = result {
        return report_error(cli, "io", &AppError::from(e));
    }
    match export {
        Some(Ok(path)) => eprintln!("📥 Saved syllabus to {}", path.display()),
        Some(Err(e)) => {
            eprintln!("error: {e}");
            code = 1;
        }
        None => {}
    }

    code
}

fn handle_session(
    cli: &Cli,
    config: &Config,
    backend: &dyn CompletionBackend,
    presenter: Presenter,
) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_session(
        backend,
        &mut stdin.lock(),
        &mut stdout.lock(),
        presenter,
        config.output_dir.as_deref(),
    );
    match result {
        Ok(_) => 0,
        Err(e) => report_error(cli, "io", &e),
    }
}
