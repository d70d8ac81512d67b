use {
    argh::FromArgs,
    culpa::throws,
    liso::{liso, Response},
    miette::{MietteDiagnostic, Report},
    std::process::ExitCode,
};

mod error;
mod scanner;
mod token;

use {
    error::{RuntimeError, ScanError},
    scanner::Scanner,
};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const EXIT_USAGE: u8 = 42;
const EXIT_LEX_ERROR: u8 = 65;

/// Print the token stream of a rulox script or run a scanning REPL.
#[derive(FromArgs)]
struct Args {
    /// print version information
    #[argh(switch, short = 'v')]
    version: bool,

    /// script file
    #[argh(positional)]
    script: Vec<String>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    if args.version {
        println!("{} {}", APP_NAME, APP_VERSION);
        return ExitCode::SUCCESS;
    }

    if args.script.len() > 1 {
        eprintln!("Usage: {} [script file]", APP_NAME);
        return ExitCode::from(EXIT_USAGE);
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true) // liso doesn't wrapln! unicode output well.. use println!
                .color(false) // liso doesn't handle color codes well..
                .context_lines(3)
                .build(),
        )
    }))
    .unwrap();

    if args.script.len() == 1 {
        match run_script(&args.script[0]) {
            Ok(true) => ExitCode::from(EXIT_LEX_ERROR),
            Ok(false) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        }
    } else {
        run_repl();
        ExitCode::SUCCESS
    }
}

/// Scan a whole script, print its tokens one per line and report any
/// diagnostics. Returns true if the scan produced lexical errors.
#[throws(RuntimeError)]
fn run_script(script: &str) -> bool {
    let contents = std::fs::read_to_string(script)?;
    let (tokens, errors) = Scanner::new(&contents).scan_tokens();
    for token in &tokens {
        println!("{}", token);
    }
    for error in &errors {
        eprintln!("{}", render(error));
    }
    !errors.is_empty()
}

/// Scan each submitted line as an independent source text. Lexical errors
/// are reported but never end the loop.
fn run_repl() {
    let mut io = liso::InputOutput::new();
    io.prompt(liso!(fg = green, bold, "> ", reset), true, false);
    loop {
        match io.read_blocking() {
            Response::Input(line) => {
                let source = line.as_str();
                io.echoln(liso!(fg = green, dim, "> ", fg = none, source));
                let (tokens, errors) = Scanner::new(source).scan_tokens();
                for token in &tokens {
                    io.wrapln(liso!(token.to_string()));
                }
                for error in &errors {
                    io.println(liso!(fg = red, bold, render(error), fg = none));
                }
            }
            Response::Discarded(line) => {
                io.echoln(liso!(bold + dim, "X ", -bold, line));
            }
            Response::Dead => break,
            Response::Quit => break,
            Response::Finish => break,
            _ => {}
        }
    }
}

/// Render a lexical diagnostic through the configured miette handler.
fn render(error: &ScanError) -> String {
    let report = Report::new(MietteDiagnostic::new(error.to_string()));
    format!("{:?}", report)
}
