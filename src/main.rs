//! termo - an interactive command session in your terminal
//!
//! Runs a line-edited prompt with history and a small set of commands on the
//! controlling terminal. When stdin is not a terminal (or with `--demo`) the
//! session is driven by a script and its transcript is printed instead.
//!
//! # Quick Start
//!
//! ```text
//! termo                    # Interactive session
//! termo -p '>' --theme nord
//! termo --demo             # Scripted walkthrough
//! echo "help" | termo      # Run piped lines
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Enter | Run the line |
//! | Up/Down | Browse history |
//! | Ctrl+C | Abandon the line |
//! | Ctrl+V | Paste from the clipboard |
//! | Ctrl+D | Quit |

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termo::config::{self, ColorScheme, Config, VERSION};
use termo::demo::{self, DEMO_SCRIPT};
use termo::engine::{CaptureSurface, Output, Session, SessionTitles, Silent};
use termo::ui::{Bell, KeyMapper, TerminalSurface};

/// Command line overrides
#[derive(Default)]
struct CliOptions {
    title: Option<String>,
    prompt: Option<String>,
    theme: Option<String>,
    no_sound: bool,
    demo: bool,
}

/// Events from the input reader thread
enum HostEvent {
    /// Raw input chunk for the session
    Input(String),
    /// Quit requested
    Quit,
}

fn print_version() {
    eprintln!("termo {}", VERSION);
}

fn print_help() {
    eprintln!("termo {} - an interactive command session", VERSION);
    eprintln!();
    eprintln!("Usage: termo [OPTIONS]");
    eprintln!();
    eprintln!("Session options:");
    eprintln!("  -t, --title <TITLE>   Session title");
    eprintln!("  -p, --prompt <TEXT>   Prompt text (default: $)");
    eprintln!("  --theme <NAME>        Color scheme");
    eprintln!("  --no-sound            Do not ring the bell on commands");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  --demo                Run a scripted session and print it");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Enter                 Run the line");
    eprintln!("  Backspace             Delete the last character");
    eprintln!("  ↑/↓                   Browse history");
    eprintln!("  Ctrl+C                Abandon the line");
    eprintln!("  Ctrl+V                Paste from the clipboard");
    eprintln!("  Ctrl+D                Quit");
    eprintln!();
    eprintln!("When stdin is not a terminal, each input line is run as a command.");
    eprintln!();
    eprintln!("Configuration: ~/.termo/config.toml");
    eprintln!("Log file:      ~/.termo/termo.log (filter with TERMO_LOG)");
    eprintln!();
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliOptions::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-t" | "--title" => {
                i += 1;
                let value = args.get(i).ok_or("Missing title argument")?;
                cli.title = Some(value.clone());
            }
            "-p" | "--prompt" => {
                i += 1;
                let value = args.get(i).ok_or("Missing prompt argument")?;
                cli.prompt = Some(value.clone());
            }
            "--theme" => {
                i += 1;
                let value = args.get(i).ok_or("Missing theme argument")?;
                if ColorScheme::find(value).is_none() {
                    return Err(format!(
                        "Unknown theme: {}. Available: {}",
                        value,
                        ColorScheme::list().join(", ")
                    ));
                }
                cli.theme = Some(value.clone());
            }
            "--no-sound" => {
                cli.no_sound = true;
            }
            "--demo" => {
                cli.demo = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(cli)
}

/// Merge command line overrides into the loaded configuration
fn apply_cli(config: &mut Config, cli: &CliOptions) {
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    if let Some(theme) = &cli.theme {
        config.color_scheme = theme.clone();
    }
    if cli.no_sound {
        config.play_sound = false;
    }
}

fn init_logging() {
    let log_path = config::data_dir()
        .map(|dir| dir.join("termo.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("termo.log"));

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_env("TERMO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("termo {} starting...", VERSION);

    let mut config = Config::load();
    apply_cli(&mut config, &cli);

    let scripted = cli.demo || !io::stdin().is_terminal();
    let result = if scripted {
        run_scripted(&config, cli.demo).await
    } else {
        run_terminal(&config).await
    };

    if let Err(e) = &result {
        error!("termo failed: {:#}", e);
    }
    info!("termo exiting");
    result
}

/// Interactive session on the controlling terminal
async fn run_terminal(config: &Config) -> anyhow::Result<()> {
    let mut surface = TerminalSurface::new();
    surface.init()?;

    let output = Output::new(surface);
    output.set_theme(&config.get_color_scheme());

    let titles = SessionTitles::new();
    let bell = Bell::new(output.clone(), config.play_sound);
    let mut session = Session::open(
        output,
        config.session_options(),
        demo::demo_commands(),
        &titles,
        Arc::new(bell),
    )?;
    session.focus();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx);

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(HostEvent::Input(chunk)) => session.handle_input(&chunk),
                Some(HostEvent::Quit) | None => break,
            },
            _ = session.wait_pending(), if session.is_busy() => {}
        }
    }

    session.dispose();
    drop(rx);
    if reader.join().is_err() {
        warn!("Input reader thread panicked");
    }
    Ok(())
}

/// Forward terminal events to the session loop until quit
fn spawn_input_reader(tx: mpsc::UnboundedSender<HostEvent>) -> thread::JoinHandle<()> {
    let poll_timeout = Duration::from_millis(50);

    thread::spawn(move || loop {
        if tx.is_closed() {
            break;
        }

        match event::poll(poll_timeout) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                error!("Event poll failed: {}", e);
                let _ = tx.send(HostEvent::Quit);
                break;
            }
        }

        let evt = match event::read() {
            Ok(evt) => evt,
            Err(e) => {
                error!("Event read failed: {}", e);
                let _ = tx.send(HostEvent::Quit);
                break;
            }
        };

        let chunk = match evt {
            Event::Key(key_event) => {
                // Only process key press events
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if KeyMapper::is_quit(&key_event) {
                    info!("Quit requested");
                    let _ = tx.send(HostEvent::Quit);
                    break;
                }
                if KeyMapper::is_paste(&key_event) {
                    read_clipboard()
                } else {
                    KeyMapper::map(&key_event)
                }
            }
            Event::Paste(text) => Some(flatten_paste(&text)),
            Event::Resize(cols, rows) => {
                debug!("Terminal resized to {}x{}", cols, rows);
                None
            }
            _ => None,
        };

        if let Some(chunk) = chunk.filter(|c| !c.is_empty()) {
            if tx.send(HostEvent::Input(chunk)).is_err() {
                break;
            }
        }
    })
}

fn read_clipboard() -> Option<String> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => Some(flatten_paste(&text)),
        Err(e) => {
            warn!("Clipboard unavailable: {}", e);
            None
        }
    }
}

/// Pasted text stays on the current line
fn flatten_paste(text: &str) -> String {
    text.trim_end_matches(['\r', '\n'])
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

/// Scripted session on a capture surface; the transcript goes to stdout
async fn run_scripted(config: &Config, use_demo_script: bool) -> anyhow::Result<()> {
    let surface = CaptureSurface::new(80);
    let output = Output::new(surface.clone());
    output.set_theme(&config.get_color_scheme());

    let titles = SessionTitles::new();
    let mut session = Session::open(
        output,
        config.session_options(),
        demo::demo_commands(),
        &titles,
        Arc::new(Silent),
    )?;

    let lines: Vec<String> = if use_demo_script {
        DEMO_SCRIPT.iter().map(|line| line.to_string()).collect()
    } else {
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    };
    info!("Running {} scripted lines", lines.len());

    let mut stdout = io::stdout();
    print_transcript(&mut stdout, &surface.take())?;
    for line in &lines {
        demo::run_script(&mut session, [line]).await;
        print_transcript(&mut stdout, &surface.take())?;
    }

    session.dispose();
    writeln!(stdout)?;
    Ok(())
}

fn print_transcript(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.replace("\r\n", "\n").as_bytes())?;
    out.flush()
}
