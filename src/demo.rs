//! Sample commands and scripted sessions for the `termo` binary

use std::time::Duration;

use anyhow::{bail, Context};
use tracing::debug;

use crate::config::VERSION;
use crate::engine::{Command, Leaf, Output, Session};

/// Lines typed by `termo --demo`
pub const DEMO_SCRIPT: &[&str] = &[
    "help",
    "echo hello from termo",
    "about",
    "about version",
    "theme list",
    "theme set nord",
    "sleep 0.2",
    "time",
    "theme",
];

/// Commands registered by the binary on top of the built-ins
pub fn demo_commands() -> Vec<Command> {
    vec![
        Command::leaf("echo", "Print the arguments", |out: Output, args: Vec<String>| async move {
            out.write(&format!("\r\n{}", args.join(" ")));
            Ok(())
        }),
        Command::leaf("sleep", "Wait for <seconds>", |out: Output, args: Vec<String>| async move {
            let Some(arg) = args.first() else {
                bail!("missing duration");
            };
            let secs: f64 = arg
                .parse()
                .with_context(|| format!("invalid duration '{}'", arg))?;
            if !secs.is_finite() || secs < 0.0 {
                bail!("invalid duration '{}'", arg);
            }
            tokio::time::sleep(Duration::from_secs_f64(secs)).await;
            out.write(&format!("\r\nSlept {}s", secs));
            Ok(())
        }),
        Command::group(
            "about",
            "Show information about termo",
            vec![
                Leaf::new("version", "Show the version", |out: Output, _args: Vec<String>| async move {
                    out.write(&format!("\r\ntermo {}", VERSION));
                    Ok(())
                }),
                Leaf::new("keys", "Show key bindings", |out: Output, _args: Vec<String>| async move {
                    for line in KEY_HELP {
                        out.write("\r\n");
                        out.write(line);
                    }
                    Ok(())
                }),
            ],
        ),
    ]
}

const KEY_HELP: &[&str] = &[
    "  Enter       Run the line",
    "  Backspace   Delete the last character",
    "  Up/Down     Browse history",
    "  Ctrl+C      Abandon the line",
    "  Ctrl+V      Paste from the clipboard",
    "  Ctrl+D      Quit",
];

/// Type each line into `session` and run it to completion
pub async fn run_script<I, S>(session: &mut Session, lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        let line = line.as_ref();
        debug!("Script line: {}", line);
        session.feed(line).await;
        session.feed("\r").await;
    }
}
