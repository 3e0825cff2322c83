//! Session engine
//!
//! Owns the line buffer, history and command registry, and turns raw input
//! chunks into edits, history recall and command execution.
//!
//! # Command execution
//!
//! Enter resolves the line and starts the matching handler. The handler runs
//! while further input keeps arriving: editing, history recall and Ctrl+C
//! all work, but a second submit is rejected until the running command has
//! settled (single-flight). Once it settles, the prompt is redrawn together
//! with whatever was typed ahead.
//!
//! ```text
//! handle_input("deploy\r")  -> handler started, no prompt yet
//! handle_input("ls")        -> echoed, buffered
//! handle_input("\r")        -> rejected, "ls" stays in the buffer
//! wait_pending().await      -> handler done, "\r\n$ ls" redrawn
//! ```

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, error, info};

use super::ansi::{CLEAR_LINE, CLEAR_SCREEN, CRLF, CURSOR_HOME, GREEN, INTERRUPT_MARKER, ITALIC, RESET};
use super::command::{Command, Group, HandlerResult};
use super::feedback::Feedback;
use super::input::InputUnit;
use super::line::{erase_sequence, LineBuffer};
use super::output::Output;
use super::registry::CommandRegistry;
use super::titles::{SessionTitles, TitleLease};
use crate::error::Result;
use crate::history::CommandHistory;

/// Hint appended to lookup failures
const HELP_HINT: &str = "Type 'help' to list all available commands";

/// Per-session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Unique among active sessions
    pub title: String,
    /// Prompt text, without styling
    pub prompt: String,
    /// Italic banner line; empty for none
    pub welcome_message: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            title: "termo".to_string(),
            prompt: "$".to_string(),
            welcome_message: String::new(),
        }
    }
}

/// A command that has been started but not yet settled
struct PendingCommand {
    line: String,
    task: BoxFuture<'static, HandlerResult>,
}

/// An interactive command session bound to one rendering surface
pub struct Session {
    output: Output,
    registry: CommandRegistry,
    history: CommandHistory,
    line: LineBuffer,
    /// Styled prompt
    prompt: String,
    feedback: Arc<dyn Feedback>,
    pending: Option<PendingCommand>,
    /// Held while the session is open
    lease: Option<TitleLease>,
}

impl Session {
    /// Open a session on `output`.
    ///
    /// `commands` are registered in order, followed by the built-ins. Fails
    /// without writing anything if the title is taken or a command is
    /// malformed.
    pub fn open(
        output: Output,
        options: SessionOptions,
        commands: Vec<Command>,
        titles: &SessionTitles,
        feedback: Arc<dyn Feedback>,
    ) -> Result<Self> {
        let lease = titles.claim(&options.title)?;
        let registry = CommandRegistry::with_builtins(commands)?;

        let session = Self {
            output,
            registry,
            history: CommandHistory::new(),
            line: LineBuffer::new(),
            prompt: format!("{}{}{} ", GREEN, options.prompt, RESET),
            feedback,
            pending: None,
            lease: Some(lease),
        };

        session.write_banner(&options.welcome_message);
        session.feedback.session_opened();
        info!(
            "Session '{}' opened with {} commands",
            options.title,
            session.registry.len()
        );
        Ok(session)
    }

    fn write_banner(&self, welcome_message: &str) {
        if !welcome_message.is_empty() {
            self.output.write(ITALIC);
            self.output.write(welcome_message);
            self.output.write(RESET);
            self.output.write(CRLF);
        }

        let rule = "-".repeat(self.output.columns() as usize);
        self.output.write(&rule);
        self.output.write(CRLF);
        self.output.write(HELP_HINT);
        self.output.write(CRLF);
        self.output.write(&rule);
        self.write_prompt();
    }

    /// Dispatch one raw input chunk.
    ///
    /// Never blocks: a submitted command is started and left pending; drive
    /// it with [`Session::wait_pending`].
    pub fn handle_input(&mut self, data: &str) {
        if !self.is_open() {
            return;
        }

        match InputUnit::classify(data) {
            InputUnit::Interrupt => self.interrupt(),
            InputUnit::HistoryOlder => {
                if let Some(entry) = self.history.navigate_older().map(str::to_string) {
                    self.redraw_line(&entry);
                }
            }
            InputUnit::HistoryNewer => {
                if let Some(entry) = self.history.navigate_newer().map(str::to_string) {
                    self.redraw_line(&entry);
                }
            }
            InputUnit::Submit => self.submit(),
            InputUnit::Backspace => {
                if let Some(ch) = self.line.pop() {
                    self.output.write(&erase_sequence(ch));
                }
            }
            InputUnit::Text(text) => {
                self.line.push_str(text);
                self.output.write(text);
            }
        }
    }

    /// Wait for the running command, if any, to settle.
    ///
    /// Cancel safe: dropping this future leaves the command pending, so it
    /// can be raced against new input in a `select!` loop.
    pub async fn wait_pending(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let result = (&mut pending.task).await;
        if let Some(pending) = self.pending.take() {
            self.settle(&pending.line, result);
        }
    }

    /// Dispatch one chunk and wait for any command it started
    pub async fn feed(&mut self, data: &str) {
        self.handle_input(data);
        self.wait_pending().await;
    }

    fn interrupt(&mut self) {
        self.line.clear();
        self.history.reset_cursor();
        self.output.write(INTERRUPT_MARKER);
        self.write_prompt();
    }

    fn redraw_line(&mut self, text: &str) {
        self.line.replace(text);
        self.output.write(CLEAR_LINE);
        self.output.write(&self.prompt);
        self.output.write(text);
    }

    fn submit(&mut self) {
        // The prompt belongs to the running command until it settles
        if let Some(pending) = &self.pending {
            debug!("Submit rejected while '{}' is running", pending.line);
            return;
        }
        if self.line.is_empty() {
            self.write_prompt();
            return;
        }

        let line = self.line.take();
        self.history.append(line.clone());
        self.feedback.command_executed();
        debug!("Submitted: {:?}", line);

        let trimmed = line.trim();
        if trimmed == "clear" {
            // Handled here, before any lookup: a registered `clear` never sees a bare `clear`
            self.output.write(CLEAR_SCREEN);
            self.output.write(CURSOR_HOME);
            self.output.write(&self.prompt);
            return;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let started = match tokens.first().and_then(|name| self.registry.resolve(name)) {
            None => {
                debug!("Command not found: {:?}", line);
                self.output.write(&format!(
                    "\r\nCommand not found: {}. {}",
                    line, HELP_HINT
                ));
                None
            }
            Some(Command::Leaf(leaf)) => Some(
                leaf.handler()
                    .invoke(self.output.clone(), to_args(&tokens[1..])),
            ),
            Some(Command::Group(group)) => match tokens.get(1) {
                None => {
                    self.write_usage(group);
                    None
                }
                Some(name) => match group.subcommand(name) {
                    Some(leaf) => Some(
                        leaf.handler()
                            .invoke(self.output.clone(), to_args(&tokens[2..])),
                    ),
                    None => {
                        debug!("Subcommand not found: {} {}", group.name(), name);
                        self.output.write(&format!(
                            "\r\nSubcommand not found: {}. {}",
                            name, HELP_HINT
                        ));
                        None
                    }
                },
            },
        };

        match started {
            Some(task) => self.pending = Some(PendingCommand { line, task }),
            None => self.write_prompt(),
        }
    }

    fn write_usage(&self, group: &Group) {
        self.output
            .write(&format!("\r\nUsage: {} <subcommand>", group.name()));
        self.output.write("\r\nSubcommands:\r\n");
        for leaf in group.subcommands() {
            self.output
                .write(&format!("  {} - {}\r\n", leaf.name(), leaf.description()));
        }
    }

    fn settle(&self, line: &str, result: HandlerResult) {
        match result {
            Ok(()) => debug!("Command finished: {:?}", line),
            Err(e) => {
                error!("Command {:?} failed: {:#}", line, e);
                self.output.write(&format!("\r\nCommand failed: {}", e));
            }
        }
        self.write_prompt();
        // Text typed while the command ran
        self.output.write(self.line.as_str());
    }

    fn write_prompt(&self) {
        self.output.write(CRLF);
        self.output.write(&self.prompt);
    }

    /// Focus the rendering surface
    pub fn focus(&self) {
        self.output.focus();
    }

    /// Tear the session down: release the title, dispose the surface and
    /// drop any running command. Idempotent.
    pub fn dispose(&mut self) {
        let Some(lease) = self.lease.take() else {
            return;
        };
        self.pending = None;
        self.feedback.session_closed();
        self.output.close();
        self.line.clear();
        self.history.clear();
        info!("Session '{}' disposed", lease.title());
    }

    pub fn is_open(&self) -> bool {
        self.lease.is_some()
    }

    /// Whether a command is running
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Current line buffer contents
    pub fn input(&self) -> &str {
        self.line.as_str()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Styled prompt as written to the surface
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The output sink this session writes to
    pub fn output(&self) -> &Output {
        &self.output
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn to_args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use anyhow::anyhow;
    use tokio::sync::Notify;

    use super::*;
    use crate::engine::command::Leaf;
    use crate::engine::feedback::Silent;
    use crate::engine::output::CaptureSurface;
    use crate::error::SessionError;

    const PROMPT: &str = "\x1b[32m$\x1b[0m ";

    fn open_with(commands: Vec<Command>) -> (Session, CaptureSurface) {
        let surface = CaptureSurface::new(20);
        let session = Session::open(
            Output::new(surface.clone()),
            SessionOptions::default(),
            commands,
            &SessionTitles::new(),
            Arc::new(Silent),
        )
        .unwrap();
        surface.take();
        (session, surface)
    }

    async fn submit(session: &mut Session, line: &str) {
        for ch in line.chars() {
            session.feed(&ch.to_string()).await;
        }
        session.feed("\r").await;
    }

    fn recorder(name: &str, calls: &Arc<Mutex<Vec<Vec<String>>>>) -> Leaf {
        let calls = calls.clone();
        Leaf::new(name, format!("{} things", name), move |_: Output, args: Vec<String>| {
            let calls = calls.clone();
            async move {
                calls.lock().unwrap().push(args);
                Ok(())
            }
        })
    }

    #[derive(Default)]
    struct Counter {
        executed: AtomicUsize,
        opened: AtomicUsize,
        closed: AtomicUsize,
    }

    impl Feedback for Counter {
        fn command_executed(&self) {
            self.executed.fetch_add(1, Ordering::SeqCst);
        }

        fn session_opened(&self) {
            self.opened.fetch_add(1, Ordering::SeqCst);
        }

        fn session_closed(&self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_banner() {
        let surface = CaptureSurface::new(5);
        let options = SessionOptions {
            welcome_message: "Hi".to_string(),
            ..SessionOptions::default()
        };
        let _session = Session::open(
            Output::new(surface.clone()),
            options,
            vec![],
            &SessionTitles::new(),
            Arc::new(Silent),
        )
        .unwrap();

        assert_eq!(
            surface.contents(),
            format!(
                "\x1b[3mHi\x1b[0m\r\n-----\r\nType 'help' to list all available commands\r\n-----\r\n{}",
                PROMPT
            )
        );
    }

    #[tokio::test]
    async fn test_echo_and_backspace_floor() {
        let (mut session, surface) = open_with(vec![]);

        session.feed("a").await;
        session.feed("b").await;
        for _ in 0..4 {
            session.feed("\x7f").await;
        }

        assert_eq!(session.input(), "");
        assert_eq!(surface.contents(), "ab\x08 \x08\x08 \x08");
    }

    #[tokio::test]
    async fn test_every_submission_ends_with_one_prompt() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![
            Command::Leaf(recorder("known", &calls)),
            Command::group("grp", "Grouped", vec![recorder("sub", &calls)]),
        ]);

        for line in ["known", "unknown", "", "grp", "grp nope", "grp sub x", "   "] {
            submit(&mut session, line).await;
            let written = surface.take();
            assert_eq!(written.matches(PROMPT).count(), 1, "line {:?}: {:?}", line, written);
            assert!(written.ends_with(PROMPT), "line {:?}: {:?}", line, written);
            assert_eq!(session.input(), "");
        }
    }

    #[tokio::test]
    async fn test_empty_submit_leaves_history_alone() {
        let (mut session, surface) = open_with(vec![]);
        session.feed("\r").await;
        assert_eq!(surface.take(), format!("\r\n{}", PROMPT));
        assert!(session.history().is_empty());

        submit(&mut session, "ls").await;
        session.feed("\x1b[A").await;
        session.feed("\x7f").await;
        session.feed("\x7f").await;
        session.feed("\r").await;

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().cursor(), Some(0));
    }

    #[tokio::test]
    async fn test_history_navigation_redraws_line() {
        let (mut session, surface) = open_with(vec![]);
        for line in ["one", "two", "three"] {
            submit(&mut session, line).await;
        }
        surface.take();

        for expected in ["three", "two", "one"] {
            session.feed("\x1b[A").await;
            assert_eq!(surface.take(), format!("\x1b[2K\r{}{}", PROMPT, expected));
            assert_eq!(session.input(), expected);
        }
        session.feed("\x1b[A").await;
        assert_eq!(surface.take(), "");
        assert_eq!(session.input(), "one");

        session.feed("\x1b[B").await;
        session.feed("\x1b[B").await;
        assert_eq!(session.input(), "three");
        surface.take();

        session.feed("\x1b[B").await;
        assert_eq!(surface.take(), format!("\x1b[2K\r{}", PROMPT));
        assert_eq!(session.input(), "");

        session.feed("\x1b[B").await;
        assert_eq!(surface.take(), "");
        assert_eq!(session.history().cursor(), None);
    }

    #[tokio::test]
    async fn test_subcommand_usage_and_dispatch() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![Command::group(
            "theme",
            "Custom themes",
            vec![recorder("set", &calls), recorder("list", &calls)],
        )]);

        submit(&mut session, "theme").await;
        let written = surface.take();
        assert!(written.contains("Usage: theme <subcommand>"));
        assert!(written.contains("  set - set things\r\n"));
        assert!(written.contains("  list - list things\r\n"));
        assert!(calls.lock().unwrap().is_empty());

        submit(&mut session, "theme set dark").await;
        assert_eq!(*calls.lock().unwrap(), vec![vec!["dark".to_string()]]);

        submit(&mut session, "theme paint").await;
        assert!(surface.take().contains("Subcommand not found: paint"));
    }

    #[tokio::test]
    async fn test_leaf_receives_arguments() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, _) = open_with(vec![Command::Leaf(recorder("greet", &calls))]);

        submit(&mut session, "  greet  a   b ").await;
        submit(&mut session, "greet").await;

        assert_eq!(
            *calls.lock().unwrap(),
            vec![vec!["a".to_string(), "b".to_string()], vec![]]
        );
        assert_eq!(session.history().entries(), ["  greet  a   b ", "greet"]);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let (mut session, surface) = open_with(vec![]);
        submit(&mut session, "frobnicate").await;

        let written = surface.take();
        assert!(written.contains("Command not found: frobnicate"));
        assert!(written.contains("Type 'help'"));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![Command::Leaf(recorder("ping", &calls))]);

        submit(&mut session, "PING").await;
        assert!(surface.take().contains("Command not found: PING"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bare_clear_bypasses_registered_clear() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![Command::Leaf(recorder("clear", &calls))]);

        // A bare `clear` is handled before lookup, so the user command never runs
        submit(&mut session, " clear ").await;
        assert_eq!(surface.take(), format!(" clear \x1b[2J\x1b[H{}", PROMPT));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(session.history().entries(), [" clear "]);

        // With arguments it goes through the registry, where the user command wins
        submit(&mut session, "clear all").await;
        assert_eq!(*calls.lock().unwrap(), vec![vec!["all".to_string()]]);
    }

    #[tokio::test]
    async fn test_help_lists_user_and_builtin_commands() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![Command::Leaf(recorder("deploy", &calls))]);

        submit(&mut session, "help").await;
        let written = surface.take();
        assert!(written.contains("  deploy - deploy things\r\n"));
        assert!(written.contains("  theme - List or set terminal theme\r\n"));
        assert!(written.contains("  help - List all commands\r\n"));
        assert!(written.contains("  clear - Clear the terminal screen\r\n"));
    }

    #[tokio::test]
    async fn test_builtin_theme_set() {
        let surface = CaptureSurface::new(20);
        let mut session = Session::open(
            Output::new(surface.clone()),
            SessionOptions::default(),
            vec![],
            &SessionTitles::new(),
            Arc::new(Silent),
        )
        .unwrap();

        submit(&mut session, "theme set dracula").await;
        assert_eq!(surface.theme().as_deref(), Some("dracula"));
    }

    #[tokio::test]
    async fn test_handler_failures_do_not_wedge_the_session() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (mut session, surface) = open_with(vec![
            Command::leaf("fail", "Always fails", |_: Output, _: Vec<String>| async {
                Err(anyhow!("disk on fire"))
            }),
            Command::leaf("boom", "Panics without arguments", |_: Output, args: Vec<String>| async move {
                if args.is_empty() {
                    panic!("kaboom");
                }
                Ok(())
            }),
            Command::Leaf(recorder("ok", &calls)),
        ]);

        submit(&mut session, "fail").await;
        let written = surface.take();
        assert!(written.contains("Command failed: disk on fire"));
        assert!(written.ends_with(PROMPT));

        submit(&mut session, "boom").await;
        let written = surface.take();
        assert!(written.contains("Command failed: handler panicked: kaboom"));
        assert!(written.ends_with(PROMPT));

        submit(&mut session, "ok").await;
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_single_flight_while_command_runs() {
        let gate = Arc::new(Notify::new());
        let runs = Arc::new(AtomicUsize::new(0));
        let slow = {
            let gate = gate.clone();
            let runs = runs.clone();
            Command::leaf("slow", "Waits for the gate", move |out: Output, _: Vec<String>| {
                let gate = gate.clone();
                let runs = runs.clone();
                async move {
                    runs.fetch_add(1, Ordering::SeqCst);
                    gate.notified().await;
                    out.write("\r\ndone");
                    Ok(())
                }
            })
        };
        let (mut session, surface) = open_with(vec![slow]);

        for ch in "slow".chars() {
            session.handle_input(&ch.to_string());
        }
        session.handle_input("\r");
        assert!(session.is_busy());
        assert_eq!(session.input(), "");

        // The command is blocked; waiting can be abandoned without losing it
        let waited = tokio::time::timeout(Duration::from_millis(20), session.wait_pending()).await;
        assert!(waited.is_err());
        assert!(session.is_busy());

        // Editing continues, submitting does not
        session.handle_input("l");
        session.handle_input("s");
        session.handle_input("\r");
        assert_eq!(session.input(), "ls");
        assert_eq!(session.history().len(), 1);
        assert_eq!(surface.take(), "slowls");

        gate.notify_one();
        session.wait_pending().await;

        assert!(!session.is_busy());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(surface.take(), format!("\r\ndone\r\n{}ls", PROMPT));
        assert_eq!(session.input(), "ls");
    }

    #[tokio::test]
    async fn test_empty_submit_while_running_writes_nothing() {
        let gate = Arc::new(Notify::new());
        let slow = {
            let gate = gate.clone();
            Command::leaf("slow", "Waits for the gate", move |out: Output, _: Vec<String>| {
                let gate = gate.clone();
                async move {
                    gate.notified().await;
                    out.write("\r\ndone");
                    Ok(())
                }
            })
        };
        let (mut session, surface) = open_with(vec![slow]);

        session.handle_input("slow");
        session.handle_input("\r");
        session.handle_input("\r");
        session.handle_input("\r");
        assert!(session.is_busy());
        assert_eq!(surface.take(), "slow");

        gate.notify_one();
        session.wait_pending().await;

        let written = surface.take();
        assert_eq!(written, format!("\r\ndone\r\n{}", PROMPT));
        assert_eq!(written.matches(PROMPT).count(), 1);
        assert_eq!(session.history().entries(), ["slow"]);
    }

    #[tokio::test]
    async fn test_interrupt_clears_line_only() {
        let (mut session, surface) = open_with(vec![]);
        submit(&mut session, "first").await;
        session.feed("\x1b[A").await;
        surface.take();

        session.feed("x").await;
        session.feed("\x03").await;

        assert_eq!(surface.take(), format!("x^C\r\n{}", PROMPT));
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), None);
        assert_eq!(session.history().entries(), ["first"]);
    }

    #[tokio::test]
    async fn test_feedback_hooks() {
        let counter = Arc::new(Counter::default());
        let surface = CaptureSurface::new(20);
        let mut session = Session::open(
            Output::new(surface.clone()),
            SessionOptions::default(),
            vec![],
            &SessionTitles::new(),
            counter.clone(),
        )
        .unwrap();
        assert_eq!(counter.opened.load(Ordering::SeqCst), 1);

        session.feed("\r").await;
        submit(&mut session, "nope").await;
        submit(&mut session, "clear").await;
        assert_eq!(counter.executed.load(Ordering::SeqCst), 2);

        session.dispose();
        session.dispose();
        assert_eq!(counter.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicate_title_fails_before_writing() {
        let titles = SessionTitles::new();
        let first = CaptureSurface::default();
        let second = CaptureSurface::default();

        let session = Session::open(
            Output::new(first.clone()),
            SessionOptions::default(),
            vec![],
            &titles,
            Arc::new(Silent),
        )
        .unwrap();

        let err = Session::open(
            Output::new(second.clone()),
            SessionOptions::default(),
            vec![],
            &titles,
            Arc::new(Silent),
        )
        .err();
        assert_eq!(err, Some(SessionError::DuplicateTitle("termo".to_string())));
        assert_eq!(second.contents(), "");

        drop(session);
        assert!(!titles.is_active("termo"));
        assert!(first.is_disposed());
    }

    #[test]
    fn test_malformed_command_fails_and_releases_title() {
        let titles = SessionTitles::new();
        let err = Session::open(
            Output::new(CaptureSurface::default()),
            SessionOptions::default(),
            vec![Command::group("empty", "Nothing inside", vec![])],
            &titles,
            Arc::new(Silent),
        )
        .err();

        assert_eq!(err, Some(SessionError::EmptyGroup("empty".to_string())));
        assert!(!titles.is_active("termo"));
    }

    #[tokio::test]
    async fn test_no_writes_after_dispose() {
        let (mut session, surface) = open_with(vec![]);
        session.focus();
        assert!(surface.is_focused());

        session.dispose();
        assert!(surface.is_disposed());
        assert!(!session.is_open());

        session.feed("a").await;
        session.feed("\r").await;
        session.focus();
        assert_eq!(surface.contents(), "");
        assert_eq!(session.input(), "");
    }
}
