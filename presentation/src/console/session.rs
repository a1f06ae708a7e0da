//! Console session
//!
//! Drives a [`Site`] from console commands. Interactive mode multiplexes
//! stdin lines with the next timer deadline on one task, so events and
//! timers still run to completion one at a time. Script mode replays a file
//! in virtual time and drains every pending timer at the end.

use super::clock::WallClock;
use super::command::{ConsoleCommand, HELP, is_comment};
use super::surface::ConsoleSurface;
use colored::Colorize;
use folio_application::{EventOutcome, Site, SubmitOutcome};
use folio_domain::{AnchorTarget, UiEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Console host for a [`Site`]
pub struct ConsoleSession {
    site: Site,
    surface: Arc<ConsoleSurface>,
}

impl ConsoleSession {
    pub fn new(site: Site, surface: Arc<ConsoleSurface>) -> Self {
        Self { site, surface }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Print the welcome banner and draw the initial page
    pub fn start(&self) {
        self.surface.line("");
        self.surface
            .line("╭─────────────────────────────────────────────╮".cyan().to_string());
        self.surface
            .line("│              Folio - Portfolio              │".cyan().to_string());
        self.surface
            .line("╰─────────────────────────────────────────────╯".cyan().to_string());
        self.surface
            .line("Type 'help' for commands, 'quit' to leave.".dimmed().to_string());
        self.surface.line("");
        self.site.mount();
    }

    /// Run one command. `wait` advances virtual time without sleeping.
    pub fn execute(&mut self, command: ConsoleCommand) -> Flow {
        match command {
            ConsoleCommand::Event(event) => self.dispatch(event),
            ConsoleCommand::Wait(duration) => {
                self.site.advance_by(duration);
            }
            ConsoleCommand::Status => self.print_status(),
            ConsoleCommand::Help => self.surface.line(HELP),
            ConsoleCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Replay a script in virtual time, then fire every pending timer.
    ///
    /// Returns the number of commands executed. Lines that fail to parse are
    /// reported and skipped.
    pub fn run_script(&mut self, script: &str) -> usize {
        let mut executed = 0;
        for (number, line) in script.lines().enumerate() {
            if is_comment(line) {
                continue;
            }
            self.surface.line(format!("> {}", line.trim()).dimmed().to_string());
            match ConsoleCommand::parse(line) {
                Ok(command) => {
                    executed += 1;
                    if self.execute(command) == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.report_error(format!("line {}: {}", number + 1, e)),
            }
        }

        let fired = self.site.run_until_idle();
        debug!(executed, fired, "Script finished");
        executed
    }

    /// Read commands until `quit` or end of input, firing timers on time.
    pub async fn run_interactive<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let clock = WallClock::start();
        let mut lines = input.lines();

        loop {
            let deadline = self.site.next_deadline();
            tokio::select! {
                line = lines.next_line() => {
                    self.catch_up(&clock);
                    let Some(line) = line? else {
                        break;
                    };
                    if is_comment(&line) {
                        continue;
                    }
                    match ConsoleCommand::parse(&line) {
                        Ok(ConsoleCommand::Wait(duration)) => self.wait(&clock, duration).await,
                        Ok(command) => {
                            if self.execute(command) == Flow::Quit {
                                break;
                            }
                        }
                        Err(e) => self.report_error(e.to_string()),
                    }
                }
                _ = clock.sleep_until(deadline) => {
                    self.catch_up(&clock);
                }
            }
        }

        self.surface.line("Bye!");
        Ok(())
    }

    /// Fire every timer that is due on the wall clock
    fn catch_up(&mut self, clock: &WallClock) {
        self.site.advance_to(clock.elapsed());
    }

    /// Sleep for `duration`, waking at each deadline on the way
    async fn wait(&mut self, clock: &WallClock, duration: Duration) {
        let target = clock.elapsed() + duration;
        loop {
            let next = self
                .site
                .next_deadline()
                .map_or(target, |deadline| deadline.min(target));
            clock.sleep_until(Some(next)).await;
            self.catch_up(clock);
            if clock.elapsed() >= target {
                break;
            }
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        match self.site.handle(event) {
            Ok(EventOutcome::Handled) | Ok(EventOutcome::Submit(SubmitOutcome::Submitting)) => {}
            Ok(EventOutcome::Submit(SubmitOutcome::Ignored(status))) => {
                self.note(format!("submit ignored while {}", status));
            }
            Ok(EventOutcome::Submit(SubmitOutcome::Rejected(report))) => {
                self.note(format!(
                    "{} field(s) need attention",
                    report.failed_fields().len()
                ));
            }
            Ok(EventOutcome::Anchor(AnchorTarget::ScrollTo { .. })) => {}
            Ok(EventOutcome::Anchor(AnchorTarget::NotFound)) => {
                self.note("no section with that id");
            }
            Ok(EventOutcome::Anchor(AnchorTarget::Ignore)) | Ok(EventOutcome::Ignored) => {
                self.note("no effect");
            }
            Err(e) => {
                warn!("{}", e);
                self.report_error(e.to_string());
            }
        }
    }

    fn print_status(&self) {
        let form = self.site.form();
        let page = self.site.page();

        self.surface.line(format!(
            "{} {:.3}s  {} {}  {} {}",
            "time".bold(),
            self.site.now().as_secs_f64(),
            "form".bold(),
            self.site.status(),
            "timers".bold(),
            self.site.pending_timers()
        ));
        self.surface.line(format!(
            "{} {}  {} {}",
            "menu".bold(),
            if page.menu().is_open() { "open" } else { "closed" },
            "section".bold(),
            page.active_link().unwrap_or("-")
        ));
        for field in form.form().fields() {
            self.surface.line(format!(
                "  field {} {} = {:?}{}",
                field.id,
                field.role,
                field.value,
                if field.invalid { " [invalid]" } else { "" }
            ));
        }
        for error in form.feedback().field_errors() {
            self.surface
                .line(format!("  error on field {}: {}", error.field, error.message));
        }
        if let Some(notification) = form.feedback().notification() {
            self.surface.line(format!(
                "  notification [{}] {}",
                notification.severity, notification.message
            ));
        }
    }

    fn note(&self, text: impl AsRef<str>) {
        self.surface
            .line(format!("  ({})", text.as_ref()).dimmed().to_string());
    }

    fn report_error(&self, text: String) {
        self.surface
            .line(format!("{} {}", "Error:".red().bold(), text));
    }
}
