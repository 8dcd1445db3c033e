use std::io::{self, BufRead, Write};

use color_eyre::eyre::Result;

use crate::{
    core::{
        msg::{relay::RelayMsg, suggestion::SuggestionMsg, system::SystemMsg},
        state::Notice,
    },
    domain::store::RelayBackend,
    infrastructure::cli::Command,
    integration::runtime::Runtime,
};

/// Answers confirmation prompts
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Asks on the terminal; anything but `y`/`yes` declines
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}\nAre you sure? [y/N] ")?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Runs one command-line request against the runtime
pub struct AppRunner<B: RelayBackend> {
    runtime: Runtime<B>,
    assume_yes: bool,
}

impl<B: RelayBackend> AppRunner<B> {
    pub fn new(runtime: Runtime<B>, assume_yes: bool) -> Self {
        Self {
            runtime,
            assume_yes,
        }
    }

    pub fn runtime(&self) -> &Runtime<B> {
        &self.runtime
    }

    /// Execute `command`, writing its listing to `out`.
    ///
    /// Returns the notice raised along the way, if any.
    pub async fn run<C: Confirm, W: Write>(
        &mut self,
        command: Command,
        confirm: &mut C,
        out: &mut W,
    ) -> Result<Option<Notice>> {
        match command {
            Command::List => {
                for relay in self.runtime.relays() {
                    writeln!(out, "{relay}")?;
                }
                Ok(None)
            }

            Command::Suggest => {
                self.runtime.send_msg(SuggestionMsg::Mount);
                self.runtime.settle().await?;

                for suggestion in self.runtime.suggestions() {
                    let mark = if suggestion.already_added { "*" } else { " " };
                    writeln!(out, "{mark} {}", suggestion.url)?;
                }

                let notice = self.take_notice()?;
                self.runtime.dispatch(SuggestionMsg::Unmount)?;
                Ok(notice)
            }

            Command::Add { url } => self.mutate(RelayMsg::RequestAddCustom(url), confirm, out),

            Command::Remove { url } => self.mutate(RelayMsg::RequestRemove(url), confirm, out),
        }
    }

    fn mutate<C: Confirm, W: Write>(
        &mut self,
        request: RelayMsg,
        confirm: &mut C,
        out: &mut W,
    ) -> Result<Option<Notice>> {
        self.runtime.dispatch(request)?;

        if let Some(intent) = self.runtime.state().gate.pending().cloned() {
            let affirmed = self.assume_yes || confirm.confirm(&intent.prompt())?;
            if affirmed {
                self.runtime.dispatch(RelayMsg::Confirm)?;
            } else {
                self.runtime.dispatch(RelayMsg::Cancel)?;
                writeln!(out, "Cancelled")?;
            }
        }

        self.take_notice()
    }

    fn take_notice(&mut self) -> Result<Option<Notice>> {
        let notice = self.runtime.state().system.notice.clone();
        if notice.is_some() {
            self.runtime.dispatch(SystemMsg::DismissNotice)?;
        }
        Ok(notice)
    }
}
