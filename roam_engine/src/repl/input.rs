//! Terminal input handling for the Roam REPL.
//!
//! Wraps rustyline configuration and completion for the command set, with a
//! threaded line reader for pipes and redirected input.

use std::fs;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::{DIRECTIONS, Verb};
use crate::resolver::VERB_ALIASES;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

type ReplEditor = rustyline::Editor<RoamHelper, DefaultHistory>;

#[derive(Default)]
struct RoamHelper;

impl Helper for RoamHelper {}

impl Completer for RoamHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word(line, pos);
        Ok((start, completions(&prefix)))
    }
}

impl Hinter for RoamHelper {
    type Hint = String;
}

impl Highlighter for RoamHelper {}

impl Validator for RoamHelper {}

/// Start offset and text of the word under the cursor.
fn current_word(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(0, |(idx, ch)| idx + ch.len_utf8());
    (start, slice[start..].to_string())
}

fn completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = Verb::ALL.iter().map(|verb| verb.as_str().to_string()).collect();
    terms.extend(DIRECTIONS.iter().map(ToString::to_string));
    // single-character shortcuts gain nothing from completion
    terms.extend(VERB_ALIASES.keys().filter(|alias| alias.len() > 1).map(ToString::to_string));
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Anything the REPL can pull player input from.
pub trait LineSource {
    /// Show `prompt` and wait for the next line.
    ///
    /// # Errors
    /// - if the underlying input cannot be read
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// The terminal input used by `roam`.
///
/// A line editor with completion and history when stdin is a terminal, piped
/// line reads otherwise. Ctrl-C reaches the REPL as [`InputEvent::Interrupted`]
/// from either one.
pub enum InputManager {
    Editor(Box<LineEditor>),
    Piped(PipedInput),
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading piped input");
            return InputManager::Piped(PipedInput::stdin());
        }
        match LineEditor::open(history_file_path()) {
            Ok(editor) => {
                info!("using rustyline-backed REPL input");
                InputManager::Editor(editor)
            },
            Err(err) => {
                warn!("failed to initialize rustyline ({err}), falling back to piped input");
                InputManager::Piped(PipedInput::stdin())
            },
        }
    }
}

impl LineSource for InputManager {
    /// If the line editor fails, switch to piped input for the rest of the session.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            InputManager::Piped(piped) => piped.read_line(prompt),
            InputManager::Editor(editor) => match editor.read_line(prompt) {
                Ok(event) => Ok(event),
                Err(err) => {
                    warn!("rustyline input failed: {err} -- switching to piped input");
                    *self = InputManager::Piped(PipedInput::stdin());
                    self.read_line(prompt)
                },
            },
        }
    }
}

/// rustyline editor with the command completer and a persistent history file.
pub struct LineEditor {
    editor: ReplEditor,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn open(history: Option<PathBuf>) -> io::Result<Box<Self>> {
        let mut editor = ReplEditor::new().map_err(into_io_error)?;
        editor.set_helper(Some(RoamHelper));
        if let Some(path) = history.as_deref() {
            load_history(&mut editor, path);
        }
        Ok(Box::new(Self { editor, history }))
    }

    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("failed to append to history: {err}");
        }
        if let Some(path) = self.history.as_deref()
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("failed to persist history to {}: {err}", path.display());
        }
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let event = readline_event(self.editor.readline(prompt))?;
        if let InputEvent::Line(line) = &event {
            self.remember(line);
        }
        Ok(event)
    }
}

fn load_history(editor: &mut ReplEditor, path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => info!("history loaded from {}", path.display()),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no prior history found at {}, starting fresh", path.display());
        },
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
}

/// Line reads on a background thread.
///
/// The reader thread only reads when asked, so an exhausted input reports one
/// `Eof` per prompt. Because the main thread waits on a channel rather than on
/// the read itself, an interrupt can be delivered while a read is blocked.
pub struct PipedInput {
    requests: Sender<()>,
    events: Receiver<io::Result<InputEvent>>,
    interrupts: Sender<io::Result<InputEvent>>,
}

impl PipedInput {
    /// Read from `source` on a new thread.
    pub fn spawn<R: BufRead + Send + 'static>(mut source: R) -> Self {
        let (requests, pending) = mpsc::channel::<()>();
        let (interrupts, events) = mpsc::channel();
        let replies = interrupts.clone();
        thread::spawn(move || {
            let mut buffer = String::new();
            while pending.recv().is_ok() {
                buffer.clear();
                let event = match source.read_line(&mut buffer) {
                    Ok(0) => Ok(InputEvent::Eof),
                    Ok(_) => Ok(InputEvent::Line(trim_line_ending(&buffer).to_string())),
                    Err(err) => Err(err),
                };
                if replies.send(event).is_err() {
                    break;
                }
            }
        });
        Self {
            requests,
            events,
            interrupts,
        }
    }

    /// Read process stdin, with Ctrl-C routed to [`InputEvent::Interrupted`].
    fn stdin() -> Self {
        let piped = Self::spawn(BufReader::new(io::stdin()));
        let interrupts = piped.interrupt_sender();
        if let Err(err) = ctrlc::set_handler(move || {
            let _ = interrupts.send(Ok(InputEvent::Interrupted));
        }) {
            warn!("failed to install Ctrl-C handler: {err}");
        }
        piped
    }

    /// A handle that makes the next (or current) read return `Interrupted`.
    pub fn interrupt_sender(&self) -> Sender<io::Result<InputEvent>> {
        self.interrupts.clone()
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        // an interrupt that arrived between prompts is answered without reading
        if let Ok(event) = self.events.try_recv() {
            return event;
        }
        self.requests.send(()).map_err(|_| reader_gone())?;
        self.events.recv().map_err(|_| reader_gone())?
    }
}

impl LineSource for PipedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        let event = self.next_event()?;
        if !matches!(event, InputEvent::Line(_)) {
            // the player's Enter never came, so end the prompt line ourselves
            writeln!(stdout)?;
        }
        Ok(event)
    }
}

fn reader_gone() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "input reader thread stopped")
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

fn readline_event(result: Result<String, ReadlineError>) -> io::Result<InputEvent> {
    match result {
        Ok(line) => Ok(InputEvent::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
        Err(err) => Err(into_io_error(err)),
    }
}

fn into_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

/// `<data dir>/roam/history.txt`
fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| history_path_in(&base))
}

fn history_path_in(base: &Path) -> PathBuf {
    base.join("roam").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn readline_ctrl_c_and_ctrl_d_become_events() {
        assert_eq!(readline_event(Err(ReadlineError::Interrupted)).unwrap(), InputEvent::Interrupted);
        assert_eq!(readline_event(Err(ReadlineError::Eof)).unwrap(), InputEvent::Eof);
        assert_eq!(
            readline_event(Ok("look".into())).unwrap(),
            InputEvent::Line("look".into())
        );
    }

    #[test]
    fn history_lives_under_roam() {
        let path = history_path_in(Path::new("/tmp/roam-test"));
        assert!(path.ends_with(Path::new("roam/history.txt")));
    }

    #[test]
    fn command_terms_include_verbs_and_directions() {
        assert!(COMMAND_TERMS.iter().any(|term| term == "inventory"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "take"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "northwest"));
        assert!(!COMMAND_TERMS.iter().any(|term| term == "q"));
    }

    #[test]
    fn completes_word_under_cursor() {
        assert_eq!(current_word("go no", 5), (3, "no".to_string()));
        assert_eq!(current_word("inv", 3), (0, "inv".to_string()));
        let names: Vec<String> = completions("no").into_iter().map(|pair| pair.replacement).collect();
        assert_eq!(names, vec!["north", "northeast", "northwest"]);
        assert!(completions("").is_empty());
    }

    #[test]
    fn word_after_wide_space_starts_past_it() {
        // U+3000 is three bytes long
        assert_eq!(current_word("go\u{3000}no", 7), (5, "no".to_string()));
        assert_eq!(current_word("\u{3000}", 3), (3, String::new()));
    }

    #[test]
    fn line_endings_are_trimmed() {
        assert_eq!(trim_line_ending("look\r\n"), "look");
        assert_eq!(trim_line_ending("look\n"), "look");
        assert_eq!(trim_line_ending("look"), "look");
    }

    #[test]
    fn piped_input_reads_lines_then_repeats_eof() {
        let mut input = PipedInput::spawn(Cursor::new("north\r\nget key\n"));
        assert_eq!(input.next_event().unwrap(), InputEvent::Line("north".into()));
        assert_eq!(input.next_event().unwrap(), InputEvent::Line("get key".into()));
        assert_eq!(input.next_event().unwrap(), InputEvent::Eof);
        assert_eq!(input.next_event().unwrap(), InputEvent::Eof);
    }

    #[test]
    fn interrupt_preempts_the_next_read() {
        let mut input = PipedInput::spawn(Cursor::new("look\n"));
        input.interrupt_sender().send(Ok(InputEvent::Interrupted)).unwrap();
        assert_eq!(input.next_event().unwrap(), InputEvent::Interrupted);
        assert_eq!(input.next_event().unwrap(), InputEvent::Line("look".into()));
    }
}
