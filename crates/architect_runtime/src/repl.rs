//! The interactive game loop.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use architect_foundation::{Error, ErrorKind, Result};
use tracing::warn;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Marks a comment line in a command script.
const SCRIPT_COMMENT: char = '#';

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(session.completions());
        let show_banner = session.config().show_banner;
        Self {
            editor,
            session,
            show_banner,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.session.start();
        print!("{}", self.session.gets());

        while !self.session.is_finished() {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };
        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        let text = self.eval(&input)?;
        print!("{text}");
        let _ = io::stdout().flush();
        Ok(true)
    }

    /// Submits one command and returns the text to show for it.
    ///
    /// # Errors
    ///
    /// Returns an error if game content is malformed.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        self.session.submit(input)?;
        Ok(self.session.gets())
    }

    /// Plays a script of commands, one per line, and returns the transcript.
    ///
    /// Blank lines and lines starting with `#` are skipped. Stops after a
    /// quit command.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a command.
    pub fn run_script(&mut self, script: &str) -> Result<String> {
        self.session.start();
        let mut transcript = self.session.gets();

        for line in script.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(SCRIPT_COMMENT) {
                continue;
            }
            transcript.push_str(&self.prompt);
            transcript.push_str(line);
            transcript.push('\n');
            transcript.push_str(&self.eval(line)?);
            if self.session.is_finished() {
                break;
            }
        }
        Ok(transcript)
    }

    /// Plays a command script read from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a command fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<String> {
        let script = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot read script");
            Error::new(ErrorKind::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        self.run_script(&script)
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprint!("\x1b[2m{context}\x1b[0m");
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("     _          _     _ _            _   ");
        println!("    / \\   _ __ | |__ (_) |_ ___  ___| |_ ");
        println!("   / _ \\ | '__|| '_ \\| | __/ _ \\/ __| __|");
        println!("  / ___ \\| |   | | | | | ||  __/ (__| |_ ");
        println!(" /_/   \\_\\_|   |_| |_|_|\\__\\___|\\___|\\__|");
        println!("\x1b[0m");
        println!("Architect v{}", env!("CARGO_PKG_VERSION"));
        println!("Type ? for help, q to quit.\n");

        let _ = io::stdout().flush();
    }
}
