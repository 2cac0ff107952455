//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use halnav_agent::{Align, Line, Response};
use halnav_foundation::{Error, ErrorContext, Result};

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::Renderer;
use crate::session::Session;

/// Marks a comment line in a script.
const COMMENT_PREFIX: char = '#';

/// The interactive chat with HAL9000.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The agent and its tracer.
    session: Session,

    /// Draws responses.
    renderer: Renderer,

    /// Whether to show the chat banner.
    show_banner: bool,

    /// Prompt shown before each input line.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL from a configuration with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the topology cannot be loaded or the editor fails
    /// to initialize.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let session = Session::from_config(config)?;
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session).configured(config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL over a session with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_names(session.names());
        Self {
            editor,
            session,
            renderer: Renderer::default(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Applies the display settings of a configuration.
    #[must_use]
    pub fn configured(mut self, config: &RuntimeConfig) -> Self {
        self.renderer = Renderer::new(config.width, config.color);
        self.show_banner = config.banner;
        self.prompt.clone_from(&config.prompt);
        self
    }

    /// Disables the chat banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the renderer.
    #[must_use]
    pub const fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
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

    /// Runs the REPL loop until end of input or `/quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.session.start();

        let result = self.read_eval_print_loop();

        self.session.finish();
        result
    }

    fn read_eval_print_loop(&mut self) -> Result<()> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    let response = self.eval(&line);
                    self.print(&response);
                    if response.is_quit() {
                        return Ok(());
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => return Ok(()),
            }
        }
    }

    /// Runs scripts in order, then the prompt unless told not to.
    ///
    /// The scripts and the prompt form one traced session. A script ending in
    /// `/quit` ends the session without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if a script cannot be read or reading input fails.
    pub fn run_with_scripts(&mut self, scripts: &[PathBuf], prompt: bool) -> Result<()> {
        self.session.start();
        for script in scripts {
            let responses = match self.eval_script(script) {
                Ok(responses) => responses,
                Err(e) => {
                    self.session.finish();
                    return Err(e);
                }
            };
            if responses.last().is_some_and(Response::is_quit) {
                self.session.finish();
                return Ok(());
            }
        }

        if prompt {
            self.run()
        } else {
            self.session.finish();
            Ok(())
        }
    }

    /// Evaluates one input line.
    pub fn eval(&mut self, line: &str) -> Response {
        self.session.handle_line(line)
    }

    /// Evaluates a script, one input line per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Evaluation stops
    /// early at `/quit`. Returns the responses in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_script(&mut self, path: &Path) -> Result<Vec<Response>> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read {}: {e}", path.display()))
                .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;

        let mut responses = Vec::new();
        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }

            self.print_echo(trimmed);
            let response = self.eval(trimmed);
            self.print(&response);
            let quit = response.is_quit();
            responses.push(response);
            if quit {
                break;
            }
        }

        Ok(responses)
    }

    /// Renders a response to stdout.
    fn print(&self, response: &Response) {
        if !response.is_empty() {
            println!("{}", self.renderer.render(response));
        }
    }

    /// Shows a scripted input line as if the operator typed it.
    fn print_echo(&self, line: &str) {
        let echo = Line::system(format!("{}{line}", self.prompt), Align::Left);
        println!("{}", self.renderer.render_line(&echo));
    }

    /// Prints the chat banner.
    fn print_banner(&self) {
        let banner = Response::new()
            .with_line(Line::system("Operator started the chat.", Align::Left))
            .with_line(Line::system("HAL9000 joined.", Align::Right));
        println!("{}", self.renderer.render(&banner));

        let _ = io::stdout().flush();
    }
}
