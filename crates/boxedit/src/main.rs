use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use boxedit::{EditorConfig, OutputTarget, TerminalOptions};

/// Pop up a text box in the terminal and print what was entered.
///
/// The box is drawn on stderr so stdout can be captured.  Exits with status 1
/// when the user cancels.
#[derive(Parser, Debug)]
#[command(name = "boxedit", version, about)]
struct Cli {
    /// Text the box starts with
    #[arg(short, long, default_value = "")]
    text: String,

    /// Read the initial text from a file instead
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Title shown above the text
    #[arg(long)]
    title: Option<String>,

    /// Text area height in rows
    #[arg(long, default_value_t = 20)]
    rows: u16,

    /// Text area width in columns
    #[arg(long, default_value_t = 80)]
    cols: u16,

    /// Row of the box's top-left corner
    #[arg(long, default_value_t = 0)]
    row: u16,

    /// Column of the box's top-left corner
    #[arg(long, default_value_t = 0)]
    col: u16,

    /// Draw without a border
    #[arg(long)]
    no_border: bool,

    /// Mask every character
    #[arg(short, long)]
    password: bool,

    /// Glyph used to mask characters in password mode
    #[arg(long, default_value_t = '*')]
    mask: char,

    /// Enter accepts instead of starting a new line
    #[arg(short, long)]
    single_line: bool,

    /// Maximum number of lines (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_lines: usize,

    /// Disable the F1 help overlay
    #[arg(long)]
    no_help: bool,

    /// Draw in the normal screen instead of the alternate screen
    #[arg(long)]
    inline: bool,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> io::Result<EditorConfig> {
        let text = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => self.text.clone(),
        };
        let mut config = EditorConfig::new()
            .with_initial_text(text)
            .with_box_size(self.rows, self.cols)
            .with_box_location(self.row, self.col)
            .with_box_border(!self.no_border)
            .with_password_mode(self.password)
            .with_mask_glyph(self.mask)
            .with_single_line(self.single_line)
            .with_max_text_size(self.max_lines)
            .with_help_overlay(!self.no_help);
        if let Some(title) = &self.title {
            config = config.with_title(title.as_str());
        }
        Ok(config)
    }

    fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            alt_screen: !self.inline,
            log_file: self.log_file.clone(),
            output: OutputTarget::Stderr,
            ..TerminalOptions::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("boxedit: {err}");
            return ExitCode::from(2);
        }
    };

    match boxedit::edit_with(config, cli.terminal_options()) {
        Ok((true, text)) => {
            let mut out = io::stdout().lock();
            if writeln!(out, "{text}").is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Ok((false, _)) => ExitCode::from(1),
        Err(err) => {
            eprintln!("boxedit: {err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "boxedit",
            "--text",
            "hi",
            "--title",
            "Name",
            "--rows",
            "1",
            "--cols",
            "30",
            "--single-line",
            "--password",
            "--mask",
            "#",
            "--max-lines",
            "3",
            "--no-border",
            "--no-help",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.initial_text, "hi");
        assert_eq!(config.title(), Some("Name"));
        assert_eq!(config.box_size, (1, 30));
        assert!(config.single_line);
        assert!(config.password_mode);
        assert_eq!(config.mask_glyph, '#');
        assert_eq!(config.max_text_size, Some(3));
        assert!(!config.box_border);
        assert!(!config.help_overlay);
    }

    #[test]
    fn defaults_draw_on_stderr() {
        let cli = Cli::parse_from(["boxedit"]);
        let config = cli.config().unwrap();
        assert_eq!(config, EditorConfig::default());
        let opts = cli.terminal_options();
        assert_eq!(opts.output, OutputTarget::Stderr);
        assert!(opts.alt_screen);
        assert!(!Cli::parse_from(["boxedit", "--inline"]).terminal_options().alt_screen);
    }

    #[test]
    fn text_and_file_conflict() {
        assert!(Cli::try_parse_from(["boxedit", "--text", "a", "--file", "x"]).is_err());
    }
}
