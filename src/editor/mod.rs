mod command;
mod input;

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::buffer::{LineBuffer, SaveOutcome};
use crate::config::Config;
use crate::logger::{LogLevel, RotatingLogger};
use command::Command;

const MENU: &str =
    "Options: (a)dd line, (p)rint lines, (r)ead file, (i)nsert line before, (w)rite to file, (d)elete line, (e)xit";

/// The interactive command loop: prompts, dispatches menu commands against
/// the line buffer, and translates operation results into console messages.
///
/// Generic over its input and output streams; `main` wires it to stdin and
/// stdout. Every operation failure is reported and the loop continues; only
/// a confirmed exit (or end of input) terminates it. The rotating logger is
/// a best-effort collaborator and never blocks an operation.
pub struct Editor<R: BufRead, W: Write> {
    buffer: LineBuffer,
    logger: RotatingLogger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            buffer: LineBuffer::new(),
            logger: RotatingLogger::new(&config.log.path, config.log.max_messages),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = input::prompt_line(&mut self.input, &mut self.output, "> ")? else {
                break;
            };
            let line = line.trim().to_lowercase();
            if line.is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Some(Command::Add) => self.add_line()?,
                Some(Command::Print) => self.print_lines()?,
                Some(Command::Insert) => self.insert_line()?,
                Some(Command::Delete) => self.delete_line()?,
                Some(Command::Write) => self.write_file()?,
                Some(Command::Read) => self.read_file()?,
                Some(Command::Exit) => {
                    if self.confirm_exit()? {
                        break;
                    }
                }
                None => writeln!(self.output, "Unknown command: {line}")?,
            }
        }
        Ok(())
    }

    fn add_line(&mut self) -> Result<()> {
        let Some(text) = input::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter a line of text to add: ",
        )?
        else {
            return Ok(());
        };
        match self.buffer.add(&text) {
            Ok(count) => writeln!(
                self.output,
                "Line added successfully ({count} characters)."
            )?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn print_lines(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            writeln!(self.output, "No lines stored.")?;
            return Ok(());
        }
        writeln!(self.output, "Stored lines:")?;
        for (position, line) in self.buffer.iter() {
            writeln!(self.output, "{position}: {line}")?;
        }
        Ok(())
    }

    fn insert_line(&mut self) -> Result<()> {
        let Some(position) = input::prompt_position(
            &mut self.input,
            &mut self.output,
            "Please enter a line number to insert before: ",
            self.buffer.len() + 1,
        )?
        else {
            return Ok(());
        };
        let Some(text) = input::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the line of text to insert: ",
        )?
        else {
            return Ok(());
        };
        match self.buffer.insert_before(position, &text) {
            Ok(()) => writeln!(
                self.output,
                "Line inserted successfully before line {position}."
            )?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn delete_line(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            writeln!(self.output, "No lines stored.")?;
            return Ok(());
        }
        let Some(position) = input::prompt_position(
            &mut self.input,
            &mut self.output,
            "Please enter a line number to delete: ",
            self.buffer.len(),
        )?
        else {
            return Ok(());
        };
        match self.buffer.delete(position) {
            Ok(()) => writeln!(self.output, "Line {position} deleted successfully.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn write_file(&mut self) -> Result<()> {
        let Some(name) = input::prompt_nonempty(
            &mut self.input,
            &mut self.output,
            "Please enter a filename: ",
        )?
        else {
            return Ok(());
        };
        let path = PathBuf::from(name);

        let overwrite_allowed = if path.exists() {
            input::confirm(
                &mut self.input,
                &mut self.output,
                &format!("{} already exists. Overwrite? (y/n): ", path.display()),
            )?
        } else {
            true
        };

        match self.buffer.save_to_file(&path, overwrite_allowed) {
            Ok(SaveOutcome::Saved(count)) => {
                writeln!(
                    self.output,
                    "{count} lines saved to {} successfully.",
                    path.display()
                )?;
                self.logger
                    .log(&format!("saved {count} lines to {}", path.display()));
            }
            Ok(SaveOutcome::Cancelled) => writeln!(self.output, "Save cancelled.")?,
            Err(error) => {
                writeln!(self.output, "{error}")?;
                self.logger.log_at(&error.to_string(), LogLevel::Error);
            }
        }
        Ok(())
    }

    fn read_file(&mut self) -> Result<()> {
        let Some(name) = input::prompt_nonempty(
            &mut self.input,
            &mut self.output,
            "Please enter a filename: ",
        )?
        else {
            return Ok(());
        };
        let path = PathBuf::from(name);

        match self.buffer.load_from_file(&path) {
            Ok(read) => {
                writeln!(
                    self.output,
                    "{} lines read from {} successfully.",
                    read.len(),
                    path.display()
                )?;
                self.logger
                    .log(&format!("read {} lines from {}", read.len(), path.display()));
            }
            Err(error) => {
                writeln!(self.output, "{error}")?;
                self.logger.log_at(&error.to_string(), LogLevel::Error);
            }
        }
        Ok(())
    }

    fn confirm_exit(&mut self) -> Result<bool> {
        if !self.buffer.is_dirty() {
            return Ok(true);
        }
        let exit = input::confirm(
            &mut self.input,
            &mut self.output,
            "You have unsaved changes. Exit anyway? (y/n): ",
        )?;
        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn test_config(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::default();
        config.log.path = dir
            .path()
            .join("editor-log.txt")
            .to_string_lossy()
            .into_owned();
        config
    }

    fn run_script(dir: &tempfile::TempDir, script: &str) -> String {
        let config = test_config(dir);
        let mut output = Vec::new();
        let mut editor = Editor::new(&config, Cursor::new(script.as_bytes().to_vec()), &mut output);
        editor.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_print() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "a\nhello\np\ne\ny\n");
        assert!(output.contains("Line added successfully (5 characters)."));
        assert!(output.contains("Stored lines:"));
        assert!(output.contains("1: hello"));
    }

    #[test]
    fn test_print_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "p\ne\n");
        assert!(output.contains("No lines stored."));
    }

    #[test]
    fn test_insert_before_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "a\nb\na\nc\ni\n1\na\np\ne\ny\n");
        assert!(output.contains("Line inserted successfully before line 1."));
        assert!(output.contains("1: a\n2: b\n3: c"));
    }

    #[test]
    fn test_delete_on_empty_buffer_reports_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "d\ne\n");
        assert!(output.contains("No lines stored."));
    }

    #[test]
    fn test_invalid_position_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "a\nx\ni\nabc\ni\n9\ne\ny\n");
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Invalid line number."));
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "z\ne\n");
        assert!(output.contains("Unknown command: z"));
    }

    #[test]
    fn test_exit_confirmation_declined_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "a\nkeep\ne\nn\np\ne\ny\n");
        assert!(output.contains("You have unsaved changes."));
        assert!(output.contains("1: keep"));
    }

    #[test]
    fn test_clean_buffer_exits_without_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_script(&dir, "e\n");
        assert!(!output.contains("unsaved changes"));
    }

    #[test]
    fn test_write_then_read_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("notes.txt");
        let target = target.to_string_lossy();
        let script = format!("a\none\na\ntwo\nw\n{target}\nr\n{target}\ne\ny\n");
        let output = run_script(&dir, &script);
        assert!(output.contains("2 lines saved to"));
        assert!(output.contains("2 lines read from"));
    }

    #[test]
    fn test_overwrite_declined_cancels_save() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("existing.txt");
        fs::write(&target, "old\n").unwrap();
        let script = format!("a\nnew\nw\n{}\nn\ne\ny\n", target.to_string_lossy());
        let output = run_script(&dir, &script);
        assert!(output.contains("Overwrite? (y/n):"));
        assert!(output.contains("Save cancelled."));
        assert_eq!(fs::read_to_string(&target).unwrap(), "old\n");
    }

    #[test]
    fn test_read_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let script = format!("r\n{}\ne\n", missing.to_string_lossy());
        let output = run_script(&dir, &script);
        assert!(output.contains("file not found"));
    }
}
