/// A menu command, parsed from one already-trimmed, lowercased input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Print,
    Insert,
    Write,
    Read,
    Delete,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Command> {
        match input {
            "a" => Some(Command::Add),
            "p" => Some(Command::Print),
            "i" => Some(Command::Insert),
            "w" => Some(Command::Write),
            "r" => Some(Command::Read),
            "d" => Some(Command::Delete),
            "e" | "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}
