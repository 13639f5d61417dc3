use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  list | refresh        reload the posts
  title <text>          set the title field
  content <text>        set the content field
  edit <id>             edit a listed post
  submit                create the post, or update the one being edited
  delete <id>           delete a post
  help                  show this help
  quit                  leave the screen";

/// One line typed into the interactive screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenInput {
    Refresh,
    Title(String),
    Content(String),
    Edit(i64),
    Submit,
    Delete(i64),
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs a post id")]
    MissingId(&'static str),

    #[error("`{0}` is not a post id")]
    BadId(String),
}

fn parse_id(command: &'static str, rest: &str) -> Result<i64, InputError> {
    if rest.is_empty() {
        return Err(InputError::MissingId(command));
    }

    rest.parse().map_err(|_| InputError::BadId(rest.to_string()))
}

impl FromStr for ScreenInput {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        Ok(match command {
            "" => Self::Nothing,
            "list" | "refresh" => Self::Refresh,
            "title" => Self::Title(rest.to_string()),
            "content" => Self::Content(rest.to_string()),
            "edit" => Self::Edit(parse_id("edit", rest)?),
            "submit" => Self::Submit,
            "delete" => Self::Delete(parse_id("delete", rest)?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(InputError::Unknown(other.to_string())),
        })
    }
}
