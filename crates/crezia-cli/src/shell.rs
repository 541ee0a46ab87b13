//! Interactive shell.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crezia_core::tool::ToolKind;

use crate::bootstrap::AppContext;
use crate::commands;

const COMMANDS: [&str; 8] = [
    "/login", "/signup", "/logout", "/status", "/tools", "/run", "/help", "/quit",
];

/// Completion, hints and highlighting for slash commands and tool ids.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    tool_ids: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            tool_ids: ToolKind::all()
                .into_iter()
                .map(|kind| kind.id().to_string())
                .collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = line.strip_prefix("/run ") {
            if partial.contains(' ') {
                return Ok((0, vec![]));
            }
            let candidates = matching(&self.tool_ids, partial);
            return Ok(("/run ".len(), candidates));
        }

        if line.starts_with('/') && !line.contains(' ') {
            Ok((0, matching(&self.commands, line)))
        } else {
            Ok((0, vec![]))
        }
    }
}

fn matching(words: &[String], prefix: &str) -> Vec<Pair> {
    words
        .iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| Pair {
            display: word.clone(),
            replacement: word.clone(),
        })
        .collect()
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
    },
    Logout,
    Status,
    Tools,
    Run {
        tool: String,
        primary: String,
        secondary: Option<String>,
    },
    Help,
    Quit,
    Usage(&'static str),
    Unknown(String),
}

impl ShellCommand {
    fn parse(line: &str) -> Self {
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "/login" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [email, password] => ShellCommand::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => ShellCommand::Usage("/login <email> <password>"),
            },
            // The name may contain spaces; email and password are the last two words.
            "/signup" => {
                let words: Vec<&str> = rest.split_whitespace().collect();
                match words.len() {
                    n if n >= 3 => ShellCommand::Signup {
                        name: words[..n - 2].join(" "),
                        email: words[n - 2].to_string(),
                        password: words[n - 1].to_string(),
                    },
                    _ => ShellCommand::Usage("/signup <name> <email> <password>"),
                }
            }
            "/logout" => ShellCommand::Logout,
            "/status" => ShellCommand::Status,
            "/tools" => ShellCommand::Tools,
            "/run" => match rest.split_once(char::is_whitespace) {
                Some((tool, input)) => {
                    let (primary, secondary) = match input.split_once('|') {
                        Some((primary, secondary)) => {
                            (primary.trim(), Some(secondary.trim().to_string()))
                        }
                        None => (input.trim(), None),
                    };
                    ShellCommand::Run {
                        tool: tool.to_string(),
                        primary: primary.to_string(),
                        secondary,
                    }
                }
                None => ShellCommand::Usage("/run <tool-id> <input> [| <keywords or competitors>]"),
            },
            "/help" => ShellCommand::Help,
            "/quit" | "/exit" | "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

fn print_help() {
    let lines = [
        ("/login <email> <password>", "Log in"),
        ("/signup <name> <email> <password>", "Create a free account"),
        ("/logout", "End the session"),
        ("/status", "Show plan and usage"),
        ("/tools", "List tools"),
        ("/run <tool-id> <input> [| <extra>]", "Run a tool"),
        ("/quit", "Exit"),
    ];
    for (usage, about) in lines {
        println!("  {:<38}{}", usage.bright_cyan(), about.bright_black());
    }
}

fn prompt(ctx: &AppContext) -> String {
    match ctx.sessions.current_user() {
        Some(account) => format!("{}> ", account.email),
        None => "crezia> ".to_string(),
    }
}

/// Runs the REPL until `/quit` or Ctrl-D.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Crezia SEO Tools ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/help' for commands. Try demo@crezia.com / demo123.".bright_black()
    );
    commands::status(ctx);
    println!();

    loop {
        match rl.readline(&prompt(ctx)) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match ShellCommand::parse(trimmed) {
                    ShellCommand::Login { email, password } => {
                        commands::login(ctx, &email, &password).await;
                    }
                    ShellCommand::Signup {
                        name,
                        email,
                        password,
                    } => {
                        commands::signup(ctx, &name, &email, &password).await;
                    }
                    ShellCommand::Logout => {
                        commands::logout(ctx);
                    }
                    ShellCommand::Status => {
                        commands::status(ctx);
                    }
                    ShellCommand::Tools => {
                        commands::tools(ctx);
                    }
                    ShellCommand::Run {
                        tool,
                        primary,
                        secondary,
                    } => {
                        commands::run(ctx, &tool, &primary, secondary).await;
                    }
                    ShellCommand::Help => print_help(),
                    ShellCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ShellCommand::Usage(usage) => {
                        println!("{} {}", "Usage:".yellow(), usage);
                    }
                    ShellCommand::Unknown(cmd) => {
                        println!("{}", format!("Unknown command: {}", cmd).bright_black());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!("Readline failed: {:?}", err);
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        assert_eq!(
            ShellCommand::parse("/login demo@crezia.com demo123"),
            ShellCommand::Login {
                email: "demo@crezia.com".to_string(),
                password: "demo123".to_string(),
            }
        );
        assert!(matches!(
            ShellCommand::parse("/login demo@crezia.com"),
            ShellCommand::Usage(_)
        ));
    }

    #[test]
    fn test_parse_signup_with_spaced_name() {
        assert_eq!(
            ShellCommand::parse("/signup Ada  Lovelace ada@x.com pw"),
            ShellCommand::Signup {
                name: "Ada Lovelace".to_string(),
                email: "ada@x.com".to_string(),
                password: "pw".to_string(),
            }
        );
        assert!(matches!(
            ShellCommand::parse("/signup a@x.com pw"),
            ShellCommand::Usage(_)
        ));
    }

    #[test]
    fn test_parse_run_with_secondary() {
        assert_eq!(
            ShellCommand::parse("/run content some long text | seo, tools"),
            ShellCommand::Run {
                tool: "content".to_string(),
                primary: "some long text".to_string(),
                secondary: Some("seo, tools".to_string()),
            }
        );
        assert_eq!(
            ShellCommand::parse("/run keyword-research rust"),
            ShellCommand::Run {
                tool: "keyword-research".to_string(),
                primary: "rust".to_string(),
                secondary: None,
            }
        );
        assert!(matches!(ShellCommand::parse("/run"), ShellCommand::Usage(_)));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(ShellCommand::parse("/quit"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("/tools"), ShellCommand::Tools);
        assert_eq!(
            ShellCommand::parse("/bogus"),
            ShellCommand::Unknown("/bogus".to_string())
        );
    }

    #[test]
    fn test_completion_candidates() {
        let helper = CliHelper::new();
        let tools = matching(&helper.tool_ids, "co");
        let names: Vec<&str> = tools.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["content", "competitor"]);

        let cmds = matching(&helper.commands, "/lo");
        assert_eq!(cmds.len(), 2);
    }
}
