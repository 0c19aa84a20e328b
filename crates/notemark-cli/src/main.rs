mod app;
mod inspect;
mod ui;
mod users;

use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notemark_config::Config;
use notemark_engine::TokenKind;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{self, Read, Stdout, stdout},
    path::PathBuf,
    process,
};

use app::{App, Control};

const USAGE: &str = "Usage: notemark-cli markers [TEXT]
       notemark-cli spans <bold|italic|mention> [TEXT]
       notemark-cli render [TEXT]
       notemark-cli edit [USERS_FILE]

TEXT is read from stdin when omitted.";

#[derive(Debug, PartialEq)]
enum Command {
    Markers(Option<String>),
    Spans(TokenKind, Option<String>),
    Render(Option<String>),
    Edit(Option<PathBuf>),
}

impl Command {
    fn from_args(args: &[String]) -> Result<Self> {
        let text = |i: usize| args.get(i).cloned();
        let command = match args.first().map(String::as_str) {
            Some("markers") => Command::Markers(text(1)),
            Some("render") => Command::Render(text(1)),
            Some("spans") => {
                let kind = args
                    .get(1)
                    .ok_or_else(|| anyhow!("spans needs a kind"))?
                    .parse()?;
                Command::Spans(kind, text(2))
            }
            Some("edit") => Command::Edit(args.get(1).map(PathBuf::from)),
            Some(other) => return Err(anyhow!("unknown command `{other}`")),
            None => return Err(anyhow!("no command given")),
        };

        let max_args = match command {
            Command::Spans(..) => 3,
            _ => 2,
        };
        if args.len() > max_args {
            return Err(anyhow!("too many arguments"));
        }
        Ok(command)
    }
}

/// The given text, or all of stdin minus its trailing newline.
fn input_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let command = match Command::from_args(&args[1..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    match command {
        Command::Markers(text) => print!("{}", inspect::markers(&input_text(text)?)),
        Command::Spans(kind, text) => print!("{}", inspect::spans(kind, &input_text(text)?)),
        Command::Render(text) => {
            println!("{}", inspect::render(&input_text(text)?, &config.render))
        }
        Command::Edit(users_path) => {
            let users = match users_path.or(config.users_path) {
                Some(path) => users::load_users(&path)?,
                None => {
                    log::info!("No user directory configured; mentions will have no suggestions");
                    Vec::new()
                }
            };
            let mut app = App::new(users, config.mentions.search_limit);
            edit(&mut app)?;
            println!("{}", app.note_text());
        }
    }

    Ok(())
}

fn edit(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Control::Quit
        {
            return Ok(());
        }
    }
}
