use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;

use numguess::{
    app::{Config, GuessApp},
    constants::{
        gameplay::{DEFAULT_MAX, DEFAULT_MIN},
        saves::DEFAULT_SAVE_FILE,
    },
    output::{self, Screen},
    saves::{fs::KeyFile, Memory, ScoreStore},
};

/// Guess the secret number in as few tries as you can.
#[derive(Parser, Debug)]
#[command(name = "numguess", version)]
struct Args {
    /// Lowest possible secret
    #[arg(long, default_value_t = DEFAULT_MIN, allow_hyphen_values = true)]
    min: i64,
    /// Highest possible secret
    #[arg(long, default_value_t = DEFAULT_MAX, allow_hyphen_values = true)]
    max: i64,
    /// Where to keep the best score
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,
    /// Don't load or save the best score
    #[arg(long, conflicts_with = "save_file")]
    no_save: bool,
    /// Seed the secret-number generator, for repeatable games
    #[arg(long)]
    seed: Option<u64>,
}

/// Something the player typed.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Guess(&'a str),
    NewGame,
    Help,
    Quit,
    Nothing,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Nothing,
            "n" | "new" => Self::NewGame,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Guess(line),
        }
    }
}

fn open_store(args: &Args) -> Box<dyn ScoreStore> {
    if args.no_save {
        return Box::new(Memory::new());
    }
    match KeyFile::open(&args.save_file) {
        Ok(kf) => Box::new(kf),
        Err(e) => {
            log::error!("couldn't open {}: {}", args.save_file.display(), e);
            eprintln!("Best score won't be saved: {}", e);
            Box::new(Memory::new())
        }
    }
}

fn show_game<S: ScoreStore>(screen: &mut dyn Screen, app: &GuessApp<S>) -> io::Result<()> {
    let (min, max) = app.bounds();
    screen.line(&output::render_banner(min, max))?;
    screen.line(&output::render_status(app.tries(), app.best()))
}

fn play<S: ScoreStore>(screen: &mut dyn Screen, mut app: GuessApp<S>) -> io::Result<()> {
    show_game(screen, &app)?;
    screen.lines(&output::render_help())?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        screen.prompt("> ")?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // EOF
            screen.line(&[])?;
            return Ok(());
        }
        match Command::parse(&line) {
            Command::Nothing => (),
            Command::Quit => return Ok(()),
            Command::Help => screen.lines(&output::render_help())?,
            Command::NewGame => {
                app.new_game();
                show_game(screen, &app)?;
            }
            Command::Guess(text) => {
                let feedback = app.input(text);
                screen.lines(&output::render_feedback(&feedback))?;
                screen.lines(&output::render_history(&app.history()))?;
                screen.line(&output::render_status(app.tries(), app.best()))?;
                if !app.accepting_input() {
                    screen.line(&[output::Text::of("Type `new` to play again, or `quit` to leave.")])?;
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    let config = Config {
        min: args.min,
        max: args.max,
        seed: args.seed,
    };
    let app = match GuessApp::new(config, open_store(&args)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut screen = output::get();
    match play(screen.as_mut(), app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
