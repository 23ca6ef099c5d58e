use crosses::build_info;
use crosses::constants::INPUT_POLL_MS;
use crosses::game::Game;
use crosses::input::{handle_game_input, InputResult};
use crosses::ui::game_scene::render_game_scene;
use crosses::ui::setup_scene::SetupScreen;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

enum Screen {
    Setup,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "crosses {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Crosses - Terminal Noughts and Crosses\n");
                println!("Usage: crosses [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'crosses --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut setup_screen = SetupScreen::new();
    let mut game: Option<Game> = None;
    let mut current_screen = Screen::Setup;

    loop {
        match current_screen {
            Screen::Setup => {
                terminal.draw(|f| {
                    let area = f.size();
                    setup_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Up => setup_screen.navigate_up(),
                            KeyCode::Down => setup_screen.navigate_down(),
                            KeyCode::Left => setup_screen.adjust(-1),
                            KeyCode::Right => setup_screen.adjust(1),
                            KeyCode::Enter => match Game::new(setup_screen.config()) {
                                Ok(new_game) => {
                                    game = Some(new_game);
                                    current_screen = Screen::Game;
                                }
                                Err(e) => {
                                    setup_screen.validation_error = Some(e.to_string());
                                }
                            },
                            KeyCode::Esc | KeyCode::Char('q') => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let Some(active_game) = game.as_mut() else {
                    current_screen = Screen::Setup;
                    continue;
                };

                terminal.draw(|f| {
                    let area = f.size();
                    render_game_scene(f, area, active_game);
                })?;

                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match handle_game_input(key_event, active_game, &mut rng) {
                            InputResult::Continue => {}
                            InputResult::NewGame => {
                                game = None;
                                current_screen = Screen::Setup;
                            }
                            InputResult::Quit => break,
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
