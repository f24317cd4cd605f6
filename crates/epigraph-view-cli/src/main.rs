mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use epigraph_view_config::Config;
use epigraph_view_engine::rendering::snapshot;
use epigraph_view_engine::{EpigraphRecord, EpigraphView, io};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

fn init_logging(interactive: bool) {
    // stderr shares the terminal with the TUI, so stay quiet there unless RUST_LOG asks
    let default_level = if interactive {
        log::LevelFilter::Off
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

/// Prints a record (`.json`) or bare transcription markup as plain text.
fn dump(path: &Path) -> Result<()> {
    let record = if path.extension().is_some_and(|ext| ext == "json") {
        io::load_record(path)?
    } else {
        EpigraphRecord {
            text: std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            ..Default::default()
        }
    };
    let view = EpigraphView::from_record(&record);

    if let Some(title) = &view.title {
        println!("# {title}\n");
    }
    println!("{}", snapshot::outline(&view.transcription));

    for (k, translation) in view.translations.iter().enumerate() {
        println!("\n## {}\n", translation.heading(k));
        for line in translation.lines.lines() {
            println!("{:<3} | {}", line.number, line.text);
        }
        for note in &translation.notes {
            let range = note.range.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
            println!("[{range}] {}", note.text);
        }
    }

    if !view.apparatus_notes.is_empty() {
        println!("\n## Apparatus\n");
        for note in &view.apparatus_notes {
            let range = note.range.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
            println!("[{range}] {}", note.text);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Non-interactive outline dump
    if args.len() == 3 && args[1] == "--dump" {
        init_logging(false);
        return dump(Path::new(&args[2]));
    }

    init_logging(true);

    // Determine records path from CLI args or config file
    let config_path = Config::config_path();
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [records-folder-path] | --dump <file>", args[0]);
            process::exit(1);
        }
    };
    let show_markers = config.as_ref().is_none_or(|c| c.show_markers);

    let (records_path, from_config) = match (args.len(), &config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.records_path.clone(), true),
        (1, None) => {
            eprintln!("Error: No records path provided and no config file found");
            eprintln!("Usage: {} <records-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [records-folder-path] | --dump <file>", args[0]);
            process::exit(1);
        }
    };

    // Validate records directory using engine
    if let Err(e) = io::validate_records_dir(&records_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Records path '{}'{} is invalid: {e}",
            records_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(records_path, show_markers)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app, config.as_mut());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut config: Option<&mut Config>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
                KeyCode::Tab => app.cycle_focus(true),
                KeyCode::BackTab => app.cycle_focus(false),
                KeyCode::Enter => app.activate(),
                KeyCode::Char('m') => {
                    app.toggle_markers();
                    // Only an existing config file remembers the toggle
                    if let Some(config) = config.as_deref_mut()
                        && let Err(e) = config.save_show_markers(app.show_markers)
                    {
                        log::warn!("Failed to save marker setting: {e}");
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                app.hover(mouse.column, mouse.row);
            }
            Event::FocusLost => {
                app.highlights.leave();
            }
            _ => {}
        }
    }
}
