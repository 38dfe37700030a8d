use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioOutput;
use crate::jukebox::{Jukebox, JukeboxOptions};
use crate::mpris::ControlCmd;
use crate::view::{SignalPresenter, ViewSignal};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let output = RodioOutput::open_default()?;
    let signal = ViewSignal::new();
    let presenter = SignalPresenter::new(signal.clone());

    let options = JukeboxOptions {
        initial_volume: settings.playback.initial_volume,
        restart_on_reselect: settings.playback.restart_on_reselect,
        providers: settings.remote.providers.clone(),
    };
    let mut jukebox = Jukebox::new(Box::new(output), Box::new(presenter), options);

    let resolve_rx = startup::wire_resolver(&mut jukebox, &settings);
    startup::seed_playlist(&mut jukebox, &settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &jukebox);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = {
        let mut state = event_loop::EventLoopState::new(&jukebox);
        event_loop::run(
            &mut terminal,
            &settings,
            &mut jukebox,
            &signal,
            resolve_rx.as_ref(),
            &mpris,
            &control_tx,
            &control_rx,
            &mut state,
        )
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
