use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::jukebox::{Jukebox, PlayState};
use crate::mpris::{ControlCmd, MprisHandle};
use crate::resolver::ResolveOutcome;
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;
use crate::view::ViewSignal;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Cursor position in the playlist; independent of the active track.
    pub selected: usize,
    /// Most recent notice from the jukebox, shown in the status line.
    pub last_notice: Option<String>,
    needs_redraw: bool,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `jukebox`.
    pub fn new(jukebox: &Jukebox) -> Self {
        Self {
            selected: jukebox.active_index().unwrap_or(0),
            last_notice: None,
            needs_redraw: true,
        }
    }

    fn clamp_selected(&mut self, jukebox: &Jukebox) {
        let len = jukebox.tracks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Main terminal event loop: drains resolver completions and MPRIS control
/// commands, handles input and redraws when the jukebox reports a change.
/// Returns `Ok(())` when shutdown is requested.
#[allow(clippy::too_many_arguments)]
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    jukebox: &mut Jukebox,
    signal: &Rc<ViewSignal>,
    resolve_rx: Option<&mpsc::Receiver<ResolveOutcome>>,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply resolver completions on this thread; track state is only
        // ever mutated here.
        if let Some(rx) = resolve_rx {
            while let Ok(outcome) = rx.try_recv() {
                jukebox.apply_resolution(outcome);
            }
        }

        if signal.take_dirty() {
            state.needs_redraw = true;
            update_mpris(mpris, jukebox);
        }
        if let Some(notice) = signal.take_notice() {
            state.last_notice = Some(notice);
            state.needs_redraw = true;
        }

        if state.needs_redraw {
            state.clamp_selected(jukebox);
            terminal.draw(|f| {
                ui::draw(
                    f,
                    jukebox,
                    state.selected,
                    state.last_notice.as_deref(),
                    &settings.ui,
                    settings.controls.volume_step,
                )
            })?;
            state.needs_redraw = false;
        }

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, jukebox, state) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, jukebox, control_tx, state) {
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one control command; returns true on quit.
fn handle_control_cmd(cmd: ControlCmd, jukebox: &mut Jukebox, state: &mut EventLoopState) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if jukebox.active().is_none() {
                play_selected(jukebox, state);
            } else {
                let _ = jukebox.play(None);
            }
        }
        ControlCmd::Pause => {
            if jukebox.play_state() == PlayState::Playing {
                jukebox.pause();
            }
        }
        ControlCmd::PlayPause => match jukebox.play_state() {
            PlayState::Playing => {
                jukebox.pause();
            }
            PlayState::Paused => {
                let _ = jukebox.play(None);
            }
            PlayState::Stopped => {
                if jukebox.active().is_some() {
                    let _ = jukebox.play(None);
                } else {
                    play_selected(jukebox, state);
                }
            }
        },
        ControlCmd::Stop => {
            jukebox.stop();
        }
        ControlCmd::Next => skip_and_follow(jukebox, state, 1),
        ControlCmd::Prev => skip_and_follow(jukebox, state, -1),
    }

    false
}

/// Skip in `direction` and, when something was playing, keep it playing on
/// the new active track. The cursor follows the active track.
fn skip_and_follow(jukebox: &mut Jukebox, state: &mut EventLoopState, direction: i64) {
    let was_playing = jukebox.play_state() == PlayState::Playing;
    if jukebox.skip(direction).is_none() {
        return;
    }
    if was_playing {
        let _ = jukebox.play(None);
    }
    if let Some(index) = jukebox.active_index() {
        state.selected = index;
        state.needs_redraw = true;
    }
}

fn play_selected(jukebox: &mut Jukebox, state: &EventLoopState) {
    if let Some(track) = jukebox.tracks().get(state.selected) {
        let id = track.id;
        let _ = jukebox.play(Some(id));
    }
}

/// Handle one key press; returns true on quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    jukebox: &mut Jukebox,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    let len = jukebox.tracks().len();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 {
                state.selected = (state.selected + 1) % len;
                state.needs_redraw = true;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if len > 0 {
                state.selected = (state.selected + len - 1) % len;
                state.needs_redraw = true;
            }
        }
        KeyCode::Enter => play_selected(jukebox, state),
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('x') => {
            let _ = control_tx.send(ControlCmd::Stop);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('s') => {
            jukebox.shuffle();
            if let Some(index) = jukebox.active_index() {
                state.selected = index;
            }
            state.needs_redraw = true;
        }
        KeyCode::Char('d') => {
            if let Some(track) = jukebox.tracks().get(state.selected) {
                let id = track.id;
                jukebox.remove_track(id);
                state.clamp_selected(jukebox);
                state.needs_redraw = true;
            }
        }
        KeyCode::Char('m') => {
            jukebox.set_volume(0);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let step = i32::from(settings.controls.volume_step);
            jukebox.set_volume(i32::from(jukebox.volume()) + step);
        }
        KeyCode::Char('-') => {
            let step = i32::from(settings.controls.volume_step);
            jukebox.set_volume(i32::from(jukebox.volume()) - step);
        }
        _ => {}
    }

    false
}
