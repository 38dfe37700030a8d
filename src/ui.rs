//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It is
//! one implementation of the presentation side; all playlist state comes
//! straight from the jukebox.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::config::UiSettings;
use crate::jukebox::{Jukebox, PlayState};
use crate::track::Readiness;

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// One playlist row: active marker, title, artist, duration/readiness tail.
fn row_text(jukebox: &Jukebox, index: usize) -> String {
    let track = &jukebox.tracks()[index];
    let meta = track.display_meta();

    let marker = if jukebox.active() == Some(track.id) {
        match jukebox.play_state() {
            PlayState::Playing => "▶",
            PlayState::Paused => "‖",
            PlayState::Stopped => "·",
        }
    } else {
        " "
    };

    let tail = match track.readiness() {
        Readiness::Pending => "resolving…".to_string(),
        Readiness::Failed => "unavailable".to_string(),
        Readiness::Ready => meta
            .duration
            .map(format_mmss)
            .unwrap_or_else(|| "--:--".to_string()),
    };

    format!("{marker} {} — {}  [{tail}]", meta.title, meta.artist)
}

fn status_text(jukebox: &Jukebox, notice: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match jukebox.play_state() {
        PlayState::Stopped => "Stopped",
        PlayState::Playing => "Playing",
        PlayState::Paused => "Paused",
    };
    parts.push(state.to_string());

    if let Some(track) = jukebox.active().and_then(|id| jukebox.track(id)) {
        let meta = track.display_meta();
        parts.push(format!("Song: {} — {}", meta.title, meta.artist));
    }

    if jukebox.volume() == 0 {
        parts.push("Volume: muted".to_string());
    } else {
        parts.push(format!("Volume: {}%", jukebox.volume()));
    }

    if let Some(notice) = notice {
        parts.push(format!("! {notice}"));
    }

    parts.join(" • ")
}

fn controls_text(volume_step: u8) -> String {
    [
        "[j/k] up/down",
        "[enter] play selected",
        "[space/p] play/pause",
        "[x] stop",
        "[h/l] prev/next",
        "[s] shuffle",
        "[d] remove",
        "[m] mute",
        &format!("[-/+] volume ±{volume_step}"),
        "[q] quit",
    ]
    .join(" | ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    jukebox: &Jukebox,
    selected: usize,
    notice: Option<&str>,
    ui_settings: &UiSettings,
    volume_step: u8,
) {
    let constraints = if ui_settings.show_controls_help {
        vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" wurli ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Playlist
    let items: Vec<ListItem> = (0..jukebox.tracks().len())
        .map(|i| ListItem::new(row_text(jukebox, i)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if !jukebox.tracks().is_empty() {
        state.select(Some(selected.min(jukebox.tracks().len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);

    // Status
    let status = Paragraph::new(status_text(jukebox, notice))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    // Controls help
    if ui_settings.show_controls_help {
        let footer = Paragraph::new(controls_text(volume_step))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[3]);
    }
}
