mod audio;
mod config;
mod jukebox;
mod library;
mod mpris;
mod resolver;
mod runtime;
mod track;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
