use crate::jukebox::Jukebox;
use crate::mpris::MprisHandle;

pub fn update_mpris(mpris: &MprisHandle, jukebox: &Jukebox) {
    let active = jukebox.active().and_then(|id| jukebox.track(id));

    match active {
        Some(track) => {
            let meta = track.display_meta();
            let length = meta.duration.map(|d| d.as_micros() as i64);
            mpris.set_track(
                Some(meta.title.clone()),
                Some(meta.artist.clone()),
                length,
            );
        }
        None => mpris.set_track(None, None, None),
    }
    mpris.set_playback(jukebox.play_state());
}
