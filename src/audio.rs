use crate::prelude::*;

/// Audio port for builds without sound assets: reports requests to the log.
#[derive(Debug, Default)]
pub struct AudioLog {
    playing: Option<Track>,
}

impl AudioPort for AudioLog {
    fn play_loop(&mut self, track: Track) {
        if self.playing == Some(track) {
            return;
        }
        log::info!("Playing loop {:?}", track.id());
        self.playing = Some(track);
    }

    fn stop(&mut self) {
        if let Some(track) = self.playing.take() {
            log::info!("Stopped {:?}", track.id());
        }
    }

    fn play_once(&mut self, cue: Cue) {
        log::info!("Playing cue {:?}", cue.id());
    }
}
