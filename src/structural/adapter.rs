// Adapter Pattern: third-party players behind the MediaPlayer interface.

use std::path::Path;

use crate::error::{PatternError, Result};
use crate::registry::Registry;

/// What `AudioPlayer` hands a file to.
pub trait MediaPlayer {
    fn play(&self, filename: &str) -> String;
}

// Third-party decoders. Neither speaks `MediaPlayer`.

#[derive(Debug, Clone, Copy, Default)]
pub struct VlcPlayer;

impl VlcPlayer {
    pub fn play_vlc(&self, file_path: &str) -> String {
        format!("Playing VLC: {file_path}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mp3Player;

impl Mp3Player {
    pub fn play_mp3(&self, file_name: &str) -> String {
        format!("Playing MP3: {file_name}")
    }
}

// One wrapper per decoder, translating `play` into its native call.

#[derive(Debug, Default)]
pub struct VlcAdapter {
    player: VlcPlayer,
}

impl MediaPlayer for VlcAdapter {
    fn play(&self, filename: &str) -> String {
        self.player.play_vlc(filename)
    }
}

#[derive(Debug, Default)]
pub struct Mp3Adapter {
    player: Mp3Player,
}

impl MediaPlayer for Mp3Adapter {
    fn play(&self, filename: &str) -> String {
        self.player.play_mp3(filename)
    }
}

// Any decoder exposing `play_vlc` can be wrapped without a dedicated type.

pub trait PlayVlc {
    fn play_vlc(&self, path: &str) -> String;
}

impl PlayVlc for VlcPlayer {
    fn play_vlc(&self, path: &str) -> String {
        VlcPlayer::play_vlc(self, path)
    }
}

pub struct GenericAdapter<T> {
    inner: T,
}

impl<T: PlayVlc> GenericAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: PlayVlc> MediaPlayer for GenericAdapter<T> {
    fn play(&self, filename: &str) -> String {
        self.inner.play_vlc(filename)
    }
}

fn vlc() -> Box<dyn MediaPlayer> {
    Box::new(VlcAdapter::default())
}

fn mp3() -> Box<dyn MediaPlayer> {
    Box::new(Mp3Adapter::default())
}

/// Player selection by file extension.
pub static MEDIA_PLAYERS: Registry<dyn MediaPlayer> =
    Registry::new("media format", &[("mp4", vlc), ("mkv", vlc), ("mp3", mp3)]);

/// Plays any file whose extension has a registered adapter.
#[derive(Debug, Default)]
pub struct AudioPlayer;

impl AudioPlayer {
    pub fn play(&self, filename: &str) -> Result<String> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| PatternError::unsupported(MEDIA_PLAYERS.kind(), filename))?;
        let player = MEDIA_PLAYERS.resolve(extension)?;
        Ok(player.play(filename))
    }
}
