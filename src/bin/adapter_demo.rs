// Adapter demo: incompatible players behind one interface.

use colored::Colorize;
use pattern_catalog::structural::adapter::{
    AudioPlayer, GenericAdapter, MediaPlayer, Mp3Adapter, VlcAdapter, VlcPlayer,
};

fn play_media(player: &dyn MediaPlayer, file: &str) {
    println!("{}", player.play(file));
}

fn main() {
    println!("{}", "=== Adapter (Trait Objects) ===".bold());
    play_media(&VlcAdapter::default(), "video.mp4");
    play_media(&Mp3Adapter::default(), "song.mp3");

    println!();
    println!("{}", "=== Adapter (Generics) ===".bold());
    play_media(&GenericAdapter::new(VlcPlayer), "video.mkv");

    println!();
    println!("{}", "=== Player by Extension ===".bold());
    let player = AudioPlayer;
    for file in ["beyond_the_horizon.mp3", "alone.mp4", "far_far_away.mkv", "mind_me.avi"] {
        match player.play(file) {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }
}
