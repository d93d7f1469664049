//! UI sound effects.
//!
//! Every call starts a fresh audio element so overlapping clicks all play.
//! Playback failures (missing asset, autoplay policy) are ignored.

use web_sys::HtmlAudioElement;

use crate::config::sounds;

fn play(src: &str, volume: f64) {
    match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => {
            audio.set_volume(volume);
            let _ = audio.play();
        }
        Err(_) => log::debug!("cannot create audio element for {}", src),
    }
}

/// Mouse click on a desktop control.
pub fn play_click() {
    play(sounds::CLICK, sounds::CLICK_VOLUME);
}

/// Key press in the terminal.
pub fn play_key() {
    play(sounds::KEY, sounds::KEY_VOLUME);
}
