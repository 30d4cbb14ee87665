//! Background music toggle. Playback problems (no output device, missing
//! track, autoplay refused by the browser) are logged and otherwise ignored:
//! the toggle always flips.

use log::{debug, warn};

pub const VOLUME: f32 = 0.2;

/// Track played in a loop while the toggle is on. Looked up next to the
/// working directory on native and relative to the page on the web.
pub const TRACK: &str = "assets/background.mp3";

#[derive(Default)]
pub struct BackgroundAudio {
    enabled: bool,
    player: Option<Player>,
}

impl BackgroundAudio {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the toggle and starts or pauses playback. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.play();
        } else if let Some(player) = &self.player {
            player.pause();
        }
        debug!("Background audio {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    fn play(&mut self) {
        if self.player.is_none() {
            match Player::open(TRACK) {
                Ok(player) => self.player = Some(player),
                Err(e) => {
                    warn!("Background audio unavailable: {e}");
                    return;
                }
            }
        }
        if let Some(player) = &self.player {
            player.play();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct Player {
    // the sink goes silent once the stream is dropped
    _stream: rodio::OutputStream,
    sink: rodio::Sink,
}

#[cfg(not(target_arch = "wasm32"))]
impl Player {
    fn open(path: &str) -> Result<Self, String> {
        use rodio::Source as _;

        let file = std::fs::File::open(path).map_err(|e| format!("{path}: {e}"))?;
        let source = rodio::Decoder::new(std::io::BufReader::new(file))
            .map_err(|e| format!("{path}: {e}"))?;
        let (stream, handle) = rodio::OutputStream::try_default().map_err(|e| e.to_string())?;
        let sink = rodio::Sink::try_new(&handle).map_err(|e| e.to_string())?;
        sink.set_volume(VOLUME);
        sink.pause();
        sink.append(source.repeat_infinite());
        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    fn play(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }
}

#[cfg(target_arch = "wasm32")]
struct Player {
    element: web_sys::HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl Player {
    fn open(src: &str) -> Result<Self, String> {
        let element = web_sys::HtmlAudioElement::new_with_src(src).map_err(|e| format!("{e:?}"))?;
        element.set_volume(f64::from(VOLUME));
        element.set_loop(true);
        Ok(Self { element })
    }

    fn play(&self) {
        match self.element.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    // usually the autoplay policy, the user can click again
                    warn!("Audio playback rejected by the browser: {e:?}");
                }
            }),
            Err(e) => warn!("Audio playback failed: {e:?}"),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            warn!("Audio pause failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_muted() {
        assert!(!BackgroundAudio::default().is_enabled());
    }

    #[test]
    fn toggle_flips_even_without_a_track_or_device() {
        let mut audio = BackgroundAudio::default();
        assert!(audio.toggle());
        assert!(audio.is_enabled());
        assert!(!audio.toggle());
        assert!(!audio.is_enabled());
        assert!(audio.toggle());
    }
}
