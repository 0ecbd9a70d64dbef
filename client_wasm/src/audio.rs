//! Fire-and-forget audio cues.

use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// One reusable sound effect backed by an `HtmlAudioElement`
pub struct SoundCue {
    element: HtmlAudioElement,
}

impl SoundCue {
    fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|e| JsValue::from_str(&format!("failed to load audio {}: {:?}", src, e)))?;
        Ok(Self { element })
    }

    /// Rewind to the start and request playback. The playback promise is
    /// intentionally not awaited; overlapping requests are allowed and cut
    /// the previous playback short.
    pub fn play(&self) {
        self.element.set_current_time(0.0);
        let _ = self.element.play();
    }
}

pub struct SoundBank {
    pub hit: SoundCue,
    pub score: SoundCue,
}

impl SoundBank {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            hit: SoundCue::new("pong.ogg")?,
            score: SoundCue::new("score.ogg")?,
        })
    }
}
