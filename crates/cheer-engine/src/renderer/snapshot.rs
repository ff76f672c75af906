use serde::Serialize;

use crate::systems::text::MessagePanel;

/// One image to place on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteDraw {
    /// Asset path of the image.
    pub url: String,
    /// Left edge in viewport pixels.
    pub left: f32,
    /// Top edge in viewport pixels.
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything the host page needs to draw one frame.
///
/// Rebuilt from scratch after every update; the host only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub sprites: Vec<SpriteDraw>,
    /// Message box, present only while a message is shown.
    pub message: Option<MessagePanel>,
    /// Images the page should load ahead of time.
    pub preload: Vec<String>,
}

impl FrameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.message = None;
        self.preload.clear();
    }

    pub fn push(&mut self, draw: SpriteDraw) {
        self.sprites.push(draw);
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }

    /// Serialize for the host page.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything() {
        let mut snap = FrameSnapshot::new();
        snap.push(SpriteDraw {
            url: "./overworld/down/311.png".into(),
            left: 0.0,
            top: 0.0,
            width: 64.0,
            height: 64.0,
        });
        snap.preload.push("./overworld/up/311.png".into());
        snap.message = Some(MessagePanel { lines: vec!["Hi".into()], width: 100.0 });
        snap.clear();
        assert_eq!(snap, FrameSnapshot::default());
    }

    #[test]
    fn json_shape() {
        let mut snap = FrameSnapshot::new();
        snap.push(SpriteDraw {
            url: "./overworld/left/frame2/311.png".into(),
            left: 10.0,
            top: 20.0,
            width: 64.0,
            height: 64.0,
        });
        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sprites"][0]["url"], "./overworld/left/frame2/311.png");
        assert_eq!(value["sprites"][0]["left"], 10.0);
        assert!(value["message"].is_null());
    }
}
