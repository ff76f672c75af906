use serde::Serialize;

/// Root directory of the overworld sprite sheets, relative to the page.
pub const OVERWORLD_ROOT: &str = "./overworld";

/// Four-way facing. Governs movement and which image set is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// All facings, in the order the random pick draws from.
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Directory name used in asset paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Sprite component: which overworld image an entity shows.
///
/// Each dex number has eight images: one per facing, each with a standing
/// frame and an alternate walking frame under `frame2/`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Pokedex number naming the image files.
    pub dex: u32,
    /// Facing used to pick the image directory.
    pub facing: Facing,
    /// Show the alternate walking frame.
    pub frame2: bool,
}

impl SpriteComponent {
    pub fn new(dex: u32) -> Self {
        Self {
            dex,
            facing: Facing::Down,
            frame2: false,
        }
    }

    /// Asset path of the current image, `./overworld/{facing}/{frame2/}{dex}.png`.
    pub fn image_url(&self) -> String {
        overworld_url(self.dex, self.facing, self.frame2)
    }

    /// Every image this sprite can show, for preloading.
    pub fn preload_urls(&self) -> Vec<String> {
        let mut urls = Vec::with_capacity(Facing::ALL.len() * 2);
        for facing in Facing::ALL {
            urls.push(overworld_url(self.dex, facing, false));
            urls.push(overworld_url(self.dex, facing, true));
        }
        urls
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(0)
    }
}

fn overworld_url(dex: u32, facing: Facing, frame2: bool) -> String {
    let frame = if frame2 { "frame2/" } else { "" };
    format!("{}/{}/{}{}.png", OVERWORLD_ROOT, facing.as_str(), frame, dex)
}
