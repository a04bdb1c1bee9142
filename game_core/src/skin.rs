//! Environment skins: which audio and video assets each one uses

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Jungle,
    Arctic,
}

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Hit,
    Miss,
    Pop,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Jungle, Environment::Arctic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Jungle => "jungle",
            Environment::Arctic => "arctic",
        }
    }

    pub fn cue_asset(&self, cue: Cue) -> &'static str {
        match (self, cue) {
            (Environment::Jungle, Cue::Hit) => "assets/hit.m4a",
            (Environment::Jungle, Cue::Miss) => "assets/miss.m4a",
            (Environment::Jungle, Cue::Pop) => "assets/pop.mp3",
            (Environment::Arctic, Cue::Hit) => "assets/arctic_hit.m4a",
            (Environment::Arctic, Cue::Miss) => "assets/arctic_miss.m4a",
            (Environment::Arctic, Cue::Pop) => "assets/arctic_pop.m4a",
        }
    }

    pub fn music_asset(&self) -> &'static str {
        match self {
            Environment::Jungle => "assets/bg.m4a",
            Environment::Arctic => "assets/arctic_bg.m4a",
        }
    }

    pub fn video_asset(&self) -> &'static str {
        match self {
            Environment::Jungle => "assets/video.mp4",
            Environment::Arctic => "assets/arctic.mp4",
        }
    }
}

impl Cue {
    pub fn volume(&self) -> f64 {
        match self {
            Cue::Hit | Cue::Miss => 0.3,
            Cue::Pop => 0.5,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jungle" => Ok(Environment::Jungle),
            "arctic" => Ok(Environment::Arctic),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}
