//! Embedded image assets.
//!
//! All assets are compiled into the binary; a missing file is a build-time
//! mistake surfaced as a runtime lookup failure during initialization.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::{AssetError, GameResult};

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Background,
    Player,
    Ball,
}

impl Asset {
    pub const fn path(self) -> &'static str {
        match self {
            Asset::Background => "background.png",
            Asset::Player => "player.png",
            Asset::Ball => "ball.png",
        }
    }

    pub fn get_bytes(self) -> GameResult<Cow<'static, [u8]>> {
        Data::get(self.path())
            .map(|file| file.data)
            .ok_or_else(|| AssetError::NotFound(self.path().to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_assets_embedded() {
        for asset in [Asset::Background, Asset::Player, Asset::Ball] {
            let bytes = asset.get_bytes().expect("asset should be embedded");
            assert!(!bytes.is_empty());
        }
    }
}
