// Insects offered on the select screen. The key is what the game stores as `SpriteRef`.

use crate::model::SpriteRef;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDef {
    pub key: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const SPRITES: &[SpriteDef] = &[
    SpriteDef { key: "fly", name: "Fly", glyph: "🪰" },
    SpriteDef { key: "mosquito", name: "Mosquito", glyph: "🦟" },
    SpriteDef { key: "spider", name: "Spider", glyph: "🕷" },
    SpriteDef { key: "roach", name: "Roach", glyph: "🪳" },
];

impl SpriteDef {
    pub fn sprite_ref(&self) -> SpriteRef {
        SpriteRef(self.key.to_string())
    }
}

pub fn lookup(sprite: Option<&SpriteRef>) -> SpriteDef {
    sprite
        .and_then(|s| SPRITES.iter().find(|d| d.key == s.0))
        .copied()
        .unwrap_or(SPRITES[0])
}
