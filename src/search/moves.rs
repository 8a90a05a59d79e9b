//! Single-channel palette perturbations.

use color_model::Channel;

use crate::models::{Palette, PALETTE_SIZE};

/// One candidate perturbation: add `delta` to `channel` of the color in slot
/// `palette_index`. Stateless; apply it to get a new palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub palette_index: usize,
    pub channel: Channel,
    pub delta: i32,
}

impl Move {
    /// New palette with the move applied. The channel is clamped into
    /// `0..=255` and the whole color is rebuilt, so every derived
    /// representation matches the new channels.
    pub fn apply(&self, palette: &Palette) -> Palette {
        let color = palette[self.palette_index];
        let value = (i32::from(color.channel(self.channel)) + self.delta).clamp(0, 255) as u8;
        palette.with_color(self.palette_index, color.with_channel(self.channel, value))
    }
}

/// All `±step` single-channel moves of `palette`, skipping any that would
/// leave `0..=255`. At most 5 colors x 3 channels x 2 directions = 30 moves;
/// a zero step yields none.
pub fn neighbors(palette: &Palette, step: u8) -> Vec<Move> {
    if step == 0 {
        return Vec::new();
    }
    let step = i32::from(step);
    let mut moves = Vec::with_capacity(PALETTE_SIZE * Channel::ALL.len() * 2);

    for (palette_index, color) in palette.iter().enumerate() {
        for channel in Channel::ALL {
            let value = i32::from(color.channel(channel));
            for delta in [step, -step] {
                if (0..=255).contains(&(value + delta)) {
                    moves.push(Move {
                        palette_index,
                        channel,
                        delta,
                    });
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_model::Color;

    fn mid_palette() -> Palette {
        Palette::new([Color::from_rgb(128, 128, 128); PALETTE_SIZE])
    }

    #[test]
    fn test_interior_palette_has_all_moves() {
        assert_eq!(neighbors(&mid_palette(), 10).len(), 30);
    }

    #[test]
    fn test_out_of_bounds_moves_are_omitted() {
        let palette = Palette::new([
            Color::from_rgb(0, 0, 0),
            Color::from_rgb(255, 255, 255),
            Color::from_rgb(5, 128, 250),
            Color::from_rgb(128, 128, 128),
            Color::from_rgb(128, 128, 128),
        ]);
        let moves = neighbors(&palette, 10);
        // black and white: one direction per channel; slot 2: R only up, B only down
        assert_eq!(moves.len(), 3 + 3 + 4 + 6 + 6);
        for mv in &moves {
            let value = i32::from(palette[mv.palette_index].channel(mv.channel)) + mv.delta;
            assert!((0..=255).contains(&value), "{mv:?} leaves bounds");
        }
    }

    #[test]
    fn test_zero_step_has_no_moves() {
        assert!(neighbors(&mid_palette(), 0).is_empty());
    }

    #[test]
    fn test_apply_changes_one_channel_only() {
        let palette = mid_palette();
        let mv = Move {
            palette_index: 2,
            channel: Channel::Blue,
            delta: -30,
        };
        let moved = mv.apply(&palette);
        assert_eq!(moved[2].rgb(), [128, 128, 98]);
        assert_eq!(moved[2].oklab(), Color::from_rgb(128, 128, 98).oklab());
        for i in [0, 1, 3, 4] {
            assert_eq!(moved[i], palette[i]);
        }
        // The source palette is untouched
        assert_eq!(palette[2].rgb(), [128, 128, 128]);
    }

    #[test]
    fn test_apply_clamps() {
        let palette = mid_palette();
        let mv = Move {
            palette_index: 0,
            channel: Channel::Red,
            delta: 500,
        };
        assert_eq!(mv.apply(&palette)[0].r(), 255);
    }
}
