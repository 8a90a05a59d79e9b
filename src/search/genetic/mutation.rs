use color_model::Channel;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Palette;

/// Share of mutating genes that get a small jitter rather than a reset.
const JITTER_SHARE: f64 = 0.7;

/// Mutate `palette` in place.
///
/// Each gene mutates with `probability`. A mutating gene is usually jittered:
/// every channel independently moves by up to `±amount` with the same
/// `probability`. Otherwise one random channel is reset to a random value.
/// Channels are clamped and each changed color is rebuilt in full.
///
/// `probability` is clamped to `[0, 1]`; NaN counts as zero.
pub fn mutate<R: Rng + ?Sized>(palette: &mut Palette, probability: f64, amount: u8, rng: &mut R) {
    let probability = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    let amount = i32::from(amount);

    for color in palette.colors_mut().iter_mut() {
        if !rng.gen_bool(probability) {
            continue;
        }
        if rng.gen_bool(JITTER_SHARE) {
            for channel in Channel::ALL {
                if rng.gen_bool(probability) {
                    let shifted =
                        i32::from(color.channel(channel)) + rng.gen_range(-amount..=amount);
                    *color = color.with_channel(channel, shifted.clamp(0, 255) as u8);
                }
            }
        } else if let Some(&channel) = Channel::ALL.choose(rng) {
            *color = color.with_channel(channel, rng.gen());
        }
    }
}
