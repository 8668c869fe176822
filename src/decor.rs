// Random placement and timing for the floating hearts and twinkling sparkles
// the page lays over its hero section. Generated once per page load.

use rand::Rng;
use wasm_bindgen::prelude::*;

pub const HEART_COUNT: u32 = 15;
pub const SPARKLE_COUNT: u32 = 20;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloatingHeart {
    pub left_percent: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl FloatingHeart {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> FloatingHeart {
        FloatingHeart {
            left_percent: rng.gen::<f64>() * 100.0,
            delay_secs: rng.gen::<f64>() * 10.0,
            duration_secs: 8.0 + rng.gen::<f64>() * 4.0,
        }
    }
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub left_percent: f64,
    pub top_percent: f64,
    pub delay_secs: f64,
}

impl Sparkle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Sparkle {
        Sparkle {
            left_percent: rng.gen::<f64>() * 100.0,
            top_percent: rng.gen::<f64>() * 100.0,
            delay_secs: rng.gen::<f64>() * 3.0,
        }
    }
}

pub fn heart_layout<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<FloatingHeart> {
    (0..count).map(|_| FloatingHeart::random(rng)).collect()
}

pub fn sparkle_layout<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<Sparkle> {
    (0..count).map(|_| Sparkle::random(rng)).collect()
}

/// `count` hearts as a JS array of `FloatingHeart`.
#[wasm_bindgen]
pub fn floating_hearts(count: u32) -> js_sys::Array {
    heart_layout(&mut rand::thread_rng(), count)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// `count` sparkles as a JS array of `Sparkle`.
#[wasm_bindgen]
pub fn sparkles(count: u32) -> js_sys::Array {
    sparkle_layout(&mut rand::thread_rng(), count)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hearts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(15);
        let hearts = heart_layout(&mut rng, HEART_COUNT);
        assert_eq!(hearts.len(), 15);
        for heart in &hearts {
            assert!(heart.left_percent >= 0.0 && heart.left_percent < 100.0);
            assert!(heart.delay_secs >= 0.0 && heart.delay_secs < 10.0);
            assert!(heart.duration_secs >= 8.0 && heart.duration_secs < 12.0);
        }
    }

    #[test]
    fn sparkles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(20);
        let sparkles = sparkle_layout(&mut rng, SPARKLE_COUNT);
        assert_eq!(sparkles.len(), 20);
        for sparkle in &sparkles {
            assert!(sparkle.left_percent >= 0.0 && sparkle.left_percent < 100.0);
            assert!(sparkle.top_percent >= 0.0 && sparkle.top_percent < 100.0);
            assert!(sparkle.delay_secs >= 0.0 && sparkle.delay_secs < 3.0);
        }
    }

    #[test]
    fn layouts_vary_between_draws() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = heart_layout(&mut rng, 5);
        let second = heart_layout(&mut rng, 5);
        assert_ne!(first, second);
        assert!(sparkle_layout(&mut rng, 0).is_empty());
    }
}
