use rand::Rng;
use std::time::Duration;

/// How often the displayed quote rotates (5 minutes)
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Fixed motivational quote pool
pub const QUOTES: &[&str] = &[
    "The best time to plant a tree was 20 years ago. The second best time is now. Start your focus journey today!",
    "Just as trees grow slowly but surely, your focus skills develop with consistent practice.",
    "Every focused minute is a seed planted for your future success and our planet's health.",
    "Like photosynthesis transforms sunlight into energy, focus transforms time into achievement.",
    "Your attention is the soil where your dreams take root and grow into reality.",
];

/// Pick one quote uniformly at random
pub fn pick_quote<R: Rng>(rng: &mut R) -> &'static str {
    QUOTES[rng.gen_range(0..QUOTES.len())]
}
