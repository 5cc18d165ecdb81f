//! Hacker-jargon fake content.
//!
//! [`HackerFaker`] is the stock [`ContentGenerator`]: titles are an
//! adjective + noun pair, bodies are a jargon phrase assembled from a
//! handful of templates. [`HackerFaker::seeded`] pins the RNG for
//! reproducible sequences:
//!
//! ```rust
//! use atomblog_faker::HackerFaker;
//! use atomblog_store::ContentGenerator;
//!
//! let mut faker = HackerFaker::seeded(7);
//! let post = faker.generate();
//! assert!(!post.title.is_empty());
//! ```

use atomblog_store::{ContentGenerator, Post};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "bluetooth",
    "wireless",
    "1080p",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "program",
    "reboot",
    "parse",
];

const ING_VERBS: &[&str] = &[
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
    "synthesizing",
    "transmitting",
    "programming",
    "parsing",
];

const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "SAS", "JBOD", "SCSI",
    "JSON", "XSS", "JS",
];

/// RNG-backed post generator producing hacker-jargon titles and phrases.
pub struct HackerFaker {
    rng: StdRng,
}

impl HackerFaker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic: the same seed yields the same post sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick<'a>(&mut self, table: &'a [&'a str]) -> &'a str {
        table[self.rng.gen_range(0..table.len())]
    }

    fn phrase(&mut self) -> String {
        match self.rng.gen_range(0..8) {
            0 => format!(
                "If we {} the {}, we can get to the {} {} through the {} {} {}!",
                self.pick(VERBS),
                self.pick(NOUNS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
            1 => format!(
                "We need to {} the {} {} {}!",
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
            2 => format!(
                "Try to {} the {} {}, maybe it will {} the {} {}!",
                self.pick(VERBS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
            3 => format!(
                "You can't {} the {} without {} the {} {} {}!",
                self.pick(VERBS),
                self.pick(NOUNS),
                self.pick(ING_VERBS),
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
            4 => format!(
                "Use the {} {} {}, then you can {} the {} {}!",
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
            ),
            5 => format!(
                "The {} {} is down, {} the {} {} so we can {} the {} {}!",
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
            6 => format!(
                "{} the {} won't do anything, we need to {} the {} {} {}!",
                self.pick(ING_VERBS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
            _ => format!(
                "I'll {} the {} {} {}, that should {} the {} {}!",
                self.pick(VERBS),
                self.pick(ADJECTIVES),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
                self.pick(VERBS),
                self.pick(ABBREVIATIONS),
                self.pick(NOUNS),
            ),
        }
    }
}

impl Default for HackerFaker {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentGenerator for HackerFaker {
    fn generate(&mut self) -> Post {
        let title = format!("{} {}", self.pick(ADJECTIVES), self.pick(NOUNS));
        Post {
            title,
            body: self.phrase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = HackerFaker::seeded(42);
        let mut b = HackerFaker::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = HackerFaker::seeded(1);
        let mut b = HackerFaker::seeded(2);
        let left: Vec<Post> = (0..10).map(|_| a.generate()).collect();
        let right: Vec<Post> = (0..10).map(|_| b.generate()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn posts_are_well_formed() {
        let mut faker = HackerFaker::seeded(7);
        for _ in 0..30 {
            let post = faker.generate();
            assert!(post.title.contains(' '), "title: {}", post.title);
            assert!(post.body.ends_with('!'), "body: {}", post.body);
        }
    }
}
