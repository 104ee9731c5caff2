//! Bundled default vocabulary.
//!
//! Used on first run, when persisted data cannot be read, on reset, and as
//! the quiz pool when too few candidates are available.

use crate::types::{Category, VocabularyEntry};

const AUDIO_BASE: &str = "https://ssl.gstatic.com/dictionary/static/sounds/oxford";

const SEED: &[(&str, &str, &str, Category, Option<&str>)] = &[
    ("1", "Hello", "Përshëndetje", Category::Greetings, Some("hello--_gb_1.mp3")),
    ("2", "Thank you", "Faleminderit", Category::Thanks, Some("thank_you--_gb_1.mp3")),
    ("3", "Goodbye", "Mirupafshim", Category::Farewell, Some("goodbye--_gb_1.mp3")),
    ("4", "Please", "Të lutem", Category::Others, Some("please--_gb_1.mp3")),
    ("5", "Sorry", "Më fal", Category::Others, Some("sorry--_gb_1.mp3")),
    ("6", "Yes", "Po", Category::Others, None),
    ("7", "No", "Jo", Category::Others, None),
    ("8", "Good morning", "Mirëmëngjes", Category::Greetings, None),
    ("9", "Good night", "Natën e mirë", Category::Farewell, None),
    ("10", "You're welcome", "S'ka përse", Category::Thanks, None),
    ("11", "How are you?", "Si je?", Category::Greetings, None),
    ("12", "Excuse me", "Më falni", Category::Others, None),
    ("13", "See you later", "Shihemi më vonë", Category::Farewell, None),
    ("14", "Cheers", "Gëzuar", Category::Thanks, None),
    ("15", "Congratulations", "Urime", Category::Others, None),
    ("16", "I love you", "Të dua", Category::Others, None),
    ("17", "What's your name?", "Si quhesh?", Category::Greetings, None),
    ("18", "Nice to meet you", "Kënaqësi të të njoh", Category::Greetings, None),
    ("19", "Good afternoon", "Mirëdita", Category::Greetings, None),
    ("20", "Bless you", "Shëndet", Category::Thanks, None),
];

/// Fresh copy of the bundled default set.
pub fn default_vocabulary() -> Vec<VocabularyEntry> {
    SEED.iter()
        .map(|&(id, term, translation, category, audio)| {
            let entry = VocabularyEntry::new(id, term, translation, category);
            match audio {
                Some(file) => entry.with_audio(format!("{AUDIO_BASE}/{file}")),
                None => entry,
            }
        })
        .collect()
}
