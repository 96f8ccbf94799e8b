use rand::Rng;

/// Default dictionary: the classic short animal names
pub const WORDS: &[&str] = &[
    "ant", "baboon", "badger", "bat", "bear", "beaver", "camel", "cat", "clam", "cobra", "cougar",
    "coyote", "crow", "deer", "dog", "donkey", "duck", "eagle", "ferret", "fox", "frog", "goat",
    "goose", "hawk", "lion", "lizard", "llama", "mole", "monkey", "moose", "mouse", "mule", "newt",
    "otter", "owl", "panda", "parrot", "pigeon", "python", "rabbit", "ram", "rat", "raven",
    "rhino", "salmon", "seal", "shark", "sheep", "skunk", "sloth", "snake", "spider", "stork",
    "swan", "tiger", "toad", "trout", "turkey", "turtle", "weasel", "whale", "wolf", "wombat",
    "zebra",
];

/// One uniform draw from a word list
pub fn random_word<'a>(words: &[&'a str]) -> &'a str {
    let mut rng = rand::rng();
    words[rng.random_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_is_lowercase_ascii() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_random_word_comes_from_the_list() {
        for _ in 0..20 {
            let word = random_word(WORDS);
            assert!(WORDS.contains(&word));
        }
    }
}
