use std::collections::VecDeque;

/// Rolling buffer of the most recent key presses, compared against a fixed
/// secret sequence.
#[derive(Debug, Clone)]
pub struct KeySequence {
    secret: Vec<String>,
    recent: VecDeque<String>,
}

impl KeySequence {
    pub fn new(secret: Vec<String>) -> Self {
        let capacity = secret.len();
        Self {
            secret,
            recent: VecDeque::with_capacity(capacity),
        }
    }

    /// Records `key`. Returns true (and empties the buffer) when the last
    /// presses spell out the secret exactly.
    pub fn push(&mut self, key: &str) -> bool {
        if self.secret.is_empty() {
            return false;
        }

        self.recent.push_back(key.to_string());
        while self.recent.len() > self.secret.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == self.secret.len()
            && self.recent.iter().zip(&self.secret).all(|(a, b)| a == b);

        if matched {
            self.recent.clear();
        }

        matched
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> KeySequence {
        KeySequence::new(vec!["x".into(), "y".into(), "z".into()])
    }

    #[test]
    fn test_push_matches_after_noise() {
        let mut keys = sequence();

        assert!(!keys.push("a"));
        assert!(!keys.push("x"));
        assert!(!keys.push("y"));
        assert!(keys.push("z"));
        assert!(!keys.push("z"));
    }

    #[test]
    fn test_push_fails_on_empty_secret() {
        let mut keys = KeySequence::new(Vec::new());

        assert!(!keys.push("a"));
        assert!(!keys.push(""));
    }
}
