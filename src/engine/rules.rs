use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// How keyword matching reads the prompt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum MatchMode {
    /// Keywords match anywhere in the lowercased text.
    Substring,
    /// Keywords match whole whitespace-separated tokens.
    Token,
}

/// Trigger for one dispatch rule.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Matcher {
    /// Fires when any keyword is present.
    Any(&'static [&'static str]),
    /// Fires only when every keyword is present, substring in any mode.
    All(&'static [&'static str]),
    /// Fires on any keyword, or on a question mark anywhere in the raw text.
    Question(&'static [&'static str]),
}

impl Matcher {
    pub(crate) fn matches(
        &self,
        raw: &str,
        lowered: &str,
        tokens: &[&str],
        mode: MatchMode,
    ) -> bool {
        match self {
            Matcher::Any(words) => words.iter().any(|word| hit(word, lowered, tokens, mode)),
            Matcher::All(words) => words.iter().all(|word| lowered.contains(word)),
            Matcher::Question(words) => {
                raw.contains('?') || words.iter().any(|word| hit(word, lowered, tokens, mode))
            }
        }
    }
}

fn hit(word: &str, lowered: &str, tokens: &[&str], mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => lowered.contains(word),
        MatchMode::Token => tokens.contains(&word),
    }
}

/// What a rule answers with once it fires.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Fixed(&'static str),
    OneOf(&'static [&'static str]),
}

impl Reply {
    pub(crate) fn pick(&self, rng: &mut StdRng) -> String {
        match self {
            Reply::Fixed(text) => (*text).to_string(),
            Reply::OneOf(choices) => choices.choose(rng).copied().unwrap_or_default().to_string(),
        }
    }
}

/// One ordered dispatch entry. The first rule whose matcher fires wins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntentRule {
    /// Short label for debug logging
    pub name: &'static str,
    pub matcher: Matcher,
    pub reply: Reply,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn check(matcher: Matcher, prompt: &str, mode: MatchMode) -> bool {
        let lowered = prompt.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        matcher.matches(prompt, &lowered, &tokens, mode)
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        let matcher = Matcher::Any(&["hi"]);
        assert!(check(matcher, "this is fine", MatchMode::Substring));
        assert!(check(matcher, "HI there", MatchMode::Substring));
        assert!(!check(matcher, "nope", MatchMode::Substring));
    }

    #[test]
    fn token_mode_needs_whole_tokens() {
        let matcher = Matcher::Any(&["hi"]);
        assert!(!check(matcher, "this is fine", MatchMode::Token));
        assert!(check(matcher, "oh hi mark", MatchMode::Token));
        assert!(!check(matcher, "hip hop", MatchMode::Token));
    }

    #[test]
    fn all_requires_every_keyword() {
        let matcher = Matcher::All(&["capital", "france"]);
        assert!(check(matcher, "the capital of France", MatchMode::Substring));
        assert!(!check(matcher, "the capital of Spain", MatchMode::Substring));
        // All stays substring even under token mode
        assert!(check(matcher, "capitals of france!", MatchMode::Token));
    }

    #[test]
    fn question_fires_on_mark_or_word() {
        let matcher = Matcher::Question(&["how", "what"]);
        assert!(check(matcher, "are you ok?", MatchMode::Token));
        assert!(check(matcher, "how it works", MatchMode::Token));
        assert!(!check(matcher, "fine then", MatchMode::Token));
        // Bare-mark matcher only reacts to the mark itself
        assert!(check(Matcher::Question(&[]), "food?", MatchMode::Substring));
        assert!(!check(Matcher::Question(&[]), "food", MatchMode::Substring));
    }

    #[test]
    fn fixed_reply_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Reply::Fixed("purr").pick(&mut rng), "purr");
    }

    #[test]
    fn one_of_picks_from_the_list() {
        let choices: &[&str] = &["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let picked = Reply::OneOf(choices).pick(&mut rng);
            assert!(choices.contains(&picked.as_str()));
        }
    }

    #[test]
    fn empty_one_of_degrades_to_empty_string() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Reply::OneOf(&[]).pick(&mut rng), "");
    }
}
