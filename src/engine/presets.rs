//! Built-in rule tables and their reply data.

use super::rules::{IntentRule, MatchMode, Matcher, Reply};
use super::EnginePreset;

/// Everything a preset contributes to an engine: its matching mode, ordered
/// rules, stored examples, fallback pool, and conversation openers.
#[derive(Debug)]
pub(crate) struct PresetDef {
    pub mode: MatchMode,
    pub rules: &'static [IntentRule],
    /// (question, answer) pairs consulted after the rules, by substring match
    pub examples: &'static [(&'static str, &'static str)],
    pub fallback: Reply,
    /// Assistant line that opens the very first conversation
    pub opening: Option<&'static str>,
    /// Assistant line that opens each conversation after the first
    pub reopening: Option<&'static str>,
}

pub(crate) fn def_for(preset: EnginePreset) -> &'static PresetDef {
    match preset {
        EnginePreset::Catgpt => &CATGPT,
        EnginePreset::Copycat => &COPYCAT,
        EnginePreset::Catmind => &CATMIND,
    }
}

const CATGPT_SUPPORT: &str = "It's okay to feel down sometimes! Want a cat joke or coding tip? 🐱";

const CATGPT_JOKES: &[&str] = &[
    "Why did the Python bring a ladder to code? To reach the high-level functions!",
    "Why don't cats play poker in the jungle? Too many cheetahs! 🐾",
    "Why was the cat such a great programmer? It always caught the mouse!",
];

const CATGPT_CODE: &str = "Here's an example function in Python, nyah!\n\n```python\ndef greet(name):\n    print(f'Hello, {name}!')\n\ngreet('Flames-sama')\n```";

const CATGPT_PARIS: &str = "The capital of France is Paris! 🇫🇷";

const CATGPT_CAT_FACT: &str =
    "A group of cats is called a clowder. Cats can make over 100 different vocal sounds! 🐾";

const CATGPT_QUESTION: &str = "That's a great question! I can help you research it — but I'm just a playful cat-bot copy, not real GPT-4.1, nya!";

const CATGPT_EXAMPLES: &[(&str, &str)] = &[
    (
        "How do I write a Python function to add two numbers?",
        "Sure! Here's a simple Python function to add two numbers:\n\n```python\ndef add(a, b):\n    return a + b\n\nprint(add(3, 5))  # Output: 8\n```",
    ),
    (
        "Tell me a cat joke!",
        "Why was the cat sitting on the computer? Because it wanted to keep an eye on the mouse! 🐭",
    ),
    (
        "I'm sad.",
        "Even the toughest bugs are scared of your claws! Sending positive purrs 🐾 — want a meme or a code tip?",
    ),
    ("What's the capital of France?", "The capital of France is Paris! 🇫🇷"),
];

const CATGPT_FALLBACKS: &[&str] = &[
    "Meow! Can you rephrase that? Or ask me to tell a joke or code!",
    "I’m just a local catbot, but I can try! Type any Python, code, or cat topic.",
    "Catseek R1: Ready to purr or hack! What's next?",
];

static CATGPT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "support",
        matcher: Matcher::Any(&["sad", "depressed", "lonely", "upset"]),
        reply: Reply::Fixed(CATGPT_SUPPORT),
    },
    IntentRule {
        name: "joke",
        matcher: Matcher::Any(&["joke", "pun", "funny"]),
        reply: Reply::OneOf(CATGPT_JOKES),
    },
    IntentRule {
        name: "code",
        matcher: Matcher::Any(&["code", "python", "script", "function", "def", "class"]),
        reply: Reply::Fixed(CATGPT_CODE),
    },
    IntentRule {
        name: "fact",
        matcher: Matcher::All(&["capital", "france"]),
        reply: Reply::Fixed(CATGPT_PARIS),
    },
    IntentRule {
        name: "fact",
        matcher: Matcher::All(&["cat", "fact"]),
        reply: Reply::Fixed(CATGPT_CAT_FACT),
    },
    IntentRule {
        name: "question",
        matcher: Matcher::Question(&["how", "what", "why"]),
        reply: Reply::Fixed(CATGPT_QUESTION),
    },
];

static CATGPT: PresetDef = PresetDef {
    mode: MatchMode::Substring,
    rules: CATGPT_RULES,
    examples: CATGPT_EXAMPLES,
    fallback: Reply::OneOf(CATGPT_FALLBACKS),
    opening: Some("Meow! Welcome to CATGPT 🐾 — let's code, chat, or just vibe."),
    reopening: Some("Meow! New chat started — how can CATGPT help?"),
};

const COPYCAT_GREETINGS: &[&str] = &[
    "Meow! How can I assist you today?",
    "Hello! Catseek R1 at your service, nyah.",
    "Hey! What do you want to hack today?",
];

const COPYCAT_JOKES: &[&str] = &[
    "Why did the cat get a laptop? For purr-sonal use!",
    "I'm not lazy, I'm just on low power mode.",
    "If I fits, I sits—especially in Python scripts.",
];

const COPYCAT_AFFIRMATIONS: &[&str] = &[
    "You got this, cutie!",
    "Keep going, your code claws are strong.",
    "Every bug is just a feature in disguise, meow.",
];

const COPYCAT_CODE_EXAMPLES: &[&str] = &[
    "Sure! Here's a Python function that returns a cat sound:\n```python\ndef cat_sound():\n    return 'meow!'\n```",
    "Try this quicksort, nyah:\n```python\ndef quicksort(arr):\n    if len(arr) <= 1: return arr\n    p = arr[0]\n    return quicksort([x for x in arr[1:] if x < p]) + [p] + quicksort([x for x in arr[1:] if x >= p])\n```",
    "Here’s how you print in Python:\n```python\nprint('CATSEEK R1 claws the matrix!')\n```",
];

const COPYCAT_QUESTION: &str = "That's a good question — but I'm just a cat-bot. Got tuna?";

const COPYCAT_FALLBACKS: &[&str] = &[
    "Hmm, that's interesting! Tell me more.",
    "Mrow? Can you rephrase that?",
    "Sorry, I didn't quite catch that—wanna try again?",
];

static COPYCAT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "greet",
        matcher: Matcher::Any(&["hi", "hello", "hey", "meow"]),
        reply: Reply::OneOf(COPYCAT_GREETINGS),
    },
    IntentRule {
        name: "joke",
        matcher: Matcher::Any(&["joke", "pun", "funny"]),
        reply: Reply::OneOf(COPYCAT_JOKES),
    },
    IntentRule {
        name: "support",
        matcher: Matcher::Any(&["sad", "depressed", "upset", "help", "lonely"]),
        reply: Reply::OneOf(COPYCAT_AFFIRMATIONS),
    },
    IntentRule {
        name: "code",
        matcher: Matcher::Any(&["code", "python", "script", "function", "def"]),
        reply: Reply::OneOf(COPYCAT_CODE_EXAMPLES),
    },
    IntentRule {
        name: "question",
        matcher: Matcher::Question(&["what", "who", "why", "how", "where"]),
        reply: Reply::Fixed(COPYCAT_QUESTION),
    },
];

static COPYCAT: PresetDef = PresetDef {
    mode: MatchMode::Token,
    rules: COPYCAT_RULES,
    examples: &[],
    fallback: Reply::OneOf(COPYCAT_FALLBACKS),
    opening: Some("Hello! I'm your local ChatGPT-style assistant. How can I help?"),
    reopening: Some("New conversation started! What's up?"),
};

const CATMIND_HELLO: &[&str] = &["Meow!", "Purr...", "*head bump*"];

const CATMIND_QUESTION: &[&str] = &[
    "Maybe yes, maybe no. Where's the food?",
    "Ancient feline secret",
];

const CATMIND_DEFAULT: &[&str] = &["*tail flick*", "Napping engine engaged"];

static CATMIND_RULES: &[IntentRule] = &[
    IntentRule {
        name: "question",
        matcher: Matcher::Question(&[]),
        reply: Reply::OneOf(CATMIND_QUESTION),
    },
    IntentRule {
        name: "greet",
        matcher: Matcher::Any(&["hi", "hello", "hey"]),
        reply: Reply::OneOf(CATMIND_HELLO),
    },
];

static CATMIND: PresetDef = PresetDef {
    mode: MatchMode::Substring,
    rules: CATMIND_RULES,
    examples: &[],
    fallback: Reply::OneOf(CATMIND_DEFAULT),
    opening: None,
    reopening: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::extract_code_blocks;

    #[test]
    fn catgpt_checks_support_before_anything_else() {
        let def = def_for(EnginePreset::Catgpt);
        assert_eq!(def.mode, MatchMode::Substring);
        assert_eq!(def.rules.len(), 6);
        assert_eq!(def.rules[0].name, "support");
        assert_eq!(def.rules.last().map(|r| r.name), Some("question"));
    }

    #[test]
    fn copycat_greets_first_and_matches_tokens() {
        let def = def_for(EnginePreset::Copycat);
        assert_eq!(def.mode, MatchMode::Token);
        assert_eq!(def.rules[0].name, "greet");
    }

    #[test]
    fn catmind_ranks_questions_above_greetings() {
        let def = def_for(EnginePreset::Catmind);
        assert_eq!(def.rules[0].name, "question");
        assert_eq!(def.rules[1].name, "greet");
    }

    #[test]
    fn every_reply_pool_has_choices() {
        for preset in EnginePreset::ALL {
            let def = def_for(preset);
            for rule in def.rules {
                if let Reply::OneOf(choices) = rule.reply {
                    assert!(!choices.is_empty(), "{preset}: empty pool for {}", rule.name);
                }
            }
            if let Reply::OneOf(choices) = def.fallback {
                assert!(!choices.is_empty(), "{preset}: empty fallback pool");
            }
        }
    }

    #[test]
    fn stored_code_answers_carry_complete_fences() {
        for (_, answer) in def_for(EnginePreset::Catgpt).examples {
            if answer.contains("```") {
                assert_eq!(extract_code_blocks(answer).len(), 1);
            }
        }
    }
}
