//! Rule-based English inflection for verbs and nouns.
//!
//! Irregular forms come from small tables, everything else follows the regular
//! spelling rules (`-s/-es/-ies`, `-ed/-d/-ied`, `-ing`, final consonant doubling).
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// lemma -> (past, past participle)
    static ref IRREGULAR_VERBS: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("be", ("was", "been"));
        m.insert("have", ("had", "had"));
        m.insert("do", ("did", "done"));
        m.insert("go", ("went", "gone"));
        m.insert("begin", ("began", "begun"));
        m.insert("break", ("broke", "broken"));
        m.insert("bring", ("brought", "brought"));
        m.insert("build", ("built", "built"));
        m.insert("buy", ("bought", "bought"));
        m.insert("catch", ("caught", "caught"));
        m.insert("choose", ("chose", "chosen"));
        m.insert("come", ("came", "come"));
        m.insert("cut", ("cut", "cut"));
        m.insert("draw", ("drew", "drawn"));
        m.insert("drink", ("drank", "drunk"));
        m.insert("drive", ("drove", "driven"));
        m.insert("eat", ("ate", "eaten"));
        m.insert("fall", ("fell", "fallen"));
        m.insert("feel", ("felt", "felt"));
        m.insert("fight", ("fought", "fought"));
        m.insert("find", ("found", "found"));
        m.insert("fly", ("flew", "flown"));
        m.insert("forget", ("forgot", "forgotten"));
        m.insert("get", ("got", "gotten"));
        m.insert("give", ("gave", "given"));
        m.insert("grow", ("grew", "grown"));
        m.insert("hear", ("heard", "heard"));
        m.insert("hit", ("hit", "hit"));
        m.insert("hold", ("held", "held"));
        m.insert("keep", ("kept", "kept"));
        m.insert("know", ("knew", "known"));
        m.insert("lead", ("led", "led"));
        m.insert("leave", ("left", "left"));
        m.insert("let", ("let", "let"));
        m.insert("lose", ("lost", "lost"));
        m.insert("make", ("made", "made"));
        m.insert("mean", ("meant", "meant"));
        m.insert("meet", ("met", "met"));
        m.insert("pay", ("paid", "paid"));
        m.insert("put", ("put", "put"));
        m.insert("read", ("read", "read"));
        m.insert("rise", ("rose", "risen"));
        m.insert("run", ("ran", "run"));
        m.insert("say", ("said", "said"));
        m.insert("see", ("saw", "seen"));
        m.insert("sell", ("sold", "sold"));
        m.insert("send", ("sent", "sent"));
        m.insert("set", ("set", "set"));
        m.insert("shut", ("shut", "shut"));
        m.insert("sing", ("sang", "sung"));
        m.insert("sit", ("sat", "sat"));
        m.insert("sleep", ("slept", "slept"));
        m.insert("speak", ("spoke", "spoken"));
        m.insert("spend", ("spent", "spent"));
        m.insert("stand", ("stood", "stood"));
        m.insert("swim", ("swam", "swum"));
        m.insert("take", ("took", "taken"));
        m.insert("teach", ("taught", "taught"));
        m.insert("tell", ("told", "told"));
        m.insert("think", ("thought", "thought"));
        m.insert("throw", ("threw", "thrown"));
        m.insert("understand", ("understood", "understood"));
        m.insert("wear", ("wore", "worn"));
        m.insert("win", ("won", "won"));
        m.insert("write", ("wrote", "written"));
        m
    };

    static ref IRREGULAR_PLURALS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("child", "children");
        m.insert("foot", "feet");
        m.insert("goose", "geese");
        m.insert("man", "men");
        m.insert("mouse", "mice");
        m.insert("person", "people");
        m.insert("tooth", "teeth");
        m.insert("woman", "women");
        m
    };
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Inflects lowercase lemmas to Penn verb/noun tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inflector;

impl Inflector {
    /// Inflect `lemma` to `tag`.
    ///
    /// Supported tags are `VB`, `VBP`, `VBZ`, `VBD`, `VBN`, `VBG`, `NN` and `NNS`.
    pub fn inflect(&self, lemma: &str, tag: &str) -> Option<String> {
        let lemma = lemma.to_lowercase();
        if lemma.is_empty() || !lemma.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        match tag {
            "VB" | "NN" => Some(lemma),
            "VBP" => Some(match lemma.as_str() {
                "be" => "are".to_string(),
                _ => lemma,
            }),
            "VBZ" => Some(match lemma.as_str() {
                "be" => "is".to_string(),
                "have" => "has".to_string(),
                _ => Self::add_s(&lemma),
            }),
            "VBD" => Some(match IRREGULAR_VERBS.get(lemma.as_str()) {
                Some((past, _)) => past.to_string(),
                None => Self::add_ed(&lemma),
            }),
            "VBN" => Some(match IRREGULAR_VERBS.get(lemma.as_str()) {
                Some((_, participle)) => participle.to_string(),
                None => Self::add_ed(&lemma),
            }),
            "VBG" => Some(Self::add_ing(&lemma)),
            "NNS" => Some(match IRREGULAR_PLURALS.get(lemma.as_str()) {
                Some(plural) => plural.to_string(),
                None => Self::add_s(&lemma),
            }),
            _ => None,
        }
    }

    /// consonant-vowel-consonant ending of a single syllable word (`stop`, `run`, but not `visit`, `fix`).
    fn doubles_final_consonant(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        if n < 3 {
            return false;
        }
        let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
        let cvc = !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y');

        let syllables = chars
            .iter()
            .zip(std::iter::once(&' ').chain(chars.iter()))
            .filter(|(c, prev)| is_vowel(**c) && !is_vowel(**prev))
            .count();

        cvc && syllables == 1
    }

    fn ends_with_consonant_y(word: &str) -> bool {
        let mut rev = word.chars().rev();
        matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
    }

    fn add_s(word: &str) -> String {
        if ["s", "x", "z", "ch", "sh"].iter().any(|end| word.ends_with(end)) {
            format!("{}es", word)
        } else if Self::ends_with_consonant_y(word) {
            format!("{}ies", &word[..word.len() - 1])
        } else if word.ends_with('o') && !word.ends_with("oo") {
            format!("{}es", word)
        } else {
            format!("{}s", word)
        }
    }

    fn add_ed(word: &str) -> String {
        if word.ends_with('e') {
            format!("{}d", word)
        } else if Self::ends_with_consonant_y(word) {
            format!("{}ied", &word[..word.len() - 1])
        } else if Self::doubles_final_consonant(word) {
            format!("{}{}ed", word, &word[word.len() - 1..])
        } else {
            format!("{}ed", word)
        }
    }

    fn add_ing(word: &str) -> String {
        if word == "be" {
            "being".to_string()
        } else if let Some(stem) = word.strip_suffix("ie") {
            format!("{}ying", stem)
        } else if word.len() > 2
            && word.ends_with('e')
            && !["ee", "ye", "oe"].iter().any(|end| word.ends_with(end))
        {
            format!("{}ing", &word[..word.len() - 1])
        } else if Self::doubles_final_consonant(word) {
            format!("{}{}ing", word, &word[word.len() - 1..])
        } else {
            format!("{}ing", word)
        }
    }
}
