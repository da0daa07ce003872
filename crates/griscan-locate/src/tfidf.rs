//! Minimal TF-IDF vectorizer over word n-grams.
//!
//! Lowercases, tokenizes on `\b\w\w+\b`, drops English stop words, then
//! builds n-grams from the surviving tokens. Weights are raw term counts
//! times smoothed idf, with each row l2-normalized.

use std::collections::{BTreeMap, HashMap, HashSet};

use griscan_core::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1};
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("static token pattern"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

pub struct TfidfVectorizer {
    max_ngram: usize,
    max_features: usize,
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
}

impl TfidfVectorizer {
    pub fn new(max_ngram: usize, max_features: usize) -> Self {
        Self {
            max_ngram: max_ngram.max(1),
            max_features: max_features.max(1),
            vocabulary: BTreeMap::new(),
            idf: Array1::zeros(0),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learn vocabulary and idf from `docs`, returning one row per document.
    pub fn fit_transform(&mut self, docs: &[&str]) -> Result<Array2<f64>> {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| self.analyze(d)).collect();

        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for terms in &analyzed {
            let mut seen = HashSet::new();
            for term in terms {
                *term_freq.entry(term.as_str()).or_default() += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_default() += 1;
                }
            }
        }

        if term_freq.is_empty() {
            return Err(Error::Vectorizer(
                "empty vocabulary; documents contain only stop words".into(),
            ));
        }

        // Highest corpus frequency first, alphabetical among ties.
        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        kept.sort_unstable();

        let n_docs = docs.len() as f64;
        self.vocabulary = kept
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();
        self.idf = kept
            .iter()
            .map(|t| {
                let df = doc_freq.get(t).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let mut matrix = Array2::<f64>::zeros((docs.len(), self.vocabulary.len()));
        for (row, terms) in analyzed.iter().enumerate() {
            for term in terms {
                if let Some(&col) = self.vocabulary.get(term) {
                    matrix[[row, col]] += 1.0;
                }
            }
            let mut r = matrix.row_mut(row);
            r *= &self.idf;
            let norm = r.dot(&r).sqrt();
            if norm > 0.0 {
                r /= norm;
            }
        }

        Ok(matrix)
    }

    fn analyze(&self, doc: &str) -> Vec<String> {
        let lower = doc.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !STOP_WORDS.contains(t))
            .collect();

        let mut terms = Vec::new();
        for n in 1..=self.max_ngram {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

/// Cosine similarity of two l2-normalized rows. Zero rows score 0.
pub fn cosine_similarity(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let na = a.dot(&a).sqrt();
    let nb = b.dot(&b).sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    a.dot(&b) / (na * nb)
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
    "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];
