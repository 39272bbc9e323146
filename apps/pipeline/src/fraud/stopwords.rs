//! English stop words excluded from the originality vocabulary before
//! vectorization. Fixed at build time; the pipeline only scores
//! English-language resumes.

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around",
    "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "bottom", "but", "by", "call", "can", "cannot", "could", "did", "do", "does", "doing",
    "done", "down", "due", "during", "each", "eight", "either", "eleven", "else", "elsewhere",
    "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
    "except", "few", "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty",
    "four", "from", "front", "full", "further", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how",
    "however", "hundred", "i", "if", "in", "indeed", "instead", "into", "is", "it", "its",
    "itself", "last", "latter", "latterly", "least", "less", "made", "many", "may", "me",
    "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "much", "must", "my",
    "myself", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
    "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "since", "six", "sixty", "so", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "third", "this",
    "those", "though", "three", "through", "throughout", "thus", "to", "together", "too", "top",
    "toward", "towards", "twelve", "twenty", "two", "under", "until", "up", "upon", "us", "very",
    "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_present() {
        for word in ["the", "and", "of", "to", "with", "for"] {
            assert!(ENGLISH_STOP_WORDS.contains(&word), "missing '{word}'");
        }
    }

    #[test]
    fn test_all_entries_lowercase() {
        assert!(ENGLISH_STOP_WORDS
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
