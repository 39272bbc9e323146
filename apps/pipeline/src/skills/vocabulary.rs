//! Skill vocabulary — the master skill dictionary plus alias groups.
//!
//! Built once at process start and shared by reference into the normalizer;
//! never mutated at runtime. Dictionary terms and alias surface forms are
//! case-folded and the word-boundary patterns precompiled at construction.

use regex::Regex;

/// Canonical dictionary terms. These are safe for word-boundary matching:
/// none of them starts or ends with punctuation that breaks `\b`.
const DICTIONARY_TERMS: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "c",
    "go",
    "ruby",
    "php",
    "swift",
    "kotlin",
    // Web technologies
    "html",
    "css",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "nextjs",
    "nodejs",
    "express",
    // Backend frameworks
    "django",
    "flask",
    "fastapi",
    "spring",
    "laravel",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "sqlite",
    "oracle",
    "redis",
    "firebase",
    // Data science and AI
    "numpy",
    "pandas",
    "scipy",
    "matplotlib",
    "seaborn",
    "scikit-learn",
    "tensorflow",
    "keras",
    "pytorch",
    "nlp",
    "machine learning",
    "deep learning",
    // DevOps and cloud
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "jenkins",
    "ci/cd",
    // Version control and tools
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "linux",
    "bash",
    "powershell",
    // Testing
    "unit testing",
    "pytest",
    "junit",
    "selenium",
    // Mobile development
    "android",
    "ios",
    "flutter",
    "react native",
    // Other
    "api",
    "rest",
    "graphql",
    "microservices",
    "data structures",
    "algorithms",
    "oop",
    "ms excel",
    "powerpoint",
];

/// Alias groups: canonical skill name (kept in its registered form) and the
/// surface variants real resumes use for it. Aliases may carry punctuation
/// ("c++", ".net"), which is why the normalizer matches them by substring
/// rather than a boundary pattern.
const ALIAS_GROUPS: &[(&str, &[&str])] = &[
    // Data science
    ("numpy", &["numpy", "np"]),
    ("pandas", &["pandas"]),
    ("scikit-learn", &["scikit-learn", "sklearn"]),
    ("c++", &["c++", "cpp", "c plus plus"]),
    // Machine learning
    ("machine learning", &["machine learning", "ml"]),
    ("deep learning", &["deep learning", "dl"]),
    ("artificial intelligence", &["artificial intelligence", "ai"]),
    // Programming concepts
    ("data structures", &["data structures", "ds"]),
    ("algorithms", &["algorithms", "algo"]),
    ("oop", &["oop", "object oriented programming"]),
    (
        "C# / .NET",
        &[
            "c#", "c#.net", "c# .net", "c#. net", ".net", "dotnet", "asp.net",
        ],
    ),
    // Office and productivity
    (
        "ms excel",
        &[
            "ms excel",
            "excel",
            "microsoft excel",
            "excel spreadsheet",
            "excel sheets",
            "advanced excel",
            "basic excel",
            "excel formulas",
            "excel functions",
        ],
    ),
    ("excel", &["excel", "ms excel", "microsoft excel"]),
    ("powerpoint", &["powerpoint", "ppt", "ms powerpoint"]),
    (
        "Basic Computer Skills",
        &[
            "basic computer skills",
            "basic computer knowledge",
            "computer basics",
            "computer fundamentals",
        ],
    ),
    // Web / API
    ("api", &["api", "rest api", "apis"]),
    ("rest", &["rest", "restful"]),
];

/// A dictionary term with its precompiled word-boundary pattern.
pub(crate) struct DictionaryTerm {
    pub(crate) canonical: String,
    pub(crate) pattern: Regex,
}

/// A canonical skill and its case-folded surface forms.
pub(crate) struct AliasGroup {
    pub(crate) canonical: String,
    pub(crate) aliases: Vec<String>,
}

/// The process-wide skill vocabulary. Immutable after construction.
pub struct SkillVocabulary {
    dictionary: Vec<DictionaryTerm>,
    alias_groups: Vec<AliasGroup>,
}

impl SkillVocabulary {
    /// The builtin vocabulary shipped with the pipeline.
    pub fn builtin() -> Self {
        // Every builtin term goes through regex::escape, so compilation
        // cannot fail on this data.
        Self::from_parts(DICTIONARY_TERMS, ALIAS_GROUPS)
            .expect("builtin vocabulary patterns compile")
    }

    /// Builds a vocabulary from caller-supplied terms and alias groups.
    /// Everything is case-folded here, once.
    pub fn from_parts(
        terms: &[&str],
        alias_groups: &[(&str, &[&str])],
    ) -> Result<Self, regex::Error> {
        let mut dictionary = Vec::with_capacity(terms.len());
        for term in terms {
            let canonical = term.to_lowercase();
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&canonical)))?;
            dictionary.push(DictionaryTerm { canonical, pattern });
        }

        let alias_groups = alias_groups
            .iter()
            .map(|(canonical, aliases)| AliasGroup {
                canonical: (*canonical).to_string(),
                aliases: aliases.iter().map(|alias| alias.to_lowercase()).collect(),
            })
            .collect();

        Ok(Self {
            dictionary,
            alias_groups,
        })
    }

    pub(crate) fn dictionary(&self) -> &[DictionaryTerm] {
        &self.dictionary
    }

    pub(crate) fn alias_groups(&self) -> &[AliasGroup] {
        &self.alias_groups
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn alias_group_len(&self) -> usize {
        self.alias_groups.len()
    }
}
