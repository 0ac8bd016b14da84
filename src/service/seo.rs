use crate::service::slug;
use regex::Regex;
use serde::Serialize;
use zino::prelude::*;

/// The outcome of a single checklist item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoCheck {
    /// Check identifier.
    name: &'static str,
    /// Whether the check passed.
    passed: bool,
    /// Achieved score in the range `0..=weight`.
    score: f64,
    /// Maximum score for the check.
    weight: f64,
    /// Advisory message.
    message: String,
}

impl SeoCheck {
    fn new(name: &'static str, weight: f64, passed: bool, score: f64, message: String) -> Self {
        Self {
            name,
            passed,
            score,
            weight,
            message,
        }
    }

    /// Returns `true` if the check passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the achieved score.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// A weighted checklist report for a draft post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoReport {
    /// Composite score in the range `0..=100`.
    percentage: u8,
    /// Overall verdict.
    grade: &'static str,
    /// Individual check results.
    checks: Vec<SeoCheck>,
}

impl SeoReport {
    /// Returns the composite score.
    #[inline]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Returns the overall verdict.
    #[inline]
    pub fn grade(&self) -> &'static str {
        self.grade
    }

    /// Returns the individual check results.
    #[inline]
    pub fn checks(&self) -> &[SeoCheck] {
        &self.checks
    }
}

/// Evaluates the advisory checklist for a draft post.
///
/// The draft provides `title`, `slug`, `excerpt`, `body`, `focus_keyword`
/// and `featured_image` fields. Every check is computed independently and
/// the weights sum to 100. The result is deterministic for a given input.
pub fn evaluate(draft: &Map) -> SeoReport {
    let title = draft.get_str("title").unwrap_or_default();
    let slug = draft.get_str("slug").unwrap_or_default();
    let excerpt = draft.get_str("excerpt").unwrap_or_default();
    let body = draft.get_str("body").unwrap_or_default();
    let keyword = draft.get_str("focus_keyword").unwrap_or_default();
    let featured_image = draft.get_str("featured_image").unwrap_or_default();

    let keyword_tokens = tokenize(keyword);
    let plain_body = TAG_PATTERN.replace_all(body, " ").into_owned();
    let body_tokens = tokenize(&plain_body);
    let word_count = body_tokens.len();

    let mut checks = Vec::with_capacity(11);
    checks.push(check_keyword_present(&keyword_tokens));
    checks.push(check_keyword_in_title(title, &keyword_tokens));
    checks.push(check_keyword_in_excerpt(excerpt, &keyword_tokens));
    checks.push(check_keyword_density(&body_tokens, &keyword_tokens));
    checks.push(check_keyword_in_introduction(&plain_body, &keyword_tokens));
    checks.push(check_keyword_in_headings(body, &keyword_tokens));
    checks.push(check_title_length(title));
    checks.push(check_excerpt_length(excerpt));
    checks.push(check_slug_format(slug, keyword));
    checks.push(check_body_length(word_count));
    checks.push(check_featured_image(featured_image));

    let total: f64 = checks.iter().map(|check| check.score).sum();
    let percentage = total.clamp(0.0, 100.0).round() as u8;
    let grade = match percentage {
        90..=100 => "excellent",
        70..=89 => "good",
        50..=69 => "fair",
        _ => "poor",
    };
    SeoReport {
        percentage,
        grade,
        checks,
    }
}

/// Splits the text into lowercase words with punctuation trimmed off.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_owned())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Counts word-boundary-safe occurrences of the keyword phrase.
fn phrase_occurrences(tokens: &[String], phrase: &[String]) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    tokens
        .windows(phrase.len())
        .filter(|window| *window == phrase)
        .count()
}

fn contains_phrase(text: &str, phrase: &[String]) -> bool {
    phrase_occurrences(&tokenize(text), phrase) > 0
}

fn check_keyword_present(keyword_tokens: &[String]) -> SeoCheck {
    let passed = !keyword_tokens.is_empty();
    let message = if passed {
        "a focus keyword is set".to_owned()
    } else {
        "no focus keyword is set".to_owned()
    };
    SeoCheck::new(
        "keyword_present",
        5.0,
        passed,
        if passed { 5.0 } else { 0.0 },
        message,
    )
}

fn check_keyword_in_title(title: &str, keyword_tokens: &[String]) -> SeoCheck {
    const WEIGHT: f64 = 15.0;
    if !contains_phrase(title, keyword_tokens) {
        let message = "the title should contain the focus keyword".to_owned();
        return SeoCheck::new("keyword_in_title", WEIGHT, false, 0.0, message);
    }

    let opening = title.chars().take(60).collect::<String>();
    if contains_phrase(&opening, keyword_tokens) {
        let message = "the title opens with the focus keyword".to_owned();
        SeoCheck::new("keyword_in_title", WEIGHT, true, WEIGHT, message)
    } else {
        let message = "the title contains the focus keyword".to_owned();
        SeoCheck::new("keyword_in_title", WEIGHT, true, 10.0, message)
    }
}

fn check_keyword_in_excerpt(excerpt: &str, keyword_tokens: &[String]) -> SeoCheck {
    let passed = contains_phrase(excerpt, keyword_tokens);
    let message = if passed {
        "the excerpt contains the focus keyword".to_owned()
    } else {
        "the excerpt should contain the focus keyword".to_owned()
    };
    SeoCheck::new(
        "keyword_in_excerpt",
        10.0,
        passed,
        if passed { 10.0 } else { 0.0 },
        message,
    )
}

fn check_keyword_density(body_tokens: &[String], keyword_tokens: &[String]) -> SeoCheck {
    const WEIGHT: f64 = 15.0;
    const LOWER: f64 = 0.5;
    const UPPER: f64 = 2.5;

    let occurrences = phrase_occurrences(body_tokens, keyword_tokens);
    if occurrences == 0 || body_tokens.is_empty() {
        let message = "the body should mention the focus keyword".to_owned();
        return SeoCheck::new("keyword_density", WEIGHT, false, 0.0, message);
    }

    let density = occurrences as f64 / body_tokens.len() as f64 * 100.0;
    if (LOWER..=UPPER).contains(&density) {
        let message = format!("the keyword density is {density:.1}%");
        SeoCheck::new("keyword_density", WEIGHT, true, WEIGHT, message)
    } else {
        // Degrades linearly with the distance from the band, but a body
        // that mentions the keyword at all keeps a tenth of the weight.
        let distance = if density < LOWER {
            LOWER - density
        } else {
            density - UPPER
        };
        let score = (WEIGHT * (1.0 - distance / UPPER)).max(WEIGHT * 0.1);
        let message =
            format!("the keyword density {density:.1}% is outside the {LOWER}%-{UPPER}% band");
        SeoCheck::new("keyword_density", WEIGHT, false, score, message)
    }
}

fn check_keyword_in_introduction(plain_body: &str, keyword_tokens: &[String]) -> SeoCheck {
    let introduction = plain_body.chars().take(300).collect::<String>();
    let passed = contains_phrase(&introduction, keyword_tokens);
    let message = if passed {
        "the focus keyword appears in the introduction".to_owned()
    } else {
        "the focus keyword should appear in the first 300 characters".to_owned()
    };
    SeoCheck::new(
        "keyword_in_introduction",
        10.0,
        passed,
        if passed { 10.0 } else { 0.0 },
        message,
    )
}

fn check_keyword_in_headings(body: &str, keyword_tokens: &[String]) -> SeoCheck {
    let passed = HEADING_PATTERN.captures_iter(body).any(|captures| {
        captures.get(1).is_some_and(|heading| {
            let text = TAG_PATTERN.replace_all(heading.as_str(), " ");
            contains_phrase(&text, keyword_tokens)
        })
    });
    let message = if passed {
        "a heading contains the focus keyword".to_owned()
    } else {
        "no heading contains the focus keyword".to_owned()
    };
    SeoCheck::new(
        "keyword_in_headings",
        10.0,
        passed,
        if passed { 10.0 } else { 0.0 },
        message,
    )
}

fn check_title_length(title: &str) -> SeoCheck {
    const WEIGHT: f64 = 10.0;
    let length = title.chars().count();
    let (passed, score) = match length {
        50..=60 => (true, WEIGHT),
        30..=49 => (false, WEIGHT * (length - 30) as f64 / 20.0),
        61..=70 => (false, WEIGHT * (70 - length) as f64 / 10.0),
        _ => (false, 0.0),
    };
    let message = if passed {
        format!("the title is {length} characters")
    } else {
        format!("the title is {length} characters, aim for 50-60")
    };
    SeoCheck::new("title_length", WEIGHT, passed, score, message)
}

fn check_excerpt_length(excerpt: &str) -> SeoCheck {
    const WEIGHT: f64 = 10.0;
    let length = excerpt.chars().count();
    let (passed, score) = match length {
        150..=160 => (true, WEIGHT),
        120..=149 => (false, WEIGHT * (length - 120) as f64 / 30.0),
        161..=180 => (false, WEIGHT * (180 - length) as f64 / 20.0),
        _ => (false, 0.0),
    };
    let message = if passed {
        format!("the excerpt is {length} characters")
    } else {
        format!("the excerpt is {length} characters, aim for 150-160")
    };
    SeoCheck::new("excerpt_length", WEIGHT, passed, score, message)
}

fn check_slug_format(slug: &str, keyword: &str) -> SeoCheck {
    const WEIGHT: f64 = 5.0;
    let well_formed = SLUG_PATTERN.is_match(slug);
    let keyword_slug = slug::slugify(keyword);
    if well_formed && !keyword_slug.is_empty() && slug.contains(&keyword_slug) {
        let message = "the slug contains the focus keyword".to_owned();
        SeoCheck::new("slug_format", WEIGHT, true, WEIGHT, message)
    } else if well_formed {
        let message = "the slug should contain the focus keyword".to_owned();
        SeoCheck::new("slug_format", WEIGHT, false, WEIGHT / 2.0, message)
    } else {
        let message = "the slug should be lowercase words joined by hyphens".to_owned();
        SeoCheck::new("slug_format", WEIGHT, false, 0.0, message)
    }
}

fn check_body_length(word_count: usize) -> SeoCheck {
    const WEIGHT: f64 = 5.0;
    let passed = word_count >= 300;
    let score = if passed {
        WEIGHT
    } else {
        WEIGHT * word_count as f64 / 300.0
    };
    let message = if passed {
        format!("the body has {word_count} words")
    } else {
        format!("the body has {word_count} words, aim for at least 300")
    };
    SeoCheck::new("body_length", WEIGHT, passed, score, message)
}

fn check_featured_image(featured_image: &str) -> SeoCheck {
    const WEIGHT: f64 = 5.0;
    let (passed, message) = if featured_image.is_empty() {
        (false, "no featured image is set".to_owned())
    } else if URL_SCHEME_PATTERN.is_match(featured_image) {
        (true, "a featured image is set".to_owned())
    } else {
        (false, "the featured image URL has no scheme".to_owned())
    };
    SeoCheck::new(
        "featured_image",
        WEIGHT,
        passed,
        if passed { WEIGHT } else { 0.0 },
        message,
    )
}

/// Markup tags to be stripped from rich text.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("fail to create a regex for markup tags"));

/// Heading spans in rich text.
static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[1-6][^>]*>(.*?)</h[1-6]>")
        .expect("fail to create a regex for heading spans")
});

/// Lowercase hyphen-separated slugs.
static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("fail to create a regex for slugs")
});

/// URLs with an explicit scheme.
static URL_SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("fail to create a regex for URL schemes")
});

#[cfg(test)]
mod tests {
    use super::evaluate;
    use zino::prelude::*;

    fn complete_draft() -> Map {
        let title = format!("Kaffe {}", "a".repeat(49));
        let excerpt = format!("Kaffe {}", "b".repeat(149));
        let body = format!(
            "<h2>Kaffe</h2> <p>kaffe smager godt {}</p>",
            "fyldord ".repeat(296)
        );
        json!({
            "title": title,
            "slug": "kaffe-guide",
            "excerpt": excerpt,
            "body": body,
            "focus_keyword": "Kaffe",
            "featured_image": "https://cdn.example.dk/kaffe.jpg",
        })
        .into_map_opt()
        .unwrap_or_default()
    }

    #[test]
    fn it_awards_full_marks_to_a_complete_draft() {
        let report = evaluate(&complete_draft());
        for check in report.checks() {
            assert!(check.passed(), "failed: {check:?}");
        }
        assert_eq!(report.percentage(), 100);
        assert_eq!(report.grade(), "excellent");
    }

    #[test]
    fn it_is_deterministic_and_bounded() {
        let draft = complete_draft();
        let first = evaluate(&draft);
        let second = evaluate(&draft);
        assert_eq!(first, second);
        assert!(first.percentage() <= 100);

        let empty = evaluate(&Map::new());
        assert_eq!(empty.percentage(), 0);
        assert_eq!(empty.grade(), "poor");
    }

    #[test]
    fn it_reduces_the_score_for_a_stuffed_body() {
        let draft = json!({
            "title": "Shopping",
            "slug": "shopping",
            "excerpt": "",
            "body": "shopping shopping widget test shopping",
            "focus_keyword": "shopping",
            "featured_image": "",
        })
        .into_map_opt()
        .unwrap_or_default();
        let report = evaluate(&draft);
        let density = report
            .checks()
            .iter()
            .find(|check| check.name == "keyword_density")
            .unwrap();
        assert!(!density.passed());
        assert!(density.score() > 0.0);
        assert!(density.score() < density.weight);
    }

    #[test]
    fn it_does_not_match_inside_longer_words() {
        let draft = json!({
            "title": "Tehandel på nettet",
            "body": "<p>Apoteket sælger ikke te i dag.</p>",
            "focus_keyword": "te",
        })
        .into_map_opt()
        .unwrap_or_default();
        let report = evaluate(&draft);
        let density = report
            .checks()
            .iter()
            .find(|check| check.name == "keyword_density")
            .unwrap();
        // "Tehandel" and "Apoteket" must not count as occurrences of "te".
        assert!(density.message.contains("16.7%") || density.score() < density.weight);

        let title = report
            .checks()
            .iter()
            .find(|check| check.name == "keyword_in_title")
            .unwrap();
        assert!(!title.passed());
    }

    #[test]
    fn it_checks_headings_and_slug_independently() {
        let draft = json!({
            "title": "En guide til vin",
            "slug": "druesaft-og-lagring",
            "excerpt": "Vin til enhver lejlighed.",
            "body": "<h3>God vin</h3><p>Vin passer til mad.</p>",
            "focus_keyword": "vin",
            "featured_image": "billede.jpg",
        })
        .into_map_opt()
        .unwrap_or_default();
        let report = evaluate(&draft);
        let by_name = |name: &str| {
            report
                .checks()
                .iter()
                .find(|check| check.name == name)
                .unwrap()
        };
        assert!(by_name("keyword_in_headings").passed());
        // Well-formed slug without the keyword keeps half the weight.
        let slug = by_name("slug_format");
        assert!(!slug.passed());
        assert_eq!(slug.score(), 2.5);
        // A bare file name is not a well-formed image URL.
        assert!(!by_name("featured_image").passed());
    }
}
