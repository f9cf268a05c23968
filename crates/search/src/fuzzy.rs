//! Character-level matching primitives.
//!
//! Both functions compare `char`s exactly; callers lowercase beforehand.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Outcome of a successful ordered-subsequence scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequenceMatch {
    /// Number of query characters matched (always the full query length).
    pub matched: usize,
    /// Longest run of matched characters at adjacent positions in the text.
    pub longest_run: usize,
}

/// Find the query characters in `text`, in order, not necessarily adjacent.
///
/// The scan is greedy: each query character binds to its leftmost occurrence
/// after the previous binding. Returns `None` when some query character
/// cannot be placed.
///
/// # Example
/// ```
/// use staffdir_search::subsequence_match;
///
/// let m = subsequence_match("engineering", "engr").unwrap();
/// assert_eq!(m.matched, 4);
/// assert_eq!(m.longest_run, 3); // "eng"
/// assert!(subsequence_match("hello", "lhe").is_none());
/// ```
pub fn subsequence_match(text: &str, query: &str) -> Option<SubsequenceMatch> {
    let query_chars: Vec<char> = query.chars().collect();

    let mut matched = 0;
    let mut run = 0;
    let mut longest_run = 0;
    let mut last_pos: Option<usize> = None;

    for (pos, c) in text.chars().enumerate() {
        if matched == query_chars.len() {
            break;
        }
        if c != query_chars[matched] {
            continue;
        }

        run = match last_pos {
            Some(last) if last + 1 == pos => run + 1,
            _ => 1,
        };
        longest_run = longest_run.max(run);
        last_pos = Some(pos);
        matched += 1;
    }

    (matched == query_chars.len()).then_some(SubsequenceMatch {
        matched,
        longest_run,
    })
}
