/*!
Deletion-variant generation.

A single round splits a word at every position `0..=n` and drops the first
character of the right half. The split at the end has nothing to drop, so the
word itself is always among the `n + 1` outputs.

Composing rounds gives the deletion closure used both to index trained terms
and to look up the index at query time. Deleting from both sides and meeting in
the middle covers insertions, deletions, substitutions and transpositions
without ever enumerating them.
*/

/// All strings reachable from `word` by deleting at most one character.
///
/// For a word of `n` characters this returns exactly `n + 1` strings, the last
/// being `word` unchanged.
pub fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() + 1);
    for i in 0..=chars.len() {
        if i < chars.len() {
            out.push(chars[..i].iter().chain(&chars[i + 1..]).collect());
        } else {
            out.push(word.to_string());
        }
    }
    out
}

/// Deletion closure of `word` over `depth` rounds.
///
/// Returns the outputs of every round concatenated, round one first. The same
/// string can appear several times; callers deduplicate where it matters. A
/// `depth` of 0 is treated as 1.
pub fn edits_multi(word: &str, depth: usize) -> Vec<String> {
    let mut frontier = edits1(word);
    let mut all = frontier.clone();
    for _ in 1..depth {
        let next: Vec<String> = frontier.iter().flat_map(|edit| edits1(edit)).collect();
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}
