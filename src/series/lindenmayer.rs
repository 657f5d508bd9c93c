use std::{collections::HashMap, hash::Hash};

// -------------------------------------------------------------------------------------------------

/// Rewrites the given axiom `iterations` times with a Lindenmayer system: every symbol with a
/// rule gets replaced by the rule's symbols, all other symbols are kept as they are.
///
/// # Examples:
///
/// ```rust
/// use std::collections::HashMap;
/// use algoseq::series::lindenmayer;
///
/// let rules = HashMap::from([(0, vec![0, 1]), (1, vec![0])]);
/// assert_eq!(lindenmayer(&[0], 3, &rules), vec![0, 1, 0, 0, 1]);
/// ```
pub fn lindenmayer<T>(axiom: &[T], iterations: usize, rules: &HashMap<T, Vec<T>>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut symbols = axiom.to_vec();
    for _ in 0..iterations {
        symbols = symbols
            .iter()
            .flat_map(|symbol| match rules.get(symbol) {
                Some(replacement) => replacement.clone(),
                None => vec![symbol.clone()],
            })
            .collect();
    }
    symbols
}

/// Character based version of [`lindenmayer`]: rewrites all chars of the axiom with the given
/// replacement strings.
pub fn lindenmayer_str(axiom: &str, iterations: usize, rules: &HashMap<char, &str>) -> String {
    let rules = rules
        .iter()
        .map(|(symbol, replacement)| (*symbol, replacement.chars().collect::<Vec<_>>()))
        .collect::<HashMap<_, _>>();
    lindenmayer(&axiom.chars().collect::<Vec<_>>(), iterations, &rules)
        .into_iter()
        .collect()
}

// --------------------------------------------------------------------------------------------------
