//! Flattening of nested, optionally-absent repeating structures
//!
//! Resources nest repeating backbone elements several levels deep
//! (study → series → instance). These helpers walk such chains for any
//! shape, given functions that extract the optional child list of each
//! level. An absent list and an empty list contribute the same: nothing.
//!
//! The returned iterators are lazy and `Clone`, so a traversal can be
//! restarted from a saved copy.

/// Children of every root, in root order.
pub fn flatten_mid<'a, R, M, I, FM>(roots: I, mid: FM) -> impl Iterator<Item = &'a M> + Clone + 'a
where
    R: 'a,
    M: 'a,
    I: IntoIterator<Item = &'a R>,
    I::IntoIter: Clone + 'a,
    FM: Fn(&'a R) -> Option<&'a [M]> + Clone + 'a,
{
    roots
        .into_iter()
        .flat_map(move |root| mid(root).unwrap_or_default())
}

/// Grandchildren of every root: root-major, then mid-level-major, then leaf
/// order.
pub fn flatten<'a, R, M, L, I, FM, FL>(
    roots: I,
    mid: FM,
    leaf: FL,
) -> impl Iterator<Item = &'a L> + Clone + 'a
where
    R: 'a,
    M: 'a,
    L: 'a,
    I: IntoIterator<Item = &'a R>,
    I::IntoIter: Clone + 'a,
    FM: Fn(&'a R) -> Option<&'a [M]> + Clone + 'a,
    FL: Fn(&'a M) -> Option<&'a [L]> + Clone + 'a,
{
    flatten_mid(roots, mid).flat_map(move |m| leaf(m).unwrap_or_default())
}

/// Number of mid-level elements across all roots whose list is present.
pub fn count_mid_level<'a, R, M, I, FM>(roots: I, mid: FM) -> usize
where
    R: 'a,
    M: 'a,
    I: IntoIterator<Item = &'a R>,
    FM: Fn(&'a R) -> Option<&'a [M]>,
{
    roots.into_iter().filter_map(mid).map(|children| children.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Root {
        mids: Option<Vec<Mid>>,
    }

    struct Mid {
        leaves: Option<Vec<u32>>,
    }

    fn mids(root: &Root) -> Option<&[Mid]> {
        root.mids.as_deref()
    }

    fn leaves(mid: &Mid) -> Option<&[u32]> {
        mid.leaves.as_deref()
    }

    fn roots() -> Vec<Root> {
        vec![
            Root {
                mids: Some(vec![
                    Mid {
                        leaves: Some(vec![1, 2]),
                    },
                    Mid { leaves: None },
                    Mid {
                        leaves: Some(vec![3]),
                    },
                ]),
            },
            Root { mids: None },
            Root {
                mids: Some(vec![Mid {
                    leaves: Some(vec![4, 5]),
                }]),
            },
        ]
    }

    #[test]
    fn test_flatten_order() {
        let roots = roots();
        let collected: Vec<u32> = flatten(&roots, mids, leaves).copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_absent_root_does_not_stop_traversal() {
        let roots = vec![
            Root { mids: None },
            Root {
                mids: Some(vec![Mid {
                    leaves: Some(vec![7]),
                }]),
            },
        ];
        assert_eq!(flatten(&roots, mids, leaves).count(), 1);
        assert_eq!(count_mid_level(&roots, mids), 1);
    }

    #[test]
    fn test_flatten_is_restartable() {
        let roots = roots();
        let mut iter = flatten(&roots, mids, leaves);
        let saved = iter.clone();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.count(), 4);
        assert_eq!(saved.count(), 5);
    }

    #[test]
    fn test_flatten_mid_and_count() {
        let roots = roots();
        assert_eq!(flatten_mid(&roots, mids).count(), 4);
        assert_eq!(count_mid_level(&roots, mids), 4);
    }

    #[test]
    fn test_no_roots() {
        let roots: Vec<Root> = Vec::new();
        assert_eq!(flatten(&roots, mids, leaves).count(), 0);
        assert_eq!(count_mid_level(&roots, mids), 0);
    }

    #[test]
    fn test_with_closures() {
        let roots = roots();
        let odd = flatten(&roots, |r| r.mids.as_deref(), |m| m.leaves.as_deref())
            .filter(|leaf| **leaf % 2 == 1)
            .count();
        assert_eq!(odd, 3);
    }
}
