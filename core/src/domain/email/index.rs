use std::collections::HashMap;

use crate::domain::email::matcher::{NameKey, NormalizedSender};

/// Normalized casino names, indexed for exact lookup with an ordered
/// fallback list for partial matching.
#[derive(Debug, Clone, Default)]
pub struct CasinoNameIndex {
    exact: HashMap<String, i64>,
    keys: Vec<(NameKey, i64)>,
}

impl CasinoNameIndex {
    /// Casinos whose name normalizes to nothing are left out. On duplicate
    /// keys the first casino wins.
    pub fn new<'a>(casinos: impl IntoIterator<Item = (i64, &'a str)>) -> Self {
        let mut index = Self::default();
        for (casino_id, name) in casinos {
            let key = NameKey::new(name);
            if key.is_empty() {
                continue;
            }
            index
                .exact
                .entry(key.as_str().to_string())
                .or_insert(casino_id);
            index.keys.push((key, casino_id));
        }
        index
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Exact hits on display name, full address, then domain label; otherwise
    /// the first casino, in insertion order, that partially matches.
    pub fn find_match(&self, sender: &NormalizedSender) -> Option<i64> {
        [&sender.name, &sender.address, &sender.domain]
            .into_iter()
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| self.exact.get(candidate.as_str()).copied())
            .or_else(|| {
                self.keys
                    .iter()
                    .find(|(key, _)| sender.matches_partially(key.as_str()))
                    .map(|(_, casino_id)| *casino_id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::matcher::{Sender, email_matches_casino};

    const CASINOS: &[(i64, &str)] = &[
        (1, "Lucky Casino"),
        (2, "Lucky"),
        (3, "🎰"),
        (4, "Royal Spins"),
        (5, "LUCKY CASINO"),
    ];

    fn index() -> CasinoNameIndex {
        CasinoNameIndex::new(CASINOS.iter().copied())
    }

    fn sender(name: Option<&str>, email: Option<&str>) -> NormalizedSender {
        NormalizedSender::new(Sender {
            from_name: name,
            from_email: email,
        })
    }

    #[test]
    fn test_skips_unnormalizable_names() {
        assert_eq!(index().len(), 4);
    }

    #[test]
    fn test_exact_hit_beats_earlier_partial() {
        let found = index().find_match(&sender(Some("Lucky"), None));
        assert_eq!(found, Some(2));
    }

    #[test]
    fn test_duplicate_keys_keep_first_casino() {
        let found = index().find_match(&sender(Some("lucky casino"), None));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_domain_exact_hit() {
        let found = index().find_match(&sender(None, Some("promo@royalspins.com")));
        assert_eq!(found, Some(4));
    }

    #[test]
    fn test_partial_fallback_in_order() {
        let found = index().find_match(&sender(Some("Lucky Casino VIP Club"), None));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_no_match() {
        let found = index().find_match(&sender(Some("Weekly digest"), Some("news@spinpalace.io")));
        assert_eq!(found, None);
    }

    #[test]
    fn test_found_casino_always_matches_by_predicate() {
        let senders = [
            (Some("Lucky"), None),
            (None, Some("vip@luckycasinoclub.com")),
            (Some("Royal Spins Weekly"), Some("hello@mailer.com")),
        ];
        let index = index();
        for (name, email) in senders {
            let raw = Sender {
                from_name: name,
                from_email: email,
            };
            let casino_id = index
                .find_match(&NormalizedSender::new(raw))
                .expect("sender should match a casino");
            let (_, casino_name) = CASINOS
                .iter()
                .find(|(id, _)| *id == casino_id)
                .copied()
                .unwrap();
            assert!(email_matches_casino(raw, &NameKey::new(casino_name)));
        }
    }
}
