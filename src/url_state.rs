// SPDX-License-Identifier: MPL-2.0
//! Query-parameter synchronization for the page URL.
//!
//! The page URL is the only persistent state the frontend owns: the search
//! term and language live in `q` and `lang` so a copied URL reproduces the
//! view. This module edits those parameters in place; applying the result
//! to the visible URL is the host's [`Dom::replace_url`](crate::page::Dom).

use url::Url;

/// Sets or deletes query parameters on `url`.
///
/// For each `(key, value)` pair: a non-empty value sets the parameter,
/// overwriting an existing occurrence in place (duplicate occurrences
/// beyond the first are dropped); an empty value deletes the parameter
/// entirely. Parameters not named in `params` are left untouched, in
/// their original order. An emptied query is removed rather than left as
/// a dangling `?`.
pub fn update_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for (key, value) in params {
        if value.is_empty() {
            pairs.retain(|(k, _)| k != key);
        } else if let Some(first) = pairs.iter().position(|(k, _)| k == key) {
            pairs[first].1 = (*value).to_string();
            // URLSearchParams.set semantics: later duplicates collapse
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = k != key || index == first;
                index += 1;
                keep
            });
        } else {
            pairs.push(((*key).to_string(), (*value).to_string()));
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url(s: &str) -> Url {
        Url::parse(s).expect("test URL should parse")
    }

    #[test]
    fn sets_new_parameter_and_skips_empty_one() {
        let mut url = page_url("https://bookfinder.example/");
        update_query_params(&mut url, &[("q", "cats"), ("lang", "")]);
        assert_eq!(url.query(), Some("q=cats"));
    }

    #[test]
    fn empty_value_deletes_parameter_and_leaves_others() {
        let mut url = page_url("https://bookfinder.example/?q=cats&lang=fr");
        update_query_params(&mut url, &[("q", "")]);
        assert_eq!(url.query(), Some("lang=fr"));
    }

    #[test]
    fn overwrites_existing_value_in_place() {
        let mut url = page_url("https://bookfinder.example/?q=cats&lang=fr");
        update_query_params(&mut url, &[("q", "dogs")]);
        assert_eq!(url.query(), Some("q=dogs&lang=fr"));
    }

    #[test]
    fn unmentioned_parameters_are_untouched() {
        let mut url = page_url("https://bookfinder.example/?page=2&q=cats");
        update_query_params(&mut url, &[("lang", "en")]);
        assert_eq!(url.query(), Some("page=2&q=cats&lang=en"));
    }

    #[test]
    fn duplicate_occurrences_collapse_on_set() {
        let mut url = page_url("https://bookfinder.example/?q=a&lang=fr&q=b");
        update_query_params(&mut url, &[("q", "c")]);
        assert_eq!(url.query(), Some("q=c&lang=fr"));
    }

    #[test]
    fn deleting_last_parameter_removes_the_query_entirely() {
        let mut url = page_url("https://bookfinder.example/?q=cats");
        update_query_params(&mut url, &[("q", "")]);
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://bookfinder.example/");
    }

    #[test]
    fn values_are_percent_encoded_by_the_url_api() {
        let mut url = page_url("https://bookfinder.example/");
        update_query_params(&mut url, &[("q", "guerre & paix")]);
        assert_eq!(url.query(), Some("q=guerre+%26+paix"));
    }
}
