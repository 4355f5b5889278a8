// SPDX-License-Identifier: MPL-2.0
//! Page initialization and the language-switch handler.
//!
//! The hosting shell owns the real document: it calls
//! [`initialize_page`] once its DOM is ready, and routes clicks on
//! elements tagged with a language code to [`language_clicked`] (after
//! preventing the default navigation). Both operate on the [`Dom`]
//! capability so they run unchanged against a real page or a test fake.

use crate::url_state::update_query_params;
use url::Url;

/// The slice of the document the page controller touches.
///
/// `replace_url` is a history update: it changes the visible URL without
/// navigating and without adding a history entry (the current entry is
/// replaced). Hosts without a search input report `has_search_input` as
/// false and may implement the input accessors as no-ops.
pub trait Dom {
    /// Returns the page's current URL.
    fn current_url(&self) -> Url;

    /// Replaces the visible URL without navigating.
    fn replace_url(&mut self, url: &Url);

    /// Performs a full page reload, so the server re-renders the page.
    fn reload(&mut self);

    /// Returns whether the page has a search input field.
    fn has_search_input(&self) -> bool;

    /// Sets the search input's value.
    fn set_search_input(&mut self, value: &str);

    /// Submits the search form programmatically.
    fn submit_search_form(&mut self);
}

/// Runs once when the host's DOM is ready.
///
/// If the current URL carries a `q` parameter and the page has a search
/// input, the input is populated with it and the search form submitted
/// exactly once, so a shared or bookmarked URL reproduces the search
/// without user action. A missing input or absent `q` is a silent no-op.
pub fn initialize_page(dom: &mut impl Dom) {
    let url = dom.current_url();
    let query = url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned());

    if let Some(q) = query {
        if dom.has_search_input() {
            dom.set_search_input(&q);
            dom.submit_search_form();
        }
    }
}

/// Handles a click on a language-tagged element.
///
/// Sets the `lang` query parameter on the current URL, applies it with a
/// history replace, then reloads so the server re-renders in the new
/// language. No client-side re-rendering happens here.
pub fn language_clicked(dom: &mut impl Dom, lang: &str) {
    let mut url = dom.current_url();
    update_query_params(&mut url, &[("lang", lang)]);
    dom.replace_url(&url);
    dom.reload();
}
