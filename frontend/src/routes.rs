use common::extraction::ViewPrefs;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::result_view_page::{ResultViewPage, ResultViewPageWithPrefs};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    ResultViewPage {},


    #[route("/result/:prefs")]
    ResultViewPageWithPrefs { prefs: UrlParam<ViewPrefs> },

}

impl Route {
    pub fn result_view(prefs: ViewPrefs) -> Self {
        Self::ResultViewPageWithPrefs { prefs: UrlParam::from(prefs) }
    }

    /// Preferences encoded in this route; the bare root uses the defaults.
    pub fn view_prefs(&self) -> ViewPrefs {
        match self {
            Self::ResultViewPage {} => ViewPrefs::default(),
            Self::ResultViewPageWithPrefs { prefs } => prefs.0,
        }
    }
}
