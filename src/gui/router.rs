// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::tally::PAGE,
    &pages::progression::PAGE,
    &pages::comparison::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
