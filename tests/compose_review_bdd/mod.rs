//! Support modules for the review composition BDD tests.

#[path = "../support/composer.rs"]
pub(crate) mod composer;
pub(crate) mod state;

pub(crate) use state::{
    ComposeState, selected_category, selected_characteristics, selected_item, selected_rating,
};
