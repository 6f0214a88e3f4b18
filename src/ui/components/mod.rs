//! Composable view components.
//!
//! Each component builds one part of the presentation tree from state and
//! registers the bindings of the interactive elements it creates. Components
//! never read anything but their arguments, so composing them twice from the
//! same state yields the same nodes and bindings.
//!
//! # Components
//!
//! - [`list`]: Title, search box and artist card grid
//! - [`sidebar`]: Back, tab, action and language buttons
//! - [`header`]: Cover, avatar, name, genre, location and members
//! - [`profile`]: Biography, music, videos, shows, social links and contact
//! - [`analytics`]: View count, top song and city, demographic bars, ranked songs
//! - [`edit_form`]: Edit profile overlay
//! - [`footer`]: Hint line
//!
//! # Layout Modes
//!
//! - [`list_view`]: List page + hints
//! - [`detail_view`]: Sidebar + header + active tab (+ edit overlay) + hints

pub mod analytics;
pub mod edit_form;
pub mod footer;
pub mod header;
pub mod list;
pub mod profile;
pub mod sidebar;

use crate::app::{AppState, DetailTab};
use crate::domain::{AnalyticsData, ArtistProfile};
use crate::i18n::Translator;
use crate::ui::bindings::Bindings;
use crate::ui::viewmodel::{NodeKind, ViewNode};

/// Builds the list page children.
pub fn list_view(state: &AppState, t: &Translator<'_>, bindings: &mut Bindings) -> Vec<ViewNode> {
    let mut children = list::list_page(state, t, bindings);
    children.push(ViewNode::new(NodeKind::Rule));
    children.push(footer::static_hints("hintList", t));
    children
}

/// Builds the detail page children for `profile`.
///
/// The edit overlay is composed last, above the page, when `state.editing`
/// is set.
pub fn detail_view(
    state: &AppState,
    profile: &ArtistProfile,
    analytics: &AnalyticsData,
    t: &Translator<'_>,
    bindings: &mut Bindings,
) -> Vec<ViewNode> {
    let mut children = sidebar::sidebar(state, t, bindings);
    children.push(ViewNode::new(NodeKind::Rule));
    children.extend(header::profile_header(profile, t));
    children.push(ViewNode::new(NodeKind::Rule));

    children.extend(match state.active_tab {
        DetailTab::Profile => profile::profile_tab(profile, t),
        DetailTab::Analytics => analytics::analytics_tab(analytics, t),
    });

    children.push(ViewNode::new(NodeKind::Rule));
    if state.editing {
        children.push(edit_form::edit_overlay(profile, t, bindings));
        children.push(footer::static_hints("hintForm", t));
    } else {
        let page = ViewNode::section(None, children.clone());
        children.push(footer::hotkey_hints(bindings, &page));
    }
    children
}
