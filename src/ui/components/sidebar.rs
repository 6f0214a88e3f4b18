//! Detail page navigation: back, tab selectors, actions and language toggle.
//!
//! Every button carries a hotkey so the terminal host can trigger it with a
//! single key press.

use crate::app::{AppState, Command, DetailTab};
use crate::i18n::{Language, Translator};
use crate::ui::bindings::{Binding, Bindings};
use crate::ui::viewmodel::{ElementId, NodeKind, ViewNode};

/// Builds the navigation toolbars and registers their bindings.
pub fn sidebar(state: &AppState, t: &Translator<'_>, bindings: &mut Bindings) -> Vec<ViewNode> {
    let mut button =
        |element: ElementId, label: &str, active: bool, hotkey: char, command: Command| {
            bindings.register(Binding::command(element.clone(), command).with_hotkey(hotkey));
            ViewNode::button(element, label, active)
        };

    let back = button(ElementId::Back, t.t("backToList"), false, 'b', Command::BackToList);

    let tabs: Vec<ViewNode> = DetailTab::all()
        .iter()
        .map(|&tab| {
            let hotkey = match tab {
                DetailTab::Profile => 'p',
                DetailTab::Analytics => 'a',
            };
            button(
                ElementId::Tab(tab),
                t.t(tab.label_key()),
                state.active_tab == tab,
                hotkey,
                Command::SetActiveTab(tab),
            )
        })
        .collect();

    let actions = vec![
        button(ElementId::Edit, t.t("editProfile"), state.editing, 'e', Command::SetEditing(true)),
        button(ElementId::Share, t.t("shareProfile"), false, 's', Command::Share),
        button(ElementId::Download, t.t("downloadEPK"), false, 'd', Command::DownloadEpk),
    ];

    let languages: Vec<ViewNode> = Language::all()
        .iter()
        .map(|&language| {
            let hotkey = match language {
                Language::Ko => 'K',
                Language::En => 'E',
            };
            button(
                ElementId::Language(language),
                language.label(),
                state.language == language,
                hotkey,
                Command::SetLanguage(language.code().to_string()),
            )
        })
        .collect();

    let mut nav = vec![back];
    nav.extend(languages);

    vec![
        ViewNode::new(NodeKind::Toolbar).with_children(nav),
        ViewNode::section(
            Some(t.t("menu").to_string()),
            vec![ViewNode::new(NodeKind::Toolbar).with_children(tabs)],
        ),
        ViewNode::section(
            Some(t.t("actions").to_string()),
            vec![ViewNode::new(NodeKind::Toolbar).with_children(actions)],
        ),
    ]
}
